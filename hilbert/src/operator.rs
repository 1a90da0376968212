//! Operators: functors and definitions.

use crate::expr::Error;
use crate::{Expr, Fresh, Kind, Subst, Var};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use fnv::FnvHashMap;

/// Pointer to a shared operator.
///
/// An operator combines child expressions of given input kinds
/// into an expression of its result kind.
/// Equality and hashing consider only the identity of the operator;
/// equivalence of different operators is decided by
/// [`Scope::operator_eq`](crate::Scope::operator_eq).
#[derive(Clone)]
pub struct Operator(Arc<OperatorC>);

pub struct OperatorC {
    id: usize,
    pub name: String,
    pub result: Kind,
    pub inputs: Vec<Kind>,
    /// present if and only if the operator is a definition
    pub definition: Option<Definition>,
}

/// Definiens of an operator, together with its formal parameters.
#[derive(Debug)]
pub struct Definition {
    params: Vec<Var>,
    definiens: Expr,
    dummies: Vec<Var>,
    depth: usize,
}

impl Operator {
    /// Create an opaque operator.
    pub fn functor(name: impl Into<String>, result: Kind, inputs: Vec<Kind>, fresh: &Fresh) -> Self {
        Self(Arc::new(OperatorC {
            id: fresh.next(),
            name: name.into(),
            result,
            inputs,
            definition: None,
        }))
    }

    /// Create an operator that abbreviates `definiens`.
    ///
    /// The parameters are replaced by fresh unnamed variables and
    /// all other variables of the definiens by fresh dummy variables.
    /// The result kind is the kind of the definiens and
    /// the input kinds are the kinds of the parameters.
    ///
    /// ~~~
    /// # use hilbert::{Expr, Fresh, Namespace, Operator};
    /// let fresh = Fresh::new();
    /// let mut ns = Namespace::new();
    /// let wff = ns.add_kind("wff", &fresh)?;
    /// ns.add_functor("->", wff.clone(), vec![wff.clone(); 2], &fresh)?;
    /// let p = ns.add_variable("p", wff.clone(), &fresh)?;
    /// let q = ns.add_variable("q", wff, &fresh)?;
    /// let p_imp_p = ns.appl("->", vec![Expr::var(p.clone()), Expr::var(p)])?;
    ///
    /// let taut = Operator::definition("T", vec![], p_imp_p.clone(), &fresh)?;
    /// assert_eq!(taut.depth(), 1);
    /// assert_eq!(taut.get_definition().unwrap().dummies().len(), 1);
    ///
    /// assert!(Operator::definition("dup", vec![q.clone(), q], p_imp_p, &fresh).is_err());
    /// # Ok::<_, hilbert::Error>(())
    /// ~~~
    pub fn definition(
        name: impl Into<String>,
        params: Vec<Var>,
        definiens: Expr,
        fresh: &Fresh,
    ) -> Result<Self, Error> {
        let name = name.into();
        let mut renaming: FnvHashMap<Var, Var> = FnvHashMap::default();
        for param in &params {
            let anon = fresh.unnamed(param.kind().clone());
            if renaming.insert(param.clone(), anon).is_some() {
                return Err(Error::DuplicateParameter(name, param.clone()));
            }
        }

        let mut dummies = Vec::new();
        for var in definiens.variables() {
            renaming.entry(var).or_insert_with_key(|var| {
                let dummy = fresh.dummy(var.kind().clone());
                dummies.push(dummy.clone());
                dummy
            });
        }

        let subst: Subst = renaming
            .iter()
            .map(|(from, to)| (from.clone(), Expr::var(to.clone())))
            .collect();
        let definiens = definiens.subst(&subst);
        let params: Vec<Var> = params.iter().map(|p| renaming[p].clone()).collect();

        let depth = match &definiens {
            Expr::Var(_) => 1,
            Expr::Appl(appl) => appl.op().depth() + 1,
        };
        debug!("definition {} of depth {}: {}", name, depth, definiens);

        Ok(Self(Arc::new(OperatorC {
            id: fresh.next(),
            name,
            result: definiens.kind().clone(),
            inputs: params.iter().map(|p| p.kind().clone()).collect(),
            definition: Some(Definition {
                params,
                definiens,
                dummies,
                depth,
            }),
        })))
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    /// Number of arguments the operator expects.
    pub fn place_count(&self) -> usize {
        self.0.inputs.len()
    }

    /// Return 0 for functors, and the definition depth for definitions.
    pub fn depth(&self) -> usize {
        self.0.definition.as_ref().map_or(0, |def| def.depth)
    }

    pub fn get_definition(&self) -> Option<&Definition> {
        self.0.definition.as_ref()
    }
}

impl Definition {
    pub fn params(&self) -> &[Var] {
        &self.params
    }

    pub fn definiens(&self) -> &Expr {
        &self.definiens
    }

    /// Variables of the definiens that are not parameters.
    pub fn dummies(&self) -> &[Var] {
        &self.dummies
    }

    /// Number of unfoldings needed to reach a functor or a variable.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Return the definiens with parameters replaced by the given arguments.
    pub fn unfold(&self, args: &[Expr]) -> Expr {
        debug_assert_eq!(args.len(), self.params.len());
        let subst: Subst = self.params.iter().cloned().zip(args.iter().cloned()).collect();
        self.definiens.subst(&subst)
    }
}

impl core::ops::Deref for Operator {
    type Target = OperatorC;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Operator {}

impl Hash for Operator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Operator").field(&self.0.name).finish()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.name.fmt(f)
    }
}
