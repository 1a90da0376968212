//! In-memory store of kinds, operators, variables, and statements.

use super::union_find::UnionFind;
use super::{Error, Scope, Symbol};
use crate::{Expr, Fresh, Kind, Operator, Statement, Var};
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use fnv::FnvHashMap;

/// Map from names to kinds, operators, variables, and statements.
///
/// Kinds, operators, and symbols (variables and statements)
/// live in separate namespaces, so
/// a kind and an operator may share the same name.
///
/// ~~~
/// # use hilbert::{Expr, Fresh, Namespace, Scope};
/// let fresh = Fresh::new();
/// let mut ns = Namespace::new();
/// let wff = ns.add_kind("wff", &fresh)?;
/// let formula = ns.add_kind("formula", &fresh)?;
/// ns.bind_kind("prop", &wff)?;
/// assert_eq!(ns.get_kind("prop"), Some(&wff));
///
/// assert!(!ns.kind_eq(&wff, &formula));
/// ns.identify_kinds(&formula, &wff);
/// assert!(ns.kind_eq(&wff, &formula));
///
/// assert!(ns.add_kind("wff", &fresh).is_err());
/// # Ok::<_, hilbert::Error>(())
/// ~~~
#[derive(Clone, Default)]
pub struct Namespace {
    kinds: FnvHashMap<String, Kind>,
    kind_classes: UnionFind,
    operators: FnvHashMap<String, Operator>,
    operator_classes: UnionFind,
    symbols: FnvHashMap<String, Symbol>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new kind.
    pub fn add_kind(&mut self, name: &str, fresh: &Fresh) -> Result<Kind, Error> {
        let kind = Kind::new(name, fresh);
        self.bind_kind(name, &kind)?;
        Ok(kind)
    }

    /// Make an existing kind available under another name.
    pub fn bind_kind(&mut self, name: &str, kind: &Kind) -> Result<(), Error> {
        if self.kinds.contains_key(name) {
            return Err(Error::Reintroduction(name.to_string()));
        }
        debug!("kind {} as {}", kind, name);
        self.kinds.insert(name.to_string(), kind.clone());
        Ok(())
    }

    /// Make two kinds equivalent.
    pub fn identify_kinds(&mut self, a: &Kind, b: &Kind) {
        if self.kind_classes.union(a.id(), b.id()) {
            debug!("identify kinds {} and {}", a, b)
        }
    }

    pub fn get_kind(&self, name: &str) -> Option<&Kind> {
        self.kinds.get(name)
    }

    /// Return the kind with the given name.
    pub fn kind(&self, name: &str) -> Result<Kind, Error> {
        let kind = self.get_kind(name);
        kind.cloned().ok_or_else(|| Error::UndeclaredKind(name.to_string()))
    }

    /// Declare a new opaque operator.
    pub fn add_functor(
        &mut self,
        name: &str,
        result: Kind,
        inputs: Vec<Kind>,
        fresh: &Fresh,
    ) -> Result<Operator, Error> {
        let op = Operator::functor(name, result, inputs, fresh);
        self.insert_operator(op.clone())?;
        Ok(op)
    }

    /// Declare a new operator as an abbreviation of `definiens`.
    ///
    /// See [`Operator::definition`].
    pub fn add_definition(
        &mut self,
        name: &str,
        params: Vec<Var>,
        definiens: Expr,
        fresh: &Fresh,
    ) -> Result<Operator, crate::Error> {
        if self.operators.contains_key(name) {
            return Err(Error::Reintroduction(name.to_string()).into());
        }
        let op = Operator::definition(name, params, definiens, fresh)?;
        self.insert_operator(op.clone())?;
        Ok(op)
    }

    /// Make an operator available under its name.
    pub fn insert_operator(&mut self, op: Operator) -> Result<(), Error> {
        if self.operators.contains_key(&op.name) {
            return Err(Error::Reintroduction(op.name.clone()));
        }
        debug!("operator {} of depth {}", op, op.depth());
        self.operators.insert(op.name.clone(), op);
        Ok(())
    }

    /// Make two operators equivalent.
    ///
    /// Fails if the operators have different result or input kinds.
    pub fn identify_operators(&mut self, a: &Operator, b: &Operator) -> Result<(), Error> {
        let same_inputs = a.place_count() == b.place_count()
            && a.inputs.iter().zip(&b.inputs).all(|(x, y)| self.kind_eq(x, y));
        if !same_inputs || !self.kind_eq(&a.result, &b.result) {
            return Err(Error::SignatureMismatch(a.name.clone(), b.name.clone()));
        }
        if self.operator_classes.union(a.id(), b.id()) {
            debug!("identify operators {} and {}", a, b)
        }
        Ok(())
    }

    pub fn get_operator(&self, name: &str) -> Option<&Operator> {
        self.operators.get(name)
    }

    fn insert_symbol(&mut self, name: &str, sym: Symbol) -> Result<(), Error> {
        if self.symbols.contains_key(name) {
            return Err(Error::Reintroduction(name.to_string()));
        }
        self.symbols.insert(name.to_string(), sym);
        Ok(())
    }

    /// Declare a new named variable.
    pub fn add_variable(&mut self, name: &str, kind: Kind, fresh: &Fresh) -> Result<Var, Error> {
        let var = fresh.named(name, kind);
        self.insert_symbol(name, Symbol::Variable(var.clone()))?;
        Ok(var)
    }

    /// Make a statement available for use in proofs.
    pub fn add_statement(&mut self, statement: Statement) -> Result<Arc<Statement>, Error> {
        let statement = Arc::new(statement);
        let name = statement.name().to_string();
        self.insert_symbol(&name, Symbol::Statement(statement.clone()))?;
        debug!("statement {}", statement);
        Ok(statement)
    }

    /// Apply the operator with the given name to arguments.
    pub fn appl(&self, name: &str, args: Vec<Expr>) -> Result<Expr, crate::Error> {
        let op = self
            .get_operator(name)
            .ok_or_else(|| Error::UndeclaredOperator(name.to_string()))?;
        Ok(Expr::appl(op.clone(), args, self)?)
    }

    /// Return the variable with the given name as expression.
    pub fn var(&self, name: &str) -> Result<Expr, Error> {
        match self.symbols.get(name) {
            Some(Symbol::Variable(v)) => Ok(Expr::var(v.clone())),
            _ => Err(Error::UndeclaredVariable(name.to_string())),
        }
    }
}

impl Scope for Namespace {
    fn kind_eq(&self, a: &Kind, b: &Kind) -> bool {
        a == b || self.kind_classes.same(a.id(), b.id())
    }

    fn operator_eq(&self, a: &Operator, b: &Operator) -> bool {
        a == b || self.operator_classes.same(a.id(), b.id())
    }

    fn resolve(&self, name: &str) -> Option<Symbol> {
        self.symbols.get(name).cloned()
    }
}
