//! Expressions over variables and operators.

use crate::{Kind, Operator, Scope, Var};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use fnv::FnvHashSet;

/// Errors that occur when constructing expressions and operators.
#[derive(Clone, Debug)]
pub enum Error {
    /// an operator received a wrong number of arguments
    PlaceCount {
        op: Operator,
        expected: usize,
        found: usize,
    },
    /// the argument at the given position has the wrong kind
    KindMismatch {
        op: Operator,
        position: usize,
        expected: Kind,
        found: Kind,
    },
    /// a definition lists the same parameter twice
    DuplicateParameter(String, Var),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PlaceCount {
                op,
                expected,
                found,
            } => write!(
                f,
                "place count mismatch: {} expects {} arguments, got {}",
                op, expected, found
            ),
            Self::KindMismatch {
                op,
                position,
                expected,
                found,
            } => write!(
                f,
                "kind mismatch at argument {} of {}: expected {}, got {}",
                position, op, expected, found
            ),
            Self::DuplicateParameter(name, var) => {
                write!(f, "parameter {} occurs twice in definition {}", var, name)
            }
        }
    }
}

/// Expression tree.
///
/// Expressions are immutable and cheap to clone,
/// because operator applications are shared.
///
/// The [`PartialEq`] implementation compares expressions syntactically,
/// using identity of variables and operators.
/// To compare expressions modulo definitions and
/// equivalence of operators, use [`matches`](crate::matches).
#[derive(Clone, Debug)]
pub enum Expr {
    Var(Var),
    Appl(Arc<Appl>),
}

/// Application of an operator to arguments.
#[derive(Debug)]
pub struct Appl {
    op: Operator,
    args: Vec<Expr>,
}

impl Appl {
    pub fn op(&self) -> &Operator {
        &self.op
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    /// Replace a definition application by its definiens, if possible.
    ///
    /// Unfolding decreases the definition depth of the root operator,
    /// unless the definiens is a single variable,
    /// in which case the result is one of the arguments.
    pub fn unfold(&self) -> Option<Expr> {
        let def = self.op.get_definition()?;
        let unfolded = def.unfold(&self.args);
        assert!(
            def.definiens().get_var().is_some() || unfolded.depth() < def.depth(),
            "unfolding {} did not decrease definition depth",
            self.op
        );
        Some(unfolded)
    }
}

impl Expr {
    pub fn var(var: Var) -> Self {
        Self::Var(var)
    }

    /// Apply an operator to arguments,
    /// checking that the number and the kinds of the arguments are as expected.
    ///
    /// ~~~
    /// # use hilbert::{Expr, Fresh, Namespace};
    /// # use hilbert::expr::Error;
    /// let fresh = Fresh::new();
    /// let mut ns = Namespace::new();
    /// let wff = ns.add_kind("wff", &fresh)?;
    /// let set = ns.add_kind("set", &fresh)?;
    /// let not = ns.add_functor("-.", wff.clone(), vec![wff.clone()], &fresh)?;
    /// let p = Expr::var(ns.add_variable("p", wff, &fresh)?);
    /// let x = Expr::var(ns.add_variable("x", set, &fresh)?);
    ///
    /// let not_p = Expr::appl(not.clone(), vec![p.clone()], &ns)?;
    /// assert_eq!(not_p.to_string(), "(-. p)");
    /// assert!(matches!(Expr::appl(not.clone(), vec![p.clone(), p], &ns), Err(Error::PlaceCount { .. })));
    /// assert!(matches!(Expr::appl(not, vec![x], &ns), Err(Error::KindMismatch { .. })));
    /// # Ok::<_, hilbert::Error>(())
    /// ~~~
    pub fn appl<S: Scope + ?Sized>(op: Operator, args: Vec<Expr>, scope: &S) -> Result<Self, Error> {
        if args.len() != op.place_count() {
            return Err(Error::PlaceCount {
                expected: op.place_count(),
                found: args.len(),
                op,
            });
        }
        let mismatch = op
            .inputs
            .iter()
            .zip(&args)
            .position(|(expected, arg)| !scope.kind_eq(expected, arg.kind()));
        if let Some(position) = mismatch {
            return Err(Error::KindMismatch {
                expected: op.inputs[position].clone(),
                found: args[position].kind().clone(),
                position,
                op,
            });
        }
        Ok(Self::new_appl(op, args))
    }

    /// Apply an operator to arguments that are known to fit.
    pub(crate) fn new_appl(op: Operator, args: Vec<Expr>) -> Self {
        Self::Appl(Arc::new(Appl { op, args }))
    }

    pub fn get_var(&self) -> Option<&Var> {
        match self {
            Self::Var(v) => Some(v),
            Self::Appl(_) => None,
        }
    }

    pub fn get_appl(&self) -> Option<&Appl> {
        match self {
            Self::Var(_) => None,
            Self::Appl(a) => Some(a),
        }
    }

    pub fn kind(&self) -> &Kind {
        match self {
            Self::Var(v) => v.kind(),
            Self::Appl(a) => &a.op.result,
        }
    }

    /// Definition depth of the root operator, or 0 for variables.
    pub fn depth(&self) -> usize {
        self.get_appl().map_or(0, |a| a.op.depth())
    }

    /// Return the variables of the expression in order of first occurrence.
    ///
    /// ~~~
    /// # use hilbert::{Expr, Fresh, Namespace};
    /// let fresh = Fresh::new();
    /// let mut ns = Namespace::new();
    /// let wff = ns.add_kind("wff", &fresh)?;
    /// ns.add_functor("->", wff.clone(), vec![wff.clone(); 2], &fresh)?;
    /// let p = ns.add_variable("p", wff.clone(), &fresh)?;
    /// let q = ns.add_variable("q", wff, &fresh)?;
    /// let (ep, eq) = (Expr::var(p.clone()), Expr::var(q.clone()));
    ///
    /// let qpq = ns.appl("->", vec![eq.clone(), ns.appl("->", vec![ep, eq])?])?;
    /// assert_eq!(qpq.variables(), vec![q, p]);
    /// # Ok::<_, hilbert::Error>(())
    /// ~~~
    pub fn variables(&self) -> Vec<Var> {
        let mut seen = FnvHashSet::default();
        let mut vars = Vec::new();
        self.collect_vars(&mut seen, &mut vars);
        vars
    }

    fn collect_vars(&self, seen: &mut FnvHashSet<Var>, vars: &mut Vec<Var>) {
        match self {
            Self::Var(v) => {
                if seen.insert(v.clone()) {
                    vars.push(v.clone())
                }
            }
            Self::Appl(a) => a.args.iter().for_each(|arg| arg.collect_vars(seen, vars)),
        }
    }

    /// Unfold definitions at the root until reaching a variable or a functor.
    pub fn unfold_head(&self) -> Self {
        let mut expr = self.clone();
        loop {
            let unfolded = match &expr {
                Self::Var(_) => None,
                Self::Appl(a) => a.unfold(),
            };
            match unfolded {
                Some(unfolded) => expr = unfolded,
                None => return expr,
            }
        }
    }

    /// Unfold all definitions in the expression.
    pub fn total_unfold(&self) -> Self {
        let head = self.unfold_head();
        match &head {
            Self::Var(_) => head,
            Self::Appl(a) => {
                let args: Vec<_> = a.args.iter().map(Self::total_unfold).collect();
                if args.iter().zip(&a.args).all(|(a1, a2)| a1.ptr_eq(a2)) {
                    head
                } else {
                    Self::new_appl(a.op.clone(), args)
                }
            }
        }
    }

    /// Compare variables by identity and applications by memory address.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Var(v1), Self::Var(v2)) => v1 == v2,
            (Self::Appl(a1), Self::Appl(a2)) => Arc::ptr_eq(a1, a2),
            _ => false,
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Var(v1), Self::Var(v2)) => v1 == v2,
            (Self::Appl(a1), Self::Appl(a2)) => {
                Arc::ptr_eq(a1, a2) || (a1.op == a2.op && a1.args == a2.args)
            }
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Self::Var(var)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var(v) => v.fmt(f),
            Self::Appl(a) => {
                write!(f, "({}", a.op)?;
                for arg in &a.args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
