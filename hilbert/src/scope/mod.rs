//! Resolution of names and equivalence of kinds and operators.

mod namespace;
mod union_find;

pub use namespace::Namespace;

use crate::{Expr, Kind, Operator, Statement, Var};
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// What a name in a proof may refer to.
#[derive(Clone, Debug)]
pub enum Symbol {
    Hypothesis(Expr),
    Variable(Var),
    Statement(Arc<Statement>),
}

/// Context in which expressions are built and proofs are verified.
///
/// Kinds and operators may be equivalent without being identical,
/// for example when one was introduced as an alias of the other.
pub trait Scope {
    fn kind_eq(&self, a: &Kind, b: &Kind) -> bool {
        a == b
    }

    fn operator_eq(&self, a: &Operator, b: &Operator) -> bool {
        a == b
    }

    /// Find the variable or statement with the given name.
    fn resolve(&self, name: &str) -> Option<Symbol>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Reintroduction(String),
    UndeclaredKind(String),
    UndeclaredOperator(String),
    UndeclaredVariable(String),
    /// operators of different signatures cannot be identified
    SignatureMismatch(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Reintroduction(name) => write!(f, "{} is already declared", name),
            Self::UndeclaredKind(name) => write!(f, "undeclared kind {}", name),
            Self::UndeclaredOperator(name) => write!(f, "undeclared operator {}", name),
            Self::UndeclaredVariable(name) => write!(f, "undeclared variable {}", name),
            Self::SignatureMismatch(a, b) => {
                write!(f, "operators {} and {} have different signatures", a, b)
            }
        }
    }
}
