//! Common error type.

use crate::dv::Error as DvError;
use crate::expr::Error as ExprError;
use crate::scope::Error as ScopeError;
use crate::statement::Error as StatementError;
use crate::unify::Error as UnifyError;
use crate::verify::Reject;
use core::fmt;

/// Common error type.
#[derive(Clone, Debug)]
pub enum Error {
    Expr(ExprError),
    Unify(UnifyError),
    Dv(DvError),
    Scope(ScopeError),
    Statement(StatementError),
    Verify(Reject),
}

impl From<ExprError> for Error {
    fn from(err: ExprError) -> Self {
        Self::Expr(err)
    }
}

impl From<UnifyError> for Error {
    fn from(err: UnifyError) -> Self {
        Self::Unify(err)
    }
}

impl From<DvError> for Error {
    fn from(err: DvError) -> Self {
        Self::Dv(err)
    }
}

impl From<ScopeError> for Error {
    fn from(err: ScopeError) -> Self {
        Self::Scope(err)
    }
}

impl From<StatementError> for Error {
    fn from(err: StatementError) -> Self {
        Self::Statement(err)
    }
}

impl From<Reject> for Error {
    fn from(err: Reject) -> Self {
        Self::Verify(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Expr(e) => e.fmt(f),
            Self::Unify(e) => e.fmt(f),
            Self::Dv(e) => e.fmt(f),
            Self::Scope(e) => e.fmt(f),
            Self::Statement(e) => e.fmt(f),
            Self::Verify(e) => e.fmt(f),
        }
    }
}
