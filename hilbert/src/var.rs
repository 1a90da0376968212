//! Variables and the source of fresh identifiers.

use crate::Kind;
use alloc::sync::Arc;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{self, AtomicUsize};

/// Where a variable comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Origin {
    /// introduced by the user under the given name
    Named(Arc<str>),
    /// stands for a free variable of a definiens that is not a parameter
    Dummy,
    /// replaces a variable of a statement to make the statement canonical
    Unnamed,
}

/// Variable of some kind.
///
/// Variables are identified by a unique number drawn from a [`Fresh`] generator.
/// Equality, ordering and hashing only consider this number,
/// so two variables with the same name and kind are still different
/// if they were created separately.
#[derive(Clone, Debug)]
pub struct Var {
    id: usize,
    kind: Kind,
    origin: Origin,
}

impl Var {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Return the name of the variable if it was introduced by the user.
    pub fn name(&self) -> Option<&str> {
        match &self.origin {
            Origin::Named(name) => Some(&**name),
            _ => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self.origin, Origin::Named(_))
    }

    pub fn is_dummy(&self) -> bool {
        self.origin == Origin::Dummy
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Var {}

impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Var {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.origin {
            Origin::Named(name) => name.fmt(f),
            Origin::Dummy => write!(f, "(dummy{})", self.id),
            Origin::Unnamed => write!(f, "(?{})", self.id),
        }
    }
}

/// Generator of unique identifiers for kinds, operators, and variables.
///
/// All identifiers come from a single atomic counter,
/// so a generator may be shared between threads that
/// declare new objects and verify proofs at the same time.
/// Objects built with different generators must not be mixed.
///
/// ~~~
/// # use hilbert::{Fresh, Kind};
/// let fresh = Fresh::new();
/// let wff = Kind::new("wff", &fresh);
/// let x = fresh.named("x", wff.clone());
/// let d = fresh.dummy(wff.clone());
/// let u = fresh.unnamed(wff);
/// assert!(x.is_named() && d.is_dummy() && !u.is_named());
/// assert!(x != d && d != u && u != x);
/// ~~~
#[derive(Debug, Default)]
pub struct Fresh(AtomicUsize);

impl Fresh {
    pub const fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    /// Return a number that was never returned before by this generator.
    pub fn next(&self) -> usize {
        self.0.fetch_add(1, atomic::Ordering::Relaxed)
    }

    fn var(&self, kind: Kind, origin: Origin) -> Var {
        let id = self.next();
        Var { id, kind, origin }
    }

    pub fn named(&self, name: &str, kind: Kind) -> Var {
        self.var(kind, Origin::Named(Arc::from(name)))
    }

    pub fn dummy(&self, kind: Kind) -> Var {
        let var = self.var(kind, Origin::Dummy);
        trace!("new dummy variable {}", var);
        var
    }

    pub fn unnamed(&self, kind: Kind) -> Var {
        self.var(kind, Origin::Unnamed)
    }
}
