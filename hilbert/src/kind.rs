//! Kinds, the sorts of expressions.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Sort of an expression.
///
/// Cloning, hashing, and equality checking is performed on
/// a unique identifier assigned at creation,
/// making them constant-time operations.
/// Two kinds created separately are never equal,
/// even if they carry the same name:
///
/// ~~~
/// # use hilbert::{Fresh, Kind};
/// let fresh = Fresh::new();
/// let wff1 = Kind::new("wff", &fresh);
/// let wff2 = Kind::new("wff", &fresh);
/// assert_eq!(wff1, wff1.clone());
/// assert_ne!(wff1, wff2);
/// ~~~
///
/// Whether two different kinds are nonetheless *equivalent*
/// (because they were identified with each other)
/// is decided by [`Scope::kind_eq`](crate::Scope::kind_eq).
#[derive(Clone, Debug)]
pub struct Kind(Arc<KindC>);

#[derive(Debug)]
struct KindC {
    id: usize,
    name: String,
}

impl Kind {
    /// Create a new kind, distinct from all previously created ones.
    pub fn new(name: impl Into<String>, fresh: &crate::Fresh) -> Self {
        let name = name.into();
        Self(Arc::new(KindC {
            id: fresh.next(),
            name,
        }))
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.name.fmt(f)
    }
}
