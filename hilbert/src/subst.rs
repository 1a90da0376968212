//! Substitution of variables in expressions, and variable translations.

use crate::{Expr, Var};
use alloc::vec::Vec;

/// Immutable HashMap for fast cloning of bindings.
type ImHashMap<K, V> = im::hashmap::HashMap<K, V, fnv::FnvBuildHasher>;

/// Map from variables to the expressions that replace them.
///
/// Snapshots of a substitution are constant-time,
/// which is used to undo bindings when unification backtracks.
pub type Subst = ImHashMap<Var, Expr>;

impl Expr {
    /// Replace variables by their image under the substitution, in one pass.
    ///
    /// Variables that are not mapped remain unchanged, and
    /// the images of variables are not substituted again.
    /// Subexpressions without substituted variables are shared with the original.
    ///
    /// ~~~
    /// # use hilbert::{Expr, Fresh, Namespace, Subst};
    /// let fresh = Fresh::new();
    /// let mut ns = Namespace::new();
    /// let wff = ns.add_kind("wff", &fresh)?;
    /// ns.add_functor("->", wff.clone(), vec![wff.clone(); 2], &fresh)?;
    /// let p = ns.add_variable("p", wff.clone(), &fresh)?;
    /// let q = ns.add_variable("q", wff, &fresh)?;
    /// let (ep, eq) = (Expr::var(p.clone()), Expr::var(q.clone()));
    ///
    /// let pq = ns.appl("->", vec![ep.clone(), eq.clone()])?;
    /// let subst: Subst = vec![(p, eq.clone()), (q, ep.clone())].into_iter().collect();
    /// assert_eq!(pq.subst(&subst), ns.appl("->", vec![eq, ep])?);
    /// # Ok::<_, hilbert::Error>(())
    /// ~~~
    pub fn subst(&self, subst: &Subst) -> Self {
        if subst.is_empty() {
            return self.clone();
        }
        match self {
            Self::Var(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Self::Appl(a) => {
                let args: Vec<_> = a.args().iter().map(|arg| arg.subst(subst)).collect();
                if args.iter().zip(a.args()).all(|(a1, a2)| a1.ptr_eq(a2)) {
                    self.clone()
                } else {
                    Self::new_appl(a.op().clone(), args)
                }
            }
        }
    }
}

/// Partial injective map between variables.
///
/// A translation is built by [`dummy_matches`](crate::dummy_matches),
/// where it maps dummies to the variables they stand for, and by
/// [`equality_map`](crate::equality_map), where it maps
/// the variables of one expression to the variables of another.
#[derive(Clone, Debug, Default)]
pub struct Translation {
    forward: ImHashMap<Var, Var>,
    backward: ImHashMap<Var, Var>,
}

impl Translation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the image of a variable.
    pub fn get(&self, from: &Var) -> Option<&Var> {
        self.forward.get(from)
    }

    /// Return the preimage of a variable.
    pub fn get_inverse(&self, to: &Var) -> Option<&Var> {
        self.backward.get(to)
    }

    /// Map `from` to `to`; callers ensure that both are unmapped.
    pub(crate) fn insert(&mut self, from: Var, to: Var) {
        self.forward.insert(from.clone(), to.clone());
        self.backward.insert(to, from);
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, &Var)> {
        self.forward.iter()
    }

    /// Rename variables, leaving variables without image unchanged.
    pub fn apply(&self, var: &Var) -> Var {
        self.get(var).unwrap_or(var).clone()
    }

    /// Return a substitution that replaces variables by their images.
    pub fn to_subst(&self) -> Subst {
        self.iter()
            .map(|(from, to)| (from.clone(), Expr::var(to.clone())))
            .collect()
    }
}
