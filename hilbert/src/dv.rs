//! Distinct variable constraints.

use crate::Var;
use alloc::vec::Vec;
use core::fmt;
use fnv::FnvHashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// a variable occurs twice in a list of pairwise distinct variables
    Repeated(Var),
    /// the factors of a product share a variable
    Overlap {
        common: Var,
        left: Vec<Var>,
        right: Vec<Var>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Repeated(v) => write!(f, "variable {} appears twice in DV list", v),
            Self::Overlap {
                common,
                left,
                right,
            } => {
                write!(f, "variables ")?;
                fmt_vars(left, f)?;
                write!(f, " and ")?;
                fmt_vars(right, f)?;
                write!(f, " must be distinct, but share {}", common)
            }
        }
    }
}

fn fmt_vars(vars: &[Var], f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{{")?;
    for (i, v) in vars.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    write!(f, "}}")
}

/// Set of unordered pairs of different variables.
///
/// A pair `(x, y)` demands that whatever `x` and `y` are instantiated with
/// never share a variable.
///
/// ~~~
/// # use hilbert::{DvSet, Fresh, Kind};
/// let fresh = Fresh::new();
/// let set = Kind::new("set", &fresh);
/// let [x, y, z] = ["x", "y", "z"].map(|n| fresh.named(n, set.clone()));
///
/// let mut dv = DvSet::new();
/// dv.declare(&[x.clone(), y.clone(), z.clone()])?;
/// assert_eq!(dv.len(), 3);
/// assert!(dv.contains(&z, &x));
/// assert!(dv.declare(&[x.clone(), x.clone()]).is_err());
///
/// dv.restrict(&[x.clone(), y.clone()].into_iter().collect());
/// assert!(dv.contains(&y, &x) && !dv.contains(&x, &z));
/// # Ok::<_, hilbert::Error>(())
/// ~~~
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DvSet(FnvHashSet<(Var, Var)>);

fn pair(x: &Var, y: &Var) -> (Var, Var) {
    if x < y {
        (x.clone(), y.clone())
    } else {
        (y.clone(), x.clone())
    }
}

impl DvSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demand that all given variables are pairwise distinct.
    ///
    /// Fails without changing the set if a variable occurs twice.
    pub fn declare(&mut self, vars: &[Var]) -> Result<(), Error> {
        let mut seen = FnvHashSet::default();
        if let Some(v) = vars.iter().find(|v| !seen.insert(*v)) {
            return Err(Error::Repeated(v.clone()));
        }
        for (i, x) in vars.iter().enumerate() {
            for y in &vars[i + 1..] {
                self.0.insert(pair(x, y));
            }
        }
        Ok(())
    }

    /// Demand that every variable of `xs` is distinct from every variable of `ys`.
    ///
    /// Fails without changing the set if `xs` and `ys` have a common variable.
    pub fn add_product(&mut self, xs: &[Var], ys: &[Var]) -> Result<(), Error> {
        if let Some(common) = xs.iter().find(|x| ys.contains(x)) {
            return Err(Error::Overlap {
                common: common.clone(),
                left: xs.to_vec(),
                right: ys.to_vec(),
            });
        }
        for x in xs {
            for y in ys {
                self.0.insert(pair(x, y));
            }
        }
        Ok(())
    }

    pub fn contains(&self, x: &Var, y: &Var) -> bool {
        self.0.contains(&pair(x, y))
    }

    /// Remove all pairs that have a component outside of `universe`.
    pub fn restrict(&mut self, universe: &FnvHashSet<Var>) {
        self.0
            .retain(|(x, y)| universe.contains(x) && universe.contains(y))
    }

    pub fn restricted(&self, universe: &FnvHashSet<Var>) -> Self {
        let mut dv = self.clone();
        dv.restrict(universe);
        dv
    }

    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Return the pairs of `self` that are not in `other`, in order.
    pub fn difference(&self, other: &Self) -> Vec<(Var, Var)> {
        let mut pairs: Vec<_> = self.0.difference(&other.0).cloned().collect();
        pairs.sort();
        pairs
    }

    /// Rename both components of every pair.
    ///
    /// Pairs whose components are renamed to the same variable are dropped.
    pub fn map_vars(&self, f: impl Fn(&Var) -> Var) -> Self {
        let pairs = self.0.iter().map(|(x, y)| (f(x), f(y)));
        Self(pairs.filter(|(x, y)| x != y).map(|(x, y)| pair(&x, &y)).collect())
    }

    /// Iterate over the pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &(Var, Var)> {
        let mut pairs: Vec<_> = self.0.iter().collect();
        pairs.sort();
        pairs.into_iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DvSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (x, y)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", x, y)?;
        }
        write!(f, "}}")
    }
}
