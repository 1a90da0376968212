//! Equivalence classes of identifiers.

use fnv::FnvHashMap;

/// Partition of identifiers into equivalence classes.
///
/// Identifiers that were never united are their own representatives
/// and take no space.
/// Paths are compressed whenever two classes are united,
/// so that finding a representative never needs more than one lookup
/// and can be done without mutable access.
#[derive(Clone, Debug, Default)]
pub struct UnionFind(FnvHashMap<usize, usize>);

impl UnionFind {
    /// Return the representative of the class of `x`.
    pub fn find(&self, x: usize) -> usize {
        let mut x = x;
        while let Some(&parent) = self.0.get(&x) {
            x = parent
        }
        x
    }

    /// Unite the classes of `x` and `y`, returning false if they were already united.
    ///
    /// The smaller of the two representatives represents the united class.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }
        let (root, child) = if rx < ry { (rx, ry) } else { (ry, rx) };
        self.0.insert(child, root);
        self.compress();
        true
    }

    pub fn same(&self, x: usize, y: usize) -> bool {
        x == y || self.find(x) == self.find(y)
    }

    fn compress(&mut self) {
        let roots: FnvHashMap<usize, usize> = self.0.keys().map(|&k| (k, self.find(k))).collect();
        self.0 = roots;
    }
}
