//! A `Vec` that is iterated from the last to the first pushed element.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;

/// A `Vec` that is iterated from the last to the first pushed element.
///
/// The nth element of a `Stack` is the nth-*last* pushed element,
/// which is how proofs refer to the expressions they produced.
///
/// ~~~
/// # use hilbert::Stack;
/// let mut stack: Stack<_> = vec![1, 2, 3].into();
/// assert_eq!(stack.get(0), Some(&3));
/// assert_eq!(stack.split_top(2), Some(vec![2, 3]));
/// assert_eq!(stack.split_top(2), None);
/// assert_eq!(stack.len(), 1);
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<A>(Vec<A>);

impl<A> Stack<A> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Default::default()
    }

    /// Add an element to the top of the stack.
    pub fn push(&mut self, x: A) {
        self.0.push(x)
    }

    /// Remove and return an element from the top of the stack.
    pub fn pop(&mut self) -> Option<A> {
        self.0.pop()
    }

    /// Remove the top n elements and return them in the order they were pushed.
    ///
    /// If the stack has fewer than n elements, leave it unchanged.
    pub fn split_top(&mut self, n: usize) -> Option<Vec<A>> {
        let at = self.len().checked_sub(n)?;
        Some(self.0.split_off(at))
    }

    /// Remove all elements from the stack.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Return the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtain the nth element counted from the top of the stack.
    pub fn get(&self, n: usize) -> Option<&A> {
        self.iter().nth(n)
    }

    /// Iterate through the elements of the stack starting from the top.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.0.iter().rev()
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<A> From<Vec<A>> for Stack<A> {
    fn from(v: Vec<A>) -> Self {
        Self(v)
    }
}

impl<A> IntoIterator for Stack<A> {
    type Item = A;
    type IntoIter = core::iter::Rev<alloc::vec::IntoIter<Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().rev()
    }
}

impl<A> FromIterator<A> for Stack<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

/// Print the elements from the bottom to the top of the stack.
impl<A: fmt::Display> fmt::Display for Stack<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            x.fmt(f)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn order() {
        let mut stack: Stack<_> = (0..4).collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(stack.to_string(), "[0, 1, 2, 3]");
        assert_eq!(stack.split_top(0), Some(vec![]));
        assert_eq!(stack.split_top(4), Some(vec![0, 1, 2, 3]));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }
}
