use std::iter::FusedIterator;
use std::slice::Iter;

use super::Stack;

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            stack: self,
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    /// Borrowed iteration runs from the bottom of the Stack to the top, like the slice view.
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// An owned iterator over a [`Stack`], produced by [`Stack::into_iter`]. Elements are yielded in
/// the order they would be popped, starting from the top.
///
/// # Examples
/// ```
/// # use generic_stack::collections::stack::Stack;
/// let stack = Stack::from(["uno", "dos", "tres"]);
/// let popped: Vec<_> = stack.into_iter().collect();
/// assert_eq!(popped, ["tres", "dos", "uno"]);
/// ```
pub struct IntoIter<T> {
    // Remaining elements are dropped along with the Stack.
    pub(crate) stack: Stack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.try_pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.stack.len()
    }
}
