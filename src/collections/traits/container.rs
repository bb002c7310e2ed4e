#[cfg(feature = "stack")]
use crate::collections::stack::Stack;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// An ordered collection that items can be appended to and read back from by position.
///
/// Index 0 always refers to the first item appended. For a [`Stack`] this is the bottom, so
/// appending is the same as pushing.
pub trait Container {
    /// The type of the values held by the Container.
    type Item;

    /// Adds `item` to the end of the Container.
    fn append(&mut self, item: Self::Item);

    /// Returns the number of items in the Container.
    fn count(&self) -> usize;

    /// Returns a reference to the item at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    fn try_item(&self, index: usize) -> Result<&Self::Item, IndexOutOfBounds>;

    /// Returns a reference to the item at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Container.
    fn item(&self, index: usize) -> &Self::Item {
        self.try_item(index).throw()
    }

    /// Returns true if the Container has at least one item and its first item is equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::traits::Container;
    /// assert!(!vec![9, 9, 9].starts_with_item(&42));
    /// assert!(vec![42, 9].starts_with_item(&42));
    /// ```
    fn starts_with_item(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        match self.try_item(0) {
            Ok(first) => first == item,
            Err(_) => false,
        }
    }
}

/// Arithmetic mean for Containers of [`f64`].
pub trait Average {
    /// Returns the sum of all items divided by their count. An empty Container produces
    /// [`f64::NAN`].
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::traits::Average;
    /// let mean = vec![1260.0, 1200.0, 98.6, 37.0].average();
    /// assert!((mean - 648.9).abs() < 1e-9);
    /// ```
    fn average(&self) -> f64;
}

impl<C: Container<Item = f64> + ?Sized> Average for C {
    fn average(&self) -> f64 {
        let mut sum = 0.0;
        for index in 0..self.count() {
            sum += *self.item(index);
        }
        sum / self.count() as f64
    }
}

/// Returns true if both Containers hold the same number of items and every pair of items at the
/// same index is equal. The two Containers can be of different types as long as their items are.
///
/// # Examples
/// ```
/// # use generic_stack::collections::stack::Stack;
/// # use generic_stack::collections::traits::all_items_match;
/// let stack = Stack::from(["uno", "dos", "tres"]);
/// assert!(all_items_match(&stack, &vec!["uno", "dos", "tres"]));
/// assert!(!all_items_match(&stack, &vec!["uno", "dos"]));
/// ```
pub fn all_items_match<C1, C2>(some: &C1, another: &C2) -> bool
where
    C1: Container + ?Sized,
    C2: Container<Item = C1::Item> + ?Sized,
    C1::Item: PartialEq,
{
    if some.count() != another.count() {
        return false;
    }

    for index in 0..some.count() {
        if some.item(index) != another.item(index) {
            return false;
        }
    }

    true
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn try_item(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.as_slice().get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }
}

#[cfg(feature = "stack")]
impl<T> Container for Stack<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn try_item(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.as_slice().get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }
}
