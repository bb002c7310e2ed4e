use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::Deref;
use std::ptr;
use std::slice;

#[doc(inline)]
pub use crate::util::error::{AccessError, CapacityOverflow, EmptyContainerAccess, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;
const MAX_CAP: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A last-in-first-out collection, generic over its element type.
///
/// Elements are stored contiguously from the bottom of the stack to the top, so the read-only
/// slice view provided through [`Deref`] lists them in push order. There is no mutable slice view:
/// the contents only change through [`push`](Stack::push), [`pop`](Stack::pop) and friends.
///
/// # Ownership
/// A Stack uniquely owns its elements. Copies are explicit, through [`Clone`], and produce an
/// independent Stack; nothing is shared between the two afterwards.
///
/// # Empty Stacks
/// Every method that needs an element has a checked form: [`try_pop`](Stack::try_pop) and
/// [`try_peek_nth`](Stack::try_peek_nth) return an error, [`peek_top`](Stack::peek_top) returns
/// [`None`]. The short forms, [`pop`](Stack::pop) and [`peek_nth`](Stack::peek_nth), panic with
/// the same error instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `peek_top` | `O(1)` |
/// | `peek_nth` | `O(1)` |
/// | `is_top` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Stack doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Stack has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Stack<T> {
    /// Slots `0..len` are initialized, the rest are not.
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack with capacity 0. Memory will be allocated on the first push.
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::Stack;
    /// let stack: Stack<i32> = Stack::new();
    /// assert_eq!(stack.len(), 0);
    /// assert_eq!(stack.cap(), 0);
    /// assert_eq!(stack.peek_top(), None);
    /// ```
    pub fn new() -> Stack<T> {
        Stack {
            buf: Box::<[T]>::new_uninit_slice(0),
            len: 0,
        }
    }

    /// Creates a new Stack with capacity exactly equal to the provided value, allowing values to be
    /// pushed without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::Stack;
    /// let mut stack: Stack<u8> = Stack::with_cap(3);
    /// assert_eq!(stack.cap(), 3);
    /// stack.extend([1, 2, 3]);
    /// assert_eq!(stack.cap(), 3);
    /// ```
    pub fn with_cap(cap: usize) -> Stack<T> {
        Self::check_cap(cap);
        Stack {
            buf: Box::<[T]>::new_uninit_slice(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Stack. The capacity is always exactly the value last
    /// provided to one of the capacity manipulation methods, or the result of growth.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Pushes the provided value onto the top of the Stack, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Stack would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push("uno");
    /// stack.push("dos");
    /// assert_eq!(stack.len(), 2);
    /// assert_eq!(stack.peek_top(), Some(&"dos"));
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Removes the top element of the Stack and returns it.
    ///
    /// # Panics
    /// Panics with [`EmptyContainerAccess`] if the Stack is empty. See [`Stack::try_pop`] for a
    /// checked version.
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::Stack;
    /// let mut stack = Stack::from(["uno", "dos", "tres", "cuatro"]);
    /// assert_eq!(stack.pop(), "cuatro");
    /// assert_eq!(stack.len(), 3);
    /// ```
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes the top element of the Stack and returns it, returning an [`Err`] rather than
    /// panicking if the Stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::{EmptyContainerAccess, Stack};
    /// let mut stack = Stack::from([1]);
    /// assert_eq!(stack.try_pop(), Ok(1));
    /// assert_eq!(stack.try_pop(), Err(EmptyContainerAccess));
    /// ```
    pub fn try_pop(&mut self) -> Result<T, EmptyContainerAccess> {
        if self.len == 0 {
            return Err(EmptyContainerAccess);
        }

        // Decrement len before reading, so the slot is no longer considered initialized.
        self.len -= 1;

        // SAFETY: The slot at the old top was initialized. len now excludes it, so this bitwise
        // copy is the only remaining owner of the value.
        Ok(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Returns a reference to the top element of the Stack without removing it, or [`None`] if
    /// the Stack is empty.
    pub fn peek_top(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the top element of the Stack, or [`None`] if the Stack is
    /// empty.
    pub fn peek_top_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns a reference to the element `depth` positions below the top of the Stack, where a
    /// depth of 0 refers to the top itself.
    ///
    /// # Panics
    /// Panics if the Stack is empty or `depth` is out of bounds. See [`Stack::try_peek_nth`].
    pub fn peek_nth(&self, depth: usize) -> &T {
        self.try_peek_nth(depth).throw()
    }

    /// Returns a reference to the element `depth` positions below the top of the Stack, returning
    /// an [`Err`] on a failure rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::{AccessError, IndexOutOfBounds, Stack};
    /// let stack = Stack::from(['a', 'b', 'c']);
    /// assert_eq!(stack.try_peek_nth(0), Ok(&'c'));
    /// assert_eq!(stack.try_peek_nth(2), Ok(&'a'));
    /// assert_eq!(
    ///     stack.try_peek_nth(3),
    ///     Err(AccessError::IndexOutOfBounds(IndexOutOfBounds { index: 3, len: 3 }))
    /// );
    /// assert!(Stack::<char>::new().try_peek_nth(0).unwrap_err().is_empty_container_access());
    /// ```
    pub fn try_peek_nth(&self, depth: usize) -> Result<&T, AccessError> {
        if self.len == 0 {
            return Err(EmptyContainerAccess.into());
        }
        if depth >= self.len {
            return Err(IndexOutOfBounds {
                index: depth,
                len: self.len,
            }.into());
        }

        Ok(&self.as_slice()[self.len - 1 - depth])
    }

    /// Ensures that the Stack has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the Stack would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the Stack so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        if self.cap() != self.len {
            self.realloc_with_cap(self.len);
        }
    }

    /// Drops every element in the Stack. The capacity is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::Stack;
    /// let mut stack = Stack::from([1, 2, 3]);
    /// let cap = stack.cap();
    /// stack.clear();
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.cap(), cap);
    /// ```
    pub fn clear(&mut self) {
        // Reset len first, so a panicking drop leaks the remaining values rather than dropping
        // them twice.
        let len = mem::replace(&mut self.len, 0);

        // SAFETY: The first len slots are initialized and properly aligned. Nothing else considers
        // them initialized once len is zeroed.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Returns the contents of the Stack as a slice, ordered from the bottom to the top.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the same layout as T.
        // The borrow of self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the same layout as T.
        // The mutable borrow of self makes this the only access for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len) }
    }

    /// The largest capacity that keeps the buffer's size within [`isize::MAX`] bytes.
    const fn max_cap() -> usize {
        match MAX_CAP.checked_div(size_of::<T>()) {
            Some(max) => max,
            // Zero-sized types never occupy any memory.
            None => usize::MAX,
        }
    }

    /// # Panics
    /// Panics if a buffer of `cap` elements would exceed [`isize::MAX`] bytes.
    pub(crate) fn check_cap(cap: usize) {
        if cap > Self::max_cap() {
            Err(CapacityOverflow).throw()
        }
    }

    /// Moves the initialized elements into a new buffer of exactly `new_cap` slots.
    ///
    /// # Panics
    /// Panics if the memory layout of the Stack would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        Self::check_cap(new_cap);

        log::trace!(
            "reallocating stack storage from {} to {} slots ({} in use)",
            self.cap(),
            new_cap,
            self.len,
        );

        let mut new_buf = Box::<[T]>::new_uninit_slice(new_cap);

        // SAFETY: Both buffers hold at least len slots, are properly aligned and don't overlap.
        // Ownership of the values moves to new_buf: the old buffer only holds MaybeUninit values,
        // so dropping it deallocates without dropping them.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        self.buf = new_buf;
    }

    /// Grows the buffer so that the Stack can take at least one more element.
    ///
    /// # Panics
    /// Panics if the Stack is already at its maximum capacity.
    pub(crate) fn grow(&mut self) {
        let max = Self::max_cap();
        if self.cap() >= max {
            Err(CapacityOverflow).throw()
        }

        // If we would grow past the maximum capacity, use the maximum instead.
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP).min(max);

        self.realloc_with_cap(new_cap);
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns true if the Stack is not empty and its top element is equal to `item`. Only
    /// available for element types that can be compared for equality.
    ///
    /// # Examples
    /// ```
    /// # use generic_stack::collections::stack::Stack;
    /// let stack = Stack::from([1, 2, 3]);
    /// assert!(stack.is_top(&3));
    /// assert!(!stack.is_top(&2));
    /// assert!(!Stack::<i32>::new().is_top(&3));
    /// ```
    pub fn is_top(&self, item: &T) -> bool {
        match self.peek_top() {
            Some(top) => top == item,
            None => false,
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item produced ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut stack = Stack::with_cap(iter.size_hint().0);

        for item in iter {
            stack.push(item);
        }

        stack
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        Stack::from_iter(value)
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(value: Vec<T>) -> Self {
        Stack::from_iter(value)
    }
}

impl<T> From<Stack<T>> for Vec<T> {
    /// Produces the elements ordered from the bottom of the Stack to the top.
    fn from(mut value: Stack<T>) -> Self {
        let len = mem::replace(&mut value.len, 0);
        let mut vec = Vec::with_capacity(len);

        for slot in &value.buf[..len] {
            // SAFETY: Every slot below the old len is initialized. The Stack's len is already
            // zeroed, so it won't drop these values again.
            vec.push(unsafe { slot.assume_init_read() });
        }

        vec
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
        // Implicitly drop self.buf, containing only MaybeUninit values, which deallocates it.
    }
}

impl<T> Deref for Stack<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for Stack<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for Stack<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut stack = Self::with_cap(self.cap());

        for value in self.iter() {
            stack.push(value.clone());
        }

        stack
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    /// Lists the elements from the bottom to the top, marking the top.
    ///
    /// ```
    /// # use generic_stack::collections::stack::Stack;
    /// assert_eq!(Stack::from(["uno", "dos"]).to_string(), "[uno, dos <- top]");
    /// assert_eq!(Stack::<u8>::new().to_string(), "[]");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        if !self.is_empty() {
            write!(f, " <- top")?;
        }
        write!(f, "]")
    }
}
