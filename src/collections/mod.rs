//! Generic collection types and the traits they share.
//!
//! # Purpose
//! [`Stack`](stack::Stack) is a last-in-first-out collection over any element type, with extra
//! capabilities (like [`is_top`](stack::Stack::is_top)) that only appear when the element type
//! supports them. [`Container`](traits::Container) describes what any positional collection can
//! do, so algorithms can be written once for both a Stack and a [`Vec`].
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (without DerefMut),
//! which provides read access without exposing a way around the collection's own rules.

#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "stack")]
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use crate::util::error::{AccessError, CapacityOverflow, EmptyContainerAccess, IndexOutOfBounds};
