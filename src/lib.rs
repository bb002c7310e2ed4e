//! A small collections crate built around a generic, last-in-first-out [`Stack`].
//!
//! # Purpose
//! The crate is a study of generic types in Rust: a container that works for any element type,
//! operations that only exist when the element type satisfies a bound, and a trait with an
//! associated type that lets algorithms treat different collections the same way.
//!
//! # Method
//! [`Stack`] manages its own storage rather than wrapping a [`Vec`]. It keeps a buffer of
//! possibly-uninitialized slots and tracks how many of them hold values, which is enough to make
//! push and pop `O(1)` and to guarantee that every element is dropped exactly once.
//!
//! # Error Handling
//! Popping an empty Stack is the one failure every stack has to answer for. This crate answers it
//! the same way everywhere: each fallible operation has a checked `try_*` form that returns a
//! [`Result`], and a short form that panics with the same error. For example,
//! [`try_pop`](Stack::try_pop) returns [`EmptyContainerAccess`](collections::EmptyContainerAccess)
//! where [`pop`](Stack::pop) would panic. Peeking at the top has no panicking form at all:
//! [`peek_top`](Stack::peek_top) returns an [`Option`].
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error).
//!
//! # Logging
//! Reallocations of a Stack's storage are reported at `trace` level through the [`log`] facade.
//!
//! # Features
//! - `stack`: [`collections::stack`].
//! - `traits`: [`collections::traits`], including the [`Container`](collections::traits::Container)
//!   impls for [`Vec`] (and for [`Stack`] when both are enabled).
//! - `collections-all` (default): all of the above.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[cfg(feature = "stack")]
#[doc(inline)]
pub use collections::stack::Stack;
