//! Traits and generic algorithms shared between collections.
//!
//! [`Container`] abstracts over positional, appendable collections and is implemented for
//! [`Stack`](crate::collections::stack::Stack) and [`Vec`]. Functions written against it, like
//! [`all_items_match`], work across both.

mod container;
mod search;

pub use container::*;
pub use search::*;
