//! A module containing [`Stack`] and associated types.
//!
//! The only other included type is [`IntoIter`], for owned iteration in pop order.
//! [`Iter`](std::slice::Iter) from [`std::slice`] is used for borrowed iteration, which runs from the
//! bottom of the Stack to the top.
//!
//! [`Stack`] is also re-exported under the parent module.

mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;
