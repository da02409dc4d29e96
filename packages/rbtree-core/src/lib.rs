#![forbid(unsafe_code)]
//! Persistent red-black tree over any totally ordered key type.
//! Insertion follows Okasaki's single `balance` rewrite; deletion extends it with
//! double-black and negative-black colors (Kahrs/Might) so that every fix-up stays
//! local. Old versions stay valid and share all untouched subtrees with new ones.

mod balance;
pub mod color;
mod delete;
pub mod error;
mod insert;
pub mod traversal;
pub mod tree;
mod validate;

pub use color::Color;
pub use error::{Error, Result};
pub use traversal::Iter;
pub use tree::{Node, Tree};
