//! Block grammar, markup and attribute adapters for serialized post blocks.
//!
//! This crate knows how a single serialized block is laid out and how to edit
//! its two halves. It has no notion of media or uploads.
//!
//! - [`grammar`] splits a raw block into name, attribute text and body, and
//!   renders it back.
//! - [`markup`] parses a body into a mutable HTML tree with CSS selection.
//! - [`attributes`] parses the header's JSON object with typed lookups.

pub mod attributes;
pub mod error;
pub mod grammar;
pub mod markup;

pub use attributes::{AttributeLookup, BlockAttributes};
pub use error::{Error, Result};
pub use grammar::{BlockBody, RawBlock, split_block};
pub use markup::{MarkupDocument, MarkupElement};
