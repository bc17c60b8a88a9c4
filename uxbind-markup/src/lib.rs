//! # uxbind Markup
//!
//! UXML markup parsing and the node tree the code generator consumes.
//!
//! This crate provides:
//! - An owned, immutable [`MarkupNode`] tree
//! - Depth-first flattening in document order
//! - A `quick-xml` based parser producing the tree
//! - [`DocumentAsset`] descriptors pairing a document with its output path

pub mod asset;
pub mod error;
pub mod node;
pub mod parser;

pub use asset::DocumentAsset;
pub use error::ParseError;
pub use node::{Descendants, MarkupNode, flatten};
pub use parser::{parse_markup, parse_markup_file};
