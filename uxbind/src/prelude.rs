//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use uxbind::prelude::*;
//! ```

// Markup types
pub use uxbind_markup::{DocumentAsset, MarkupNode, ParseError, flatten, parse_markup};

// Generation types
pub use uxbind_codegen::{
    Banner, BindableElement, CodegenError, GeneratedArtifact, Generator, GeneratorConfig,
    ModelError, generate_from_file, generate_from_xml,
};
