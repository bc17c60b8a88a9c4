//! # uxbind
//!
//! Typed C# bindings for Unity UI Toolkit UXML documents.
//!
//! uxbind reads a UXML document, finds every element with a `name`
//! attribute and generates a `partial` class exposing one typed field per
//! named element, plus an `InitializeDocument()` method that looks each of
//! them up at runtime.
//!
//! ## Quick Start
//!
//! ```ignore
//! use uxbind::prelude::*;
//!
//! let asset = DocumentAsset::from_path("Assets/UI/MainMenu.uxml");
//! let generator = Generator::new(GeneratorConfig::new().namespace("Game.UI"));
//! let written = generator.generate_to_file(&asset)?;
//! ```
//!
//! Given
//!
//! ```xml
//! <ui:UXML xmlns:ui="UnityEngine.UIElements">
//!     <ui:Button name="submitBtn" />
//!     <ui:Label name="status" />
//! </ui:UXML>
//! ```
//!
//! the generated class holds `_submitBtn` and `_status` fields, assigned by
//! `InitializeDocument()` through `Root.Q("submitBtn")` and `Root.Q("status")`.
//!
//! ## Crate Organization
//!
//! - [`markup`] - Markup node tree, flattening and parsing
//! - [`codegen`] - Binding extraction, code model, rendering and writing
//! - [`cli`] - The `uxbind` command line

pub mod cli;
pub mod prelude;

/// Markup parsing and the node tree.
pub mod markup {
    pub use uxbind_markup::*;
}

/// Code generation from markup documents.
pub mod codegen {
    pub use uxbind_codegen::*;
}

// Re-export commonly used items at the crate root
pub use uxbind_codegen::{CodegenError, GeneratedArtifact, Generator, GeneratorConfig};
pub use uxbind_markup::{DocumentAsset, MarkupNode, ParseError};
