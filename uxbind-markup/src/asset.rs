//! Markup document asset descriptors.

use std::path::{Path, PathBuf};

/// Extension appended to the asset name for the generated source file.
pub const GENERATED_EXTENSION: &str = "g.cs";

/// Describes which markup document to generate code for and where to write
/// the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAsset {
    /// Asset name (file stem of the markup document).
    pub name: String,
    /// Path of the markup document.
    pub full_path: PathBuf,
    /// Path the generated source is written to.
    pub generated_output_path: PathBuf,
}

impl DocumentAsset {
    /// Creates an asset for the document at `path`.
    ///
    /// The generated file sits next to the document as `<name>.g.cs`.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let full_path = path.into();
        let name = full_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let generated_output_path =
            full_path.with_file_name(format!("{name}.{GENERATED_EXTENSION}"));

        Self {
            name,
            full_path,
            generated_output_path,
        }
    }

    /// Overrides the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.generated_output_path = path.into();
        self
    }

    /// Overrides the asset name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the path of the markup document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.full_path
    }
}
