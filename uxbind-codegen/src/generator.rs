//! End-to-end generation pipeline.
//!
//! flatten -> extract -> build -> render, and optionally write.

use crate::binding::extract_bindings;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::model::ModelBuilder;
use crate::naming::to_pascal_case;
use crate::render::{CSharpRenderer, GeneratedArtifact};
use crate::writer::write_atomic;
use std::path::PathBuf;
use uxbind_markup::{DocumentAsset, MarkupNode, flatten, parse_markup_file};

/// Runs the generation pipeline with a fixed configuration.
///
/// A generator holds no state between calls; every call starts from the
/// given document.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the class for a parsed document.
    ///
    /// The root node stands for the document itself; only its descendants
    /// are considered for binding.
    ///
    /// # Errors
    /// Returns `CodegenError::Model` if the class name, a declared type or an
    /// identifier cannot be turned into valid code.
    pub fn generate(
        &self,
        class_name: &str,
        root: &MarkupNode,
    ) -> Result<GeneratedArtifact, CodegenError> {
        let nodes = flatten(&root.children);
        let bindings = extract_bindings(&nodes, &self.config);
        tracing::debug!(
            class = class_name,
            nodes = nodes.len(),
            bindings = bindings.len(),
            "extracted bindings"
        );

        let model = ModelBuilder::new(&self.config).build(class_name, &bindings)?;
        Ok(CSharpRenderer::new(&self.config).render(&model))
    }

    /// Reads, parses and generates the class for an asset.
    ///
    /// The class name is the asset name converted to PascalCase.
    ///
    /// # Errors
    /// Returns `CodegenError` if the document cannot be read or parsed, or if
    /// the model cannot be built.
    pub fn generate_asset(&self, asset: &DocumentAsset) -> Result<GeneratedArtifact, CodegenError> {
        self.generate_asset_as(asset, &to_pascal_case(&asset.name))
    }

    /// Reads, parses and generates the class for an asset under an explicit
    /// class name, used verbatim.
    ///
    /// # Errors
    /// Same as [`Generator::generate_asset`].
    pub fn generate_asset_as(
        &self,
        asset: &DocumentAsset,
        class_name: &str,
    ) -> Result<GeneratedArtifact, CodegenError> {
        let root = parse_markup_file(asset.path())?;
        self.generate(class_name, &root)
    }

    /// Generates the class for an asset and writes it to the asset's output
    /// path.
    ///
    /// Nothing is written unless generation succeeds.
    ///
    /// # Returns
    /// The path written.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn generate_to_file(&self, asset: &DocumentAsset) -> Result<PathBuf, CodegenError> {
        let artifact = self.generate_asset(asset)?;
        Self::write_artifact(asset, &artifact)
    }

    /// Like [`Generator::generate_to_file`], with an explicit class name used
    /// verbatim.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn generate_to_file_as(
        &self,
        asset: &DocumentAsset,
        class_name: &str,
    ) -> Result<PathBuf, CodegenError> {
        let artifact = self.generate_asset_as(asset, class_name)?;
        Self::write_artifact(asset, &artifact)
    }

    fn write_artifact(
        asset: &DocumentAsset,
        artifact: &GeneratedArtifact,
    ) -> Result<PathBuf, CodegenError> {
        write_atomic(&asset.generated_output_path, &artifact.contents())?;
        Ok(asset.generated_output_path.clone())
    }
}
