//! # uxbind Codegen
//!
//! C# binding code generation from UXML documents.
//!
//! This crate provides:
//! - Extraction of named elements into a binding table
//! - A language-neutral code model of the generated class
//! - Deterministic C# rendering with a fixed header banner
//! - Atomic output writing

pub mod binding;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod render;
pub mod writer;

pub use binding::{BindableElement, extract_bindings};
pub use config::{Banner, GeneratorConfig};
pub use error::{CodegenError, ModelError};
pub use generator::Generator;
pub use model::{CodeModel, ModelBuilder};
pub use render::{CSharpRenderer, GeneratedArtifact};
pub use writer::write_atomic;

/// Generates the C# class for a markup document string using the default
/// configuration.
///
/// # Arguments
/// * `class_name` - Name of the generated class
/// * `xml` - Markup document content
///
/// # Returns
/// The generated file content.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(class_name: &str, xml: &str) -> Result<String, CodegenError> {
    let root = uxbind_markup::parse_markup(xml)?;
    let generator = Generator::default();
    Ok(generator.generate(class_name, &root)?.contents())
}

/// Generates the C# class for a markup document file using the default
/// configuration. The class is named after the file.
///
/// # Arguments
/// * `path` - Path to the markup document
///
/// # Returns
/// The generated file content.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let asset = uxbind_markup::DocumentAsset::from_path(path);
    let generator = Generator::default();
    Ok(generator.generate_asset(&asset)?.contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_xml() {
        let xml = r#"<UXML><Button name="play"/><Button name="quit"/></UXML>"#;
        let output = generate_from_xml("TitleScreen", xml).expect("Failed to generate");

        assert!(output.contains(&format!("uxbind {}", env!("CARGO_PKG_VERSION"))));
        assert!(output.contains("public partial class TitleScreen : MonoBehaviour"));
        let play = output.find("_play = (Button)").expect("missing play");
        let quit = output.find("_quit = (Button)").expect("missing quit");
        assert!(play < quit);
    }

    #[test]
    fn test_generate_from_xml_parse_error() {
        let result = generate_from_xml("TitleScreen", "<UXML>");
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }

    #[test]
    fn test_generate_from_xml_rejects_superscript_identifier() {
        let result = generate_from_xml("Menu", r#"<UXML><Label name="x²"/></UXML>"#);
        assert!(matches!(
            result,
            Err(CodegenError::Model(ModelError::InvalidIdentifier { .. }))
        ));
    }

    #[test]
    fn test_generate_from_xml_escapes_line_separator() {
        let xml = r#"<UXML><Label name="a&#x2028;b"/></UXML>"#;
        let output = generate_from_xml("Menu", xml).expect("Failed to generate");

        assert!(output.contains(r#"_aB = (Label)Root.Q("a\u2028b");"#));
        assert!(!output.contains('\u{2028}'));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(std::path::Path::new("/nonexistent/Menu.uxml"));
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }
}
