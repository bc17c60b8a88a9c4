//! Bindable element extraction.
//!
//! Turns a flattened node sequence into the binding table the model builder
//! works from: one row per node with a non-empty identifier, in input order.

use crate::config::GeneratorConfig;
use crate::naming::private_member_name;
use uxbind_markup::MarkupNode;

/// One named markup element eligible for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindableElement {
    /// Type the generated field is declared with.
    pub declared_type: String,
    /// Identifier from the markup, used for the runtime lookup.
    pub public_identifier: String,
    /// Name of the generated private field.
    pub private_member_name: String,
}

impl BindableElement {
    /// Creates a binding, deriving the private member name from the identifier.
    #[must_use]
    pub fn new(declared_type: impl Into<String>, public_identifier: impl Into<String>) -> Self {
        let public_identifier = public_identifier.into();
        Self {
            declared_type: declared_type.into(),
            private_member_name: private_member_name(&public_identifier),
            public_identifier,
        }
    }
}

/// Extracts the bindable elements from a flattened node sequence.
///
/// Nodes without an identifier, or with an empty one, are dropped. Directive
/// elements listed in the configuration are dropped even when named. Element
/// type aliases are applied to the declared type.
#[must_use]
pub fn extract_bindings(nodes: &[&MarkupNode], config: &GeneratorConfig) -> Vec<BindableElement> {
    nodes
        .iter()
        .filter_map(|node| {
            let identifier = node.binding_identifier()?;
            if config.is_skipped(&node.element_type) {
                tracing::warn!(
                    element = %node.element_type,
                    identifier,
                    "skipping named directive element"
                );
                return None;
            }
            Some(BindableElement::new(
                config.resolve_type(&node.element_type),
                identifier,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uxbind_markup::flatten;

    #[test]
    fn test_extract_keeps_named_nodes_in_order() {
        let root = MarkupNode::new("UXML")
            .with_child(MarkupNode::named("Button", "submitBtn"))
            .with_child(MarkupNode::new("Label"))
            .with_child(
                MarkupNode::new("VisualElement").with_child(MarkupNode::named("Toggle", "enableX")),
            );
        let flat = flatten(&root.children);
        let bindings = extract_bindings(&flat, &GeneratorConfig::default());

        assert_eq!(
            bindings,
            vec![
                BindableElement::new("Button", "submitBtn"),
                BindableElement::new("Toggle", "enableX"),
            ]
        );
        assert_eq!(bindings[1].private_member_name, "_enableX");
    }

    #[test]
    fn test_extract_drops_empty_identifiers() {
        let nodes = [MarkupNode::named("Label", ""), MarkupNode::new("Label")];
        let flat = flatten(&nodes);
        assert!(extract_bindings(&flat, &GeneratorConfig::default()).is_empty());
    }

    #[test]
    fn test_extract_skips_directives_and_applies_aliases() {
        let nodes = [
            MarkupNode::named("Template", "Row"),
            MarkupNode::named("Instance", "firstRow"),
        ];
        let flat = flatten(&nodes);
        let bindings = extract_bindings(&flat, &GeneratorConfig::default());

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].declared_type, "TemplateContainer");
        assert_eq!(bindings[0].public_identifier, "firstRow");
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_bindings(&[], &GeneratorConfig::default()).is_empty());
    }
}
