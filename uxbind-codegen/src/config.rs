//! Generator configuration.
//!
//! Defaults target Unity UI Toolkit: a `MonoBehaviour` holding a
//! `UIDocument`, elements looked up with `VisualElement.Q`.

use std::collections::BTreeMap;

/// Tool identification written into the generated file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Tool name.
    pub tool_name: String,
    /// Tool version.
    pub version: String,
}

impl Banner {
    /// Creates a banner for the given tool and version.
    #[must_use]
    pub fn new(tool_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            version: version.into(),
        }
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new("uxbind", env!("CARGO_PKG_VERSION"))
    }
}

/// Settings shared by the model builder and the renderer.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub(crate) banner: Banner,
    pub(crate) namespace: Option<String>,
    pub(crate) base_type: String,
    pub(crate) document_type: String,
    pub(crate) root_type: String,
    pub(crate) root_member: String,
    pub(crate) query_method: String,
    pub(crate) imports: Vec<String>,
    pub(crate) skipped_elements: Vec<String>,
    pub(crate) type_aliases: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Creates a configuration with Unity UI Toolkit defaults.
    #[must_use]
    pub fn new() -> Self {
        let mut type_aliases = BTreeMap::new();
        type_aliases.insert("Instance".to_string(), "TemplateContainer".to_string());

        Self {
            banner: Banner::default(),
            namespace: None,
            base_type: "MonoBehaviour".to_string(),
            document_type: "UIDocument".to_string(),
            root_type: "VisualElement".to_string(),
            root_member: "rootVisualElement".to_string(),
            query_method: "Q".to_string(),
            imports: vec![
                "UnityEngine".to_string(),
                "UnityEngine.UIElements".to_string(),
            ],
            skipped_elements: vec!["Style".to_string(), "Template".to_string()],
            type_aliases,
        }
    }

    /// Sets the header banner.
    #[must_use]
    pub fn banner(mut self, banner: Banner) -> Self {
        self.banner = banner;
        self
    }

    /// Wraps the generated class in a namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the base type of the generated class.
    #[must_use]
    pub fn base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = base_type.into();
        self
    }

    /// Sets the type of the document handle field.
    #[must_use]
    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    /// Sets the type returned by the root accessor.
    #[must_use]
    pub fn root_type(mut self, root_type: impl Into<String>) -> Self {
        self.root_type = root_type.into();
        self
    }

    /// Sets the document member holding the root element.
    #[must_use]
    pub fn root_member(mut self, member: impl Into<String>) -> Self {
        self.root_member = member.into();
        self
    }

    /// Sets the lookup-by-name method called on the root element.
    #[must_use]
    pub fn query_method(mut self, method: impl Into<String>) -> Self {
        self.query_method = method.into();
        self
    }

    /// Replaces the imported namespaces.
    #[must_use]
    pub fn imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Excludes an element type from binding even when it carries a name.
    #[must_use]
    pub fn skip_element(mut self, element_type: impl Into<String>) -> Self {
        self.skipped_elements.push(element_type.into());
        self
    }

    /// Maps a markup element type to a different declared type.
    #[must_use]
    pub fn type_alias(mut self, element_type: impl Into<String>, declared: impl Into<String>) -> Self {
        self.type_aliases.insert(element_type.into(), declared.into());
        self
    }

    /// Returns the header banner.
    #[must_use]
    pub fn header_banner(&self) -> &Banner {
        &self.banner
    }

    /// Returns true if elements of this type are never bound.
    #[must_use]
    pub fn is_skipped(&self, element_type: &str) -> bool {
        self.skipped_elements.iter().any(|t| t == element_type)
    }

    /// Resolves a markup element type to the declared type.
    #[must_use]
    pub fn resolve_type<'a>(&'a self, element_type: &'a str) -> &'a str {
        self.type_aliases
            .get(element_type)
            .map_or(element_type, String::as_str)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
