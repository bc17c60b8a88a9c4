//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Markup parsing error.
    #[error("markup parse error: {0}")]
    Parse(#[from] uxbind_markup::ParseError),

    /// Code model error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Temporary output could not replace the target file.
    #[error("failed to persist generated file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Error type raised while building the code model.
///
/// All of these abort generation before anything is rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Class name is not a valid identifier.
    #[error("invalid class name '{name}'")]
    InvalidClassName {
        /// Class name.
        name: String,
    },

    /// Namespace is not a valid dotted name.
    #[error("invalid namespace '{name}'")]
    InvalidNamespace {
        /// Namespace.
        name: String,
    },

    /// Configured member or method the generated code refers to is not a
    /// valid identifier.
    #[error("invalid {role} '{name}'")]
    InvalidMemberReference {
        /// Configured name.
        name: String,
        /// What the name is used for.
        role: &'static str,
    },

    /// Declared element type is not a valid type name.
    #[error("invalid type name '{type_name}' for '{identifier}'")]
    InvalidTypeName {
        /// Type name.
        type_name: String,
        /// Element identifier or generated member the type belongs to.
        identifier: String,
    },

    /// Element identifier does not derive a usable member name.
    #[error("identifier '{identifier}' does not produce a valid member name (got '{member}')")]
    InvalidIdentifier {
        /// Element identifier.
        identifier: String,
        /// Derived member name.
        member: String,
    },

    /// Derived member name collides with a generated member.
    #[error("identifier '{identifier}' collides with reserved member '{member}'")]
    ReservedName {
        /// Element identifier.
        identifier: String,
        /// Reserved member name.
        member: String,
    },

    /// Two elements bind to the same identifier or member.
    #[error("duplicate identifier '{identifier}' (member '{member}' is already bound)")]
    DuplicateIdentifier {
        /// Element identifier.
        identifier: String,
        /// Member name both elements map to.
        member: String,
    },
}

impl ModelError {
    /// Creates an invalid type name error.
    pub fn invalid_type(type_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::InvalidTypeName {
            type_name: type_name.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates a reserved name error.
    pub fn reserved(identifier: impl Into<String>, member: impl Into<String>) -> Self {
        Self::ReservedName {
            identifier: identifier.into(),
            member: member.into(),
        }
    }

    /// Creates a duplicate identifier error.
    pub fn duplicate(identifier: impl Into<String>, member: impl Into<String>) -> Self {
        Self::DuplicateIdentifier {
            identifier: identifier.into(),
            member: member.into(),
        }
    }
}
