//! Error types for markup parsing.

use thiserror::Error;

/// Error type for markup parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Element closed before all of its children were closed, or never closed.
    #[error("element '{element}' is never closed")]
    UnclosedElement {
        /// Element name.
        element: String,
    },

    /// Invalid document structure.
    #[error("invalid markup structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates an invalid structure error with the given message.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Creates an unclosed element error.
    pub fn unclosed(element: impl Into<String>) -> Self {
        Self::UnclosedElement {
            element: element.into(),
        }
    }
}
