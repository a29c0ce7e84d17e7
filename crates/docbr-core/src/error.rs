//! Error types for the docbr-core library.
//!
//! Only call-level failures are errors. A document that fails its checksum or
//! pattern is reported as invalid (or absent) at its own position and never
//! surfaces here.

use thiserror::Error;

/// Main error type for the docbr library.
#[derive(Error, Debug)]
pub enum DocbrError {
    /// The request itself is malformed for the chosen document type.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The caller handed over a container the boundary cannot coerce.
    #[error("type error: {0}")]
    Boundary(#[from] BoundaryError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or written.
    #[error("configuration file error: {0}")]
    Config(String),
}

/// Errors that abort a whole call before any element is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Document type key not present in the registry.
    #[error("document type '{key}' not recognized, expected one of: {expected}")]
    UnknownDocumentType { key: String, expected: String },

    /// Attribute name not registered for the document type.
    #[error("attribute '{attribute}' not found for document type '{doctype}'")]
    UnknownAttribute { doctype: String, attribute: String },

    /// The document type has no attributes at all.
    #[error("document type '{0}' has no attributes to extract")]
    NoAttributes(String),

    /// Attribute request with no names in it.
    #[error("no attribute requested for document type '{0}'")]
    EmptyAttributeRequest(String),
}

/// Errors raised while coercing caller input into a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// Top-level value is not a scalar or a list.
    #[error("type {0} not supported, use a string, a number or a list of them")]
    UnsupportedContainer(String),

    /// A list holds an element of an unsupported type.
    #[error("cannot convert list because element {index} has unsupported type {kind}")]
    UnsupportedElement { index: usize, kind: String },
}

/// Result type for the docbr library.
pub type Result<T> = std::result::Result<T, DocbrError>;
