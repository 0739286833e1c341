//! Error types for skein graph operations
//!
//! Two failure modes exist: inserting a vertex identifier that is
//! already present, and referencing an identifier the graph does not
//! contain. Every operation that fails leaves the graph unchanged.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex already exists: {id}")]
    DuplicateVertex { id: String },

    #[error("vertex not found: {id}")]
    UnknownVertex { id: String },
}

impl GraphError {
    /// Create an error for a vertex identifier that is already taken
    pub fn duplicate(id: impl Into<String>) -> Self {
        GraphError::DuplicateVertex { id: id.into() }
    }

    /// Create an error for a vertex identifier absent from the graph
    pub fn unknown(id: impl Into<String>) -> Self {
        GraphError::UnknownVertex { id: id.into() }
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, GraphError>;
