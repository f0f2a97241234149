//! Common error types for Scribe.

use thiserror::Error;

/// Errors that can occur during namespace storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Namespace not found.
    #[error("Namespace not found: {0}")]
    NamespaceNotFound(String),

    /// Namespace already open.
    #[error("Namespace already exists: {0}")]
    NamespaceExists(String),

    /// Namespace name rejected by the identifier pattern.
    #[error("Invalid namespace name: '{0}'")]
    InvalidNamespaceName(String),

    /// The document carries no value for the namespace's primary-key field.
    #[error("Document has no primary key: field '{field}' of namespace '{namespace}'")]
    MissingPrimaryKey { namespace: String, field: String },

    /// The primary-key value cannot be used as a key.
    #[error("Invalid primary key for field '{field}': {type_name} is not a keyable type")]
    InvalidPrimaryKey { field: String, type_name: String },
}

impl StorageError {
    pub fn missing_primary_key(namespace: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingPrimaryKey {
            namespace: namespace.into(),
            field: field.into(),
        }
    }

    pub fn invalid_primary_key(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::InvalidPrimaryKey {
            field: field.into(),
            type_name: type_name.into(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
