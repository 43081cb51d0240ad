//! Error types for registry persistence and mutation.

use cv_core::CoreError;
use cv_document::DocumentError;
use cv_store::StoreError;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The stored document could not be turned into variables.
    #[error("Failed to decode stored variables: {0}")]
    Decode(#[source] DocumentError),

    /// The user variables could not be turned into a document.
    #[error("Failed to encode variables: {0}")]
    Encode(#[source] DocumentError),

    /// A restored document named the same variable twice.
    #[error("Stored variables contain duplicate name: {name}")]
    DuplicateRestored { name: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Variable error: {0}")]
    Core(#[from] CoreError),
}
