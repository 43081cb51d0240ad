//! cv-document: the stored variables document, its versions and codecs.

pub mod codec;
pub mod migrate;
pub mod schema;
pub mod validate;

pub use codec::{DocumentCodec, DocumentFormat, JsonCodec, YamlCodec};
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_document};

use cv_core::{CoreError, Var};

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Variable error: {0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and decode a variables document from a file.
pub fn read_vars(path: &std::path::Path, codec: &dyn DocumentCodec) -> DocumentResult<Vec<Var>> {
    let content = std::fs::read_to_string(path)?;
    codec.decode(&content)
}

/// Encode variables and write them to a file.
pub fn write_vars(
    path: &std::path::Path,
    codec: &dyn DocumentCodec,
    vars: &[Var],
) -> DocumentResult<()> {
    let content = codec.encode(vars)?;
    std::fs::write(path, content)?;
    Ok(())
}
