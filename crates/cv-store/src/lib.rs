//! cv-store: string-keyed configuration stores.

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid store path: {message}")]
    InvalidPath { message: String },
}
