//! cv-registry: the live variable registry of the calculator.
//!
//! The registry holds user variables next to the built-in constants,
//! keeps names unique, merges external variable sets, and persists the
//! user-defined subset to a key-value store.

pub mod config;
pub mod error;
pub mod registry;

pub use config::{DEFAULT_STORAGE_KEY, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use registry::VariableRegistry;

// Re-exports: hosts usually need these alongside the registry
pub use cv_core::{CATALOG, Var, VarBuilder, VarValue};
pub use cv_document::{DocumentCodec, DocumentFormat};
pub use cv_store::{FileStore, KeyValueStore, MemoryStore};
