//! cv-core: value types shared by every calcvars crate.
//!
//! Contains:
//! - var (the `Var` record, its value and builder)
//! - constants (the fixed catalog of system constants)
//! - numeric (finite checks + numeric literal parsing)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod var;

pub use constants::{CATALOG, is_catalog_name, system_var};
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use var::{Var, VarBuilder, VarValue};
