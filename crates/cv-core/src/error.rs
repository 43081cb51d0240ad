use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid variable name: {name:?}")]
    InvalidName { name: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: String, value: f64 },

    #[error("Unknown system constant: {name}")]
    UnknownConstant { name: String },
}
