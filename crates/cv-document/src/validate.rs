//! Document validation logic.

use crate::schema::VarsDocument;
use cv_core::VarValue;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate variable name: {name}")]
    DuplicateName { name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(document: &VarsDocument) -> Result<(), ValidationError> {
    if document.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: document.version,
        });
    }

    let mut names = HashSet::new();
    for (idx, def) in document.vars.iter().enumerate() {
        if def.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("vars[{idx}].name"),
                value: format!("{:?}", def.name),
                reason: "name must not be empty".to_string(),
            });
        }

        if !names.insert(def.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: def.name.clone(),
            });
        }

        if let VarValue::Number(v) = def.value
            && !v.is_finite()
        {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.value", def.name),
                value: v.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    Ok(())
}
