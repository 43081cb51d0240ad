//! Document version migration.

use cv_core::{VarValue, parse_finite};

use crate::DocumentError;
use crate::schema::VarsDocument;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut document: VarsDocument) -> Result<VarsDocument, DocumentError> {
    while document.version < LATEST_VERSION {
        document = migrate_one_version(document)?;
    }
    Ok(document)
}

fn migrate_one_version(document: VarsDocument) -> Result<VarsDocument, DocumentError> {
    match document.version {
        0 => migrate_v0_to_v1(document),
        v => Err(DocumentError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

// v0 stored every value as text; numeric literals become numbers.
fn migrate_v0_to_v1(mut document: VarsDocument) -> Result<VarsDocument, DocumentError> {
    for def in &mut document.vars {
        if let VarValue::Expression(text) = &def.value
            && let Some(v) = parse_finite(text)
        {
            def.value = VarValue::Number(v);
        }
    }

    document.version = 1;
    Ok(document)
}
