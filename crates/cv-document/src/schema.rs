//! Document schema definitions.

use cv_core::{Var, VarBuilder, VarValue};
use serde::{Deserialize, Serialize};

use crate::DocumentResult;

/// Top-level stored document: the user-defined variables.
///
/// Documents written before versioning carry no `version` key and
/// deserialize as version 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VarsDocument {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub vars: Vec<VarDef>,
}

/// One stored variable. There is no system flag: only user variables are
/// ever written, so everything read back is a user variable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VarDef {
    pub name: String,
    pub value: VarValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VarsDocument {
    pub fn from_vars<'a>(vars: impl IntoIterator<Item = &'a Var>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            vars: vars.into_iter().map(VarDef::from).collect(),
        }
    }

    pub fn into_vars(self) -> DocumentResult<Vec<Var>> {
        self.vars.into_iter().map(VarDef::into_var).collect()
    }
}

impl VarDef {
    pub fn into_var(self) -> DocumentResult<Var> {
        let mut builder = VarBuilder::new(self.name, self.value);
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        Ok(builder.build()?)
    }
}

impl From<&Var> for VarDef {
    fn from(var: &Var) -> Self {
        Self {
            name: var.name().to_string(),
            value: var.value().clone(),
            description: var.description().map(str::to_string),
        }
    }
}
