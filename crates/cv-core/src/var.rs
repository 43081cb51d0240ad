//! The `Var` record: one named variable, user-defined or built in.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::numeric::{Real, ensure_finite};
use crate::{CoreError, CoreResult};

/// Value held by a variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum VarValue {
    /// Plain numeric literal.
    Number(Real),
    /// Symbolic expression, kept verbatim for the evaluation engine.
    Expression(String),
}

impl VarValue {
    pub fn as_number(&self) -> Option<Real> {
        match self {
            VarValue::Number(v) => Some(*v),
            VarValue::Expression(_) => None,
        }
    }

    pub fn as_expression(&self) -> Option<&str> {
        match self {
            VarValue::Number(_) => None,
            VarValue::Expression(expr) => Some(expr),
        }
    }
}

impl From<Real> for VarValue {
    fn from(v: Real) -> Self {
        VarValue::Number(v)
    }
}

impl From<&str> for VarValue {
    fn from(expr: &str) -> Self {
        VarValue::Expression(expr.to_string())
    }
}

impl From<String> for VarValue {
    fn from(expr: String) -> Self {
        VarValue::Expression(expr)
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Number(v) => write!(f, "{v}"),
            VarValue::Expression(expr) => f.write_str(expr),
        }
    }
}

/// A named variable.
///
/// Identity is the name: two `Var`s with the same name compare and hash
/// equal regardless of value, which is what set-based merging relies on.
/// Compare `value()` explicitly when content matters.
#[derive(Debug, Clone)]
pub struct Var {
    name: String,
    value: VarValue,
    description: Option<String>,
    system: bool,
}

impl Var {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &VarValue {
        &self.value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True only for constants from the built-in catalog.
    pub fn is_system(&self) -> bool {
        self.system
    }

    /// Overwrite this record's data with `other`'s, keeping this record's name.
    ///
    /// This is the only mutation a `Var` accepts after construction. The
    /// system flag only carries over between records of the same name, so a
    /// renamed copy of a constant is a user variable.
    pub fn copy_from(&mut self, other: Var) {
        self.value = other.value;
        self.description = other.description;
        self.system = other.system && other.name == self.name;
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Builder for `Var`.
///
/// Validation happens in `build`: names must be non-empty and numeric
/// values finite.
#[derive(Debug, Clone)]
pub struct VarBuilder {
    name: String,
    value: VarValue,
    description: Option<String>,
    system: bool,
}

impl VarBuilder {
    pub fn new(name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
            system: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Only the constant catalog may mark a variable as system.
    pub(crate) fn system(mut self, system: bool) -> Self {
        self.system = system;
        self
    }

    pub fn build(self) -> CoreResult<Var> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidName { name: self.name });
        }
        if let VarValue::Number(v) = self.value {
            ensure_finite(v, &self.name)?;
        }
        Ok(Var {
            name: self.name,
            value: self.value,
            description: self.description,
            system: self.system,
        })
    }
}
