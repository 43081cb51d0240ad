//! Encode/decode boundary between variable lists and document text.

use core::fmt;
use core::str::FromStr;

use cv_core::Var;
use serde::{Deserialize, Serialize};

use crate::schema::VarsDocument;
use crate::{DocumentResult, migrate_to_latest, validate_document};

/// Turns a list of variables into document text and back.
///
/// `decode` migrates older document versions and validates the result, so
/// a successful decode always yields uniquely named user variables.
pub trait DocumentCodec: Send + Sync {
    fn encode(&self, vars: &[Var]) -> DocumentResult<String>;
    fn decode(&self, text: &str) -> DocumentResult<Vec<Var>>;
}

fn prepare(vars: &[Var]) -> DocumentResult<VarsDocument> {
    let document = VarsDocument::from_vars(vars);
    validate_document(&document)?;
    Ok(document)
}

fn finish(document: VarsDocument) -> DocumentResult<Vec<Var>> {
    let document = migrate_to_latest(document)?;
    validate_document(&document)?;
    document.into_vars()
}

/// Pretty-printed JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl DocumentCodec for JsonCodec {
    fn encode(&self, vars: &[Var]) -> DocumentResult<String> {
        let document = prepare(vars)?;
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn decode(&self, text: &str) -> DocumentResult<Vec<Var>> {
        let document: VarsDocument = serde_json::from_str(text)?;
        finish(document)
    }
}

/// YAML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl DocumentCodec for YamlCodec {
    fn encode(&self, vars: &[Var]) -> DocumentResult<String> {
        let document = prepare(vars)?;
        Ok(serde_yaml::to_string(&document)?)
    }

    fn decode(&self, text: &str) -> DocumentResult<Vec<Var>> {
        let document: VarsDocument = serde_yaml::from_str(text)?;
        finish(document)
    }
}

/// Runtime choice of codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentCodec for DocumentFormat {
    fn encode(&self, vars: &[Var]) -> DocumentResult<String> {
        match self {
            DocumentFormat::Json => JsonCodec.encode(vars),
            DocumentFormat::Yaml => YamlCodec.encode(vars),
        }
    }

    fn decode(&self, text: &str) -> DocumentResult<Vec<Var>> {
        match self {
            DocumentFormat::Json => JsonCodec.decode(text),
            DocumentFormat::Yaml => YamlCodec.decode(text),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => f.write_str("json"),
            DocumentFormat::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(format!("unknown document format: {other}")),
        }
    }
}
