//! tsconfig document model
//!
//! A parsed `tsconfig.json` kept as a raw JSON object so every field the
//! tool does not manage survives a rewrite untouched. Mutation happens
//! only through explicit overlays of the managed keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key holding the project reference list.
pub const REFERENCES_KEY: &str = "references";

/// Key holding the file list cleared on the root config.
pub const FILES_KEY: &str = "files";

/// A single project reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReference {
    /// Path to the referenced tsconfig, relative to the declaring file
    pub path: String,
}

impl ProjectReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// A tsconfig document with unmanaged fields preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TsConfig {
    fields: Map<String, Value>,
}

impl TsConfig {
    /// Parse a document from JSON source.
    ///
    /// The top level must be an object; anything else cannot carry a
    /// reference list.
    pub fn parse(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(Error::parse("JSON", "top level must be an object")),
        }
    }

    /// Replace the `references` list, leaving every other field as-is.
    pub fn with_references(mut self, references: &[ProjectReference]) -> Self {
        let entries: Vec<Value> = references
            .iter()
            .map(|r| serde_json::json!({ "path": r.path }))
            .collect();
        self.fields
            .insert(REFERENCES_KEY.to_string(), Value::Array(entries));
        self
    }

    /// Replace the `files` list with an empty one.
    ///
    /// The root config is a pure solution file: it drives builds through
    /// its references and compiles nothing itself.
    pub fn with_files_cleared(mut self) -> Self {
        self.fields
            .insert(FILES_KEY.to_string(), Value::Array(Vec::new()));
        self
    }

    /// View the document as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Read back the declared reference list, if any.
    pub fn references(&self) -> Option<Vec<ProjectReference>> {
        let value = self.fields.get(REFERENCES_KEY)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Look up an unmanaged field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
