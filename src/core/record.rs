//! Record documents and the poem-content predicate.
//!
//! A record file is one UTF-8 JSON object describing a dataset item. The
//! only field this crate interprets is `"poem"`; everything else is carried
//! opaquely and never rewritten.

use crate::core::error::RecordError;

use serde_json::{Map, Value};
use std::path::Path;

/// The record field holding the poem text.
const POEM_KEY: &str = "poem";

/// Returns `true` when a poem value carries no usable content.
///
/// A value is empty when it is `null`, `false`, numeric zero, the empty
/// string, an empty array, or an empty object. An absent `"poem"` key is
/// treated the same way by [`RecordDocument::has_poem_content`]. This is the
/// single relocation criterion applied during a sweep.
pub fn is_empty_poem(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// A single parsed record file.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDocument {
    /// The record's key-value fields, in document order.
    fields: Map<String, Value>,
}

impl RecordDocument {
    /// Parses a record from raw JSON text.
    ///
    /// The text must be a single JSON object; any other top-level value is
    /// rejected as malformed.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let fields = serde_json::from_str(content)?;
        Ok(Self { fields })
    }

    /// Loads and parses a record file from disk.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let content = std::fs::read_to_string(path).map_err(|e| RecordError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| RecordError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Returns the poem value, if the record has one.
    pub fn poem(&self) -> Option<&Value> {
        self.fields.get(POEM_KEY)
    }

    /// Returns `true` if the record carries non-empty poem content.
    pub fn has_poem_content(&self) -> bool {
        self.poem().map(|v| !is_empty_poem(v)).unwrap_or(false)
    }

    /// Returns all fields of the record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
