// src/schema/types.rs

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Structural metadata for one catalog table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TableMetadata {
    pub name: String,
    /// Emitted verbatim in front of `CREATE TABLE`.
    pub comment: String,
    pub columns: Vec<ColumnEntry>,
}

/// An entry of a table's `columns` list, discriminated by its `type` field.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnEntry {
    Column(Column),
    ForeignKey(ForeignKey),
    /// Any other `type` value; never rendered.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Column {
    pub name: String,
    /// Raw vendor type name, e.g. `int64` or `bpchar`.
    pub data_type: String,
    pub comment: String,
    pub is_primary_key: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ForeignKey {
    /// Preformatted constraint clause.
    pub constraint: String,
    pub comment: String,
    #[serde(rename = "tables", alias = "referenced_tables")]
    pub referenced_tables: HashSet<String>,
}

/// Optional projections applied while rendering DDL.
/// An empty set filters nothing, the same as `None`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct DdlFilters {
    pub columns: Option<HashSet<String>>,
    pub tables: Option<HashSet<String>>,
}

/// Rendered DDL plus the special field categories it contains.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct BuildResult {
    pub ddl: String,
    pub has_calculated_field: bool,
    pub has_json_field: bool,
    pub has_geometry_field: bool,
}

impl TableMetadata {
    /// Parse a document's metadata mapping into a table record.
    pub fn from_meta(meta: Map<String, Value>) -> Result<Self> {
        if meta.is_empty() {
            bail!("malformed table metadata: mapping is empty");
        }
        let name = meta
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("<unnamed>")
            .to_owned();
        serde_json::from_value(Value::Object(meta))
            .with_context(|| format!("malformed table metadata for `{}`", name))
    }
}
