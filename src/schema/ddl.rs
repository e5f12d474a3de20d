// src/schema/ddl.rs

use std::collections::HashSet;
use tracing::{debug, instrument, trace};

use super::normalize::{engine_data_type, is_geometry_type};
use super::types::{BuildResult, ColumnEntry, DdlFilters, TableMetadata};

/// Comment marker identifying derived columns.
pub const CALCULATED_FIELD_MARKER: &str = "This column is a Calculated Field";

/// Render `table` as a `CREATE TABLE` statement.
///
/// - `columns`: when non-empty, only columns with these names are rendered
/// - `tables`: when non-empty, only foreign keys whose referenced tables all
///   appear here are rendered
///
/// Columns typed `unknown` are always dropped. Entry order is preserved and a
/// table with nothing left still renders an empty column list.
#[instrument(level = "debug", skip_all, fields(table = %table.name))]
pub fn build_table_ddl(
    table: &TableMetadata,
    columns: Option<&HashSet<String>>,
    tables: Option<&HashSet<String>>,
) -> BuildResult {
    let columns = columns.filter(|c| !c.is_empty());
    let tables = tables.filter(|t| !t.is_empty());

    let mut clauses = Vec::with_capacity(table.columns.len());
    let mut result = BuildResult::default();

    for entry in &table.columns {
        match entry {
            ColumnEntry::Column(col) => {
                let data_type_lower = col.data_type.to_lowercase();
                // geometry columns may surface as `unknown` upstream
                let is_geometry = is_geometry_type(&data_type_lower);

                let selected = columns.map_or(true, |c| c.contains(&col.name));
                if !selected || (data_type_lower == "unknown" && !is_geometry) {
                    trace!(column = %col.name, data_type = %col.data_type, "skipping column");
                    continue;
                }

                if col.comment.contains(CALCULATED_FIELD_MARKER) {
                    result.has_calculated_field = true;
                }
                if data_type_lower == "json" {
                    result.has_json_field = true;
                }
                if is_geometry {
                    result.has_geometry_field = true;
                }

                let mut clause = format!(
                    "{}{} {}",
                    col.comment,
                    col.name,
                    engine_data_type(&col.data_type)
                );
                if col.is_primary_key {
                    clause.push_str(" PRIMARY KEY");
                }
                clauses.push(clause);
            }
            ColumnEntry::ForeignKey(fk) => {
                if tables.map_or(true, |t| fk.referenced_tables.is_subset(t)) {
                    clauses.push(format!("{}{}", fk.comment, fk.constraint));
                } else {
                    trace!(constraint = %fk.constraint, "skipping foreign key");
                }
            }
            ColumnEntry::Unsupported => {
                debug!("skipping column entry with unsupported type");
            }
        }
    }

    debug!(clauses = clauses.len(), "rendered table");
    result.ddl = format!(
        "{}CREATE TABLE {} (\n  {}\n);",
        table.comment,
        table.name,
        clauses.join(",\n  ")
    );
    result
}

/// Render several tables, separated by a blank line, with flags OR-ed across
/// all of them.
pub fn build_catalog_ddl(tables: &[TableMetadata], filters: &DdlFilters) -> BuildResult {
    let mut out = BuildResult::default();
    let mut statements = Vec::with_capacity(tables.len());

    for table in tables {
        let r = build_table_ddl(table, filters.columns.as_ref(), filters.tables.as_ref());
        out.has_calculated_field |= r.has_calculated_field;
        out.has_json_field |= r.has_json_field;
        out.has_geometry_field |= r.has_geometry_field;
        statements.push(r.ddl);
    }

    out.ddl = statements.join("\n\n");
    out
}
