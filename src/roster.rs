//! Roster loading: selects the name and identifier columns from a delimited
//! file and keeps only rows where both are present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv::{parse_delimited, Delimiter, Table};
use crate::error::{Result, SeatchartError};
use crate::types::{Occupant, Roster};

/// Column names holding the student's display name and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub name: String,
    pub id: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            name: "First name".to_string(),
            id: "ID number".to_string(),
        }
    }
}

/// Read a roster from a CSV/TSV file. The delimiter follows the extension.
///
/// # Errors
/// [`SeatchartError::SourceUnavailable`] if the file cannot be read, is not
/// UTF-8 or has an unterminated quoted field, [`SeatchartError::MissingField`]
/// if a required column is absent.
pub fn load_roster(path: &Path, fields: &FieldNames) -> Result<Roster> {
    let data = std::fs::read(path).map_err(|e| SeatchartError::source_unavailable(path, e))?;
    let text = String::from_utf8(data)
        .map_err(|e| SeatchartError::source_unavailable(path, format!("not UTF-8 text: {e}")))?;
    let table = parse_delimited(&text, Delimiter::from_path(path))
        .map_err(|e| SeatchartError::source_unavailable(path, e))?;
    roster_from_table(&table, fields)
}

/// Read a roster from in-memory delimited text.
///
/// # Errors
/// [`SeatchartError::SourceUnavailable`] if the bytes are not UTF-8 or have an
/// unterminated quoted field, [`SeatchartError::MissingField`] if a required
/// column is absent.
pub fn parse_roster(data: &[u8], delim: Delimiter, fields: &FieldNames) -> Result<Roster> {
    let text = std::str::from_utf8(data).map_err(|e| {
        SeatchartError::source_unavailable("<memory>", format!("not UTF-8 text: {e}"))
    })?;
    let table = parse_delimited(text, delim)
        .map_err(|e| SeatchartError::source_unavailable("<memory>", e))?;
    roster_from_table(&table, fields)
}

/// Build a roster from a parsed table.
///
/// Rows missing either value are dropped silently; an empty result is not an
/// error.
///
/// # Errors
/// [`SeatchartError::MissingField`] naming every absent column.
pub fn roster_from_table(table: &Table, fields: &FieldNames) -> Result<Roster> {
    let name_col = table.column(&fields.name);
    let id_col = table.column(&fields.id);
    let (name_col, id_col) = match (name_col, id_col) {
        (Some(n), Some(i)) => (n, i),
        _ => {
            let missing = [(name_col, &fields.name), (id_col, &fields.id)]
                .into_iter()
                .filter(|(col, _)| col.is_none())
                .map(|(_, name)| name.clone())
                .collect();
            return Err(SeatchartError::MissingField { fields: missing });
        }
    };

    let roster: Roster = (0..table.records().len())
        .filter_map(|row| {
            let name = table.value(row, name_col)?;
            let id = table.value(row, id_col)?;
            Some(Occupant::new(name, id))
        })
        .collect();

    let dropped = table.records().len() - roster.len();
    if dropped > 0 {
        tracing::debug!(dropped, "Skipped rows without a name or ID number");
    }
    if roster.is_empty() {
        tracing::warn!(
            name_field = %fields.name,
            id_field = %fields.id,
            "No valid student data found; the chart will be empty"
        );
    } else {
        tracing::info!(students = roster.len(), "Read student data");
    }
    Ok(roster)
}
