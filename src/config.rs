//! Run configuration: every parameter of a chart run in one place.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeatchartError};
use crate::export::default_output_name;
use crate::locale::Locale;
use crate::render::{ChartMeta, OutputFormat};
use crate::roster::FieldNames;

/// Parameters for one seating-chart run.
///
/// Missing keys take their defaults when read from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Roster file (CSV, or TSV by extension)
    pub input: PathBuf,
    /// Rows in the room
    pub rows: usize,
    /// Seats per row
    pub cols: usize,
    /// Shuffle seed; `None` gives a different order each run
    pub seed: Option<u64>,
    /// Locale selector, `zh` or `en`
    pub locale: String,
    pub subject: String,
    pub room: String,
    pub date: String,
    pub time: String,
    /// Destination; defaults to [`default_output_name`] in the working directory
    pub output: Option<PathBuf>,
    pub fields: FieldNames,
    pub format: OutputFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            rows: 7,
            cols: 8,
            seed: None,
            locale: "zh".to_string(),
            subject: String::new(),
            room: String::new(),
            date: String::new(),
            time: String::new(),
            output: None,
            fields: FieldNames::default(),
            format: OutputFormat::Html,
        }
    }
}

impl ChartConfig {
    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    /// [`SeatchartError::Config`] if the file is unreadable or malformed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SeatchartError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
            .map_err(|e| SeatchartError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    /// Returns the serde error for malformed JSON or unknown keys.
    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Heading metadata for this run.
    #[must_use]
    pub fn meta(&self) -> ChartMeta {
        ChartMeta {
            subject: self.subject.clone(),
            room: self.room.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            seed: self.seed,
        }
    }

    /// Where the document goes, given the resolved locale.
    #[must_use]
    pub fn output_path(&self, locale: Locale) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_name(locale, self.seed, self.format))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ChartConfig::from_json_str(
            r#"{"input": "roster.csv", "rows": 5, "seed": 42, "locale": "en"}"#,
        )
        .unwrap();
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 8);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fields, FieldNames::default());
        assert_eq!(config.format, OutputFormat::Html);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(ChartConfig::from_json_str(r#"{"colums": 4}"#).is_err());
    }

    #[test]
    fn test_nested_fields_and_format() {
        let config = ChartConfig::from_json_str(
            r#"{"fields": {"name": "Student"}, "format": "json"}"#,
        )
        .unwrap();
        assert_eq!(config.fields.name, "Student");
        assert_eq!(config.fields.id, "ID number");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_output_path_default_and_override() {
        let mut config = ChartConfig {
            seed: Some(3),
            ..ChartConfig::default()
        };
        assert_eq!(
            config.output_path(Locale::En),
            PathBuf::from("seating_chart_frontloaded_en_rs3.html")
        );
        config.output = Some(PathBuf::from("room.html"));
        assert_eq!(config.output_path(Locale::En), PathBuf::from("room.html"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ChartConfig::from_json_file(Path::new("no/such/config.json")).unwrap_err();
        assert!(matches!(err, SeatchartError::Config(_)));
    }
}
