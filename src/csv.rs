//! Minimal CSV/TSV reader that produces a header-aware [`Table`].
//!
//! Every value is kept as text; nothing is parsed as a number, so student
//! identifiers such as `00123` keep their leading zeros. Headers and values
//! are trimmed of surrounding whitespace when read.

use std::path::Path;

/// Delimiter for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    /// Pick the delimiter from a file extension (`.tsv`/`.tab` are tab separated).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("tsv" | "tab") => Self::Tab,
            _ => Self::Comma,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

/// A parsed delimited file: the first record is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of the column named `name` (exact match after trimming).
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Data records, in file order. Short records are not padded here;
    /// use [`Table::value`] for tolerant access.
    #[must_use]
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Value at `record`/`column`, `None` when absent or blank.
    ///
    /// Surrounding whitespace is trimmed, so ` 00123 ` reads as `00123` and a
    /// whitespace-only cell counts as missing. Inner text is never altered.
    #[must_use]
    pub fn value(&self, record: usize, column: usize) -> Option<&str> {
        self.records
            .get(record)
            .and_then(|r| r.get(column))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// A quoted field was still open when the input ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unterminated quoted field starting on line {line}")]
pub struct UnterminatedQuote {
    /// 1-based line of the opening quote
    pub line: usize,
}

/// Parse delimited text into a [`Table`].
///
/// A leading byte-order mark is ignored and blank lines are skipped. A field
/// that starts with `"` is quoted and may contain delimiters, doubled quotes
/// and line breaks; a `"` anywhere else is an ordinary character.
///
/// # Errors
/// [`UnterminatedQuote`] if a quoted field is never closed.
pub fn parse_delimited(text: &str, delim: Delimiter) -> Result<Table, UnterminatedQuote> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text, delim.as_char())?.into_iter();
    let headers = records
        .next()
        .map(|h| h.into_iter().map(|f| f.trim().to_string()).collect())
        .unwrap_or_default();

    Ok(Table {
        headers,
        records: records.collect(),
    })
}

/// Split text into records of fields, respecting quoted fields.
fn split_records(text: &str, sep: char) -> Result<Vec<Vec<String>>, UnterminatedQuote> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    // Line of the opening quote while inside a quoted field
    let mut quoted_from: Option<usize> = None;
    let mut at_field_start = true;
    // A record made only of an unquoted empty field is a blank line.
    let mut saw_content = false;
    let mut line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted_from.is_some() {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    quoted_from = None;
                }
            } else {
                if ch == '\n' {
                    line += 1;
                }
                current.push(ch);
            }
        } else if ch == '"' && at_field_start {
            quoted_from = Some(line);
            at_field_start = false;
            saw_content = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
            at_field_start = true;
            saw_content = true;
        } else if ch == '\n' || ch == '\r' {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            line += 1;
            if saw_content || !current.is_empty() {
                fields.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut fields));
            }
            at_field_start = true;
            saw_content = false;
        } else {
            current.push(ch);
            at_field_start = false;
        }
    }
    if let Some(line) = quoted_from {
        return Err(UnterminatedQuote { line });
    }
    if saw_content || !current.is_empty() {
        fields.push(current);
        records.push(fields);
    }
    Ok(records)
}
