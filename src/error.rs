//! Structured error types for seatchart.
//!
//! Every fatal condition of a run maps to one variant, so callers can tell
//! failure causes apart without parsing messages.

use std::path::PathBuf;

/// All errors that can abort a seating-chart run.
#[derive(Debug, thiserror::Error)]
pub enum SeatchartError {
    /// The roster source is missing, unreadable or not valid delimited text.
    #[error("Roster source {} unavailable: {reason}", path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    /// Required columns are absent from the roster header.
    #[error("Required columns not found: {}", fields.join(", "))]
    MissingField { fields: Vec<String> },

    /// More students than seats.
    #[error("Number of students ({requested}) exceeds total seats ({available})")]
    Capacity { requested: usize, available: usize },

    /// Grid dimensions that cannot describe a room.
    #[error("Invalid grid {rows}x{cols}: rows and columns must be positive")]
    InvalidGrid { rows: usize, cols: usize },

    /// The rendered document could not be saved.
    #[error("Failed to write {}: {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read or understood.
    #[error("Configuration: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON serialization: {0}")]
    Json(#[from] serde_json::Error),
}

/// Discriminant of [`SeatchartError`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceUnavailable,
    MissingField,
    Capacity,
    InvalidGrid,
    DestinationWrite,
    Config,
    Json,
}

impl SeatchartError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::Capacity { .. } => ErrorKind::Capacity,
            Self::InvalidGrid { .. } => ErrorKind::InvalidGrid,
            Self::DestinationWrite { .. } => ErrorKind::DestinationWrite,
            Self::Config(_) => ErrorKind::Config,
            Self::Json(_) => ErrorKind::Json,
        }
    }

    pub(crate) fn source_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeatchartError>;
