//! Saving rendered charts.

use std::path::{Path, PathBuf};

use crate::error::{Result, SeatchartError};
use crate::locale::Locale;
use crate::render::OutputFormat;

/// Default file name: `seating_chart_frontloaded_{lang}_rs{seed}.{ext}`.
///
/// An absent seed is written as `None`.
#[must_use]
pub fn default_output_name(locale: Locale, seed: Option<u64>, format: OutputFormat) -> PathBuf {
    let seed = seed.map_or_else(|| "None".to_string(), |s| s.to_string());
    PathBuf::from(format!(
        "seating_chart_frontloaded_{}_rs{}.{}",
        locale.code(),
        seed,
        format.extension()
    ))
}

/// Write `contents` to `path` as UTF-8, replacing any existing file.
///
/// Parent directories are not created.
///
/// # Errors
/// [`SeatchartError::DestinationWrite`] if the file cannot be written.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| SeatchartError::DestinationWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "Seating chart saved");
    Ok(())
}
