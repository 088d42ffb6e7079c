//! seatchart - exam seating charts from a class roster
//!
//! Reads students from a CSV/TSV roster, shuffles them (reproducibly when a
//! seed is given) and seats them front to back in a fixed grid:
//! - Capacity is checked before anything is shuffled or placed
//! - Seats fill row by row with no gaps; only trailing seats stay empty
//! - The plan renders as a self-contained HTML table (Chinese or English
//!   labels) or as a JSON snapshot
//!
//! # Usage
//!
//! ```no_run
//! use seatchart::{generate, ChartConfig};
//!
//! let config = ChartConfig {
//!     input: "participants.csv".into(),
//!     rows: 7,
//!     cols: 8,
//!     seed: Some(42),
//!     subject: "Programming".to_string(),
//!     room: "MA-215".to_string(),
//!     ..ChartConfig::default()
//! };
//! let report = generate(&config)?;
//! println!("{} students seated in {}", report.seated, report.output.display());
//! # Ok::<(), seatchart::SeatchartError>(())
//! ```

pub mod assign;
pub mod config;
pub mod csv;
pub mod error;
pub mod export;
pub mod locale;
pub mod render;
pub mod roster;
pub mod types;

use std::path::PathBuf;

pub use assign::{assign, place, shuffle, shuffle_seeded, validate_capacity};
pub use config::ChartConfig;
pub use error::{ErrorKind, Result, SeatchartError};
pub use locale::Locale;
pub use render::{ChartMeta, OutputFormat};
pub use roster::{load_roster, FieldNames};
pub use types::*;

/// Outcome of a successful [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// File the chart was written to
    pub output: PathBuf,
    pub seated: usize,
    pub capacity: usize,
    pub locale: Locale,
    pub seed: Option<u64>,
}

/// Run the whole pipeline: load, validate, shuffle, place, render, save.
///
/// Nothing is written unless every step before saving succeeds.
///
/// # Errors
/// Any [`SeatchartError`]; see [`ErrorKind`] for the possible causes.
pub fn generate(config: &ChartConfig) -> Result<GenerateReport> {
    let grid = Grid::new(config.rows, config.cols)?;
    let roster = load_roster(&config.input, &config.fields)?;
    let seats = assign(roster, grid, config.seed)?;

    let locale = Locale::resolve(&config.locale);
    let document = render::renderer_for(config.format, locale).render(&seats, &config.meta())?;

    let output = config.output_path(locale);
    export::write_document(&output, &document)?;

    Ok(GenerateReport {
        output,
        seated: seats.occupied_count(),
        capacity: grid.capacity(),
        locale,
        seed: config.seed,
    })
}

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
