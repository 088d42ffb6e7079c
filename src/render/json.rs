//! JSON snapshot of a seating plan, for tooling and audit trails.

use serde::Serialize;

use super::ChartMeta;
use crate::error::Result;
use crate::types::{SeatContent, SeatGrid};

#[derive(Serialize)]
struct ChartSnapshot<'a> {
    #[serde(flatten)]
    meta: &'a ChartMeta,
    rows: usize,
    cols: usize,
    seated: usize,
    seats: Vec<&'a [SeatContent]>,
}

/// Serialize metadata and seats (as nested rows) to pretty JSON.
///
/// # Errors
/// Returns [`crate::SeatchartError::Json`] if serialization fails.
pub fn render_json(seats: &SeatGrid, meta: &ChartMeta) -> Result<String> {
    let grid = seats.grid();
    let snapshot = ChartSnapshot {
        meta,
        rows: grid.rows(),
        cols: grid.cols(),
        seated: seats.occupied_count(),
        seats: seats.rows().collect(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
