use serde::Serialize;

use super::Occupant;
use crate::error::{Result, SeatchartError};

/// Room dimensions. Both sides are positive and the capacity fits in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid of `rows` rows with `cols` seats each.
    ///
    /// # Errors
    /// Returns [`SeatchartError::InvalidGrid`] if either dimension is zero or
    /// the seat count overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(SeatchartError::InvalidGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of seats.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Position of the `index`-th seat in row-major order.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<SeatPosition> {
        if index >= self.capacity() {
            return None;
        }
        Some(SeatPosition {
            row: index / self.cols,
            col: index % self.cols,
        })
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

/// A seat coordinate (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SeatPosition {
    pub row: usize,
    pub col: usize,
}

impl SeatPosition {
    /// 1-based "row-seat" label, e.g. `2-3`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.row + 1, self.col + 1)
    }
}

/// What sits in a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SeatContent {
    Occupied(Occupant),
    Empty,
}

impl SeatContent {
    #[must_use]
    pub fn occupant(&self) -> Option<&Occupant> {
        match self {
            Self::Occupied(o) => Some(o),
            Self::Empty => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A fully populated seating plan, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatGrid {
    grid: Grid,
    seats: Vec<SeatContent>,
}

impl SeatGrid {
    /// Build from row-major seats. Missing trailing seats are filled with
    /// [`SeatContent::Empty`]; extra seats are dropped.
    pub(crate) fn from_seats(grid: Grid, mut seats: Vec<SeatContent>) -> Self {
        seats.resize(grid.capacity(), SeatContent::Empty);
        Self { grid, seats }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&SeatContent> {
        self.grid.index_of(row, col).and_then(|i| self.seats.get(i))
    }

    /// All seats in row-major order.
    #[must_use]
    pub fn seats(&self) -> &[SeatContent] {
        &self.seats
    }

    /// Iterate rows front to back; each row is left to right.
    pub fn rows(&self) -> std::slice::Chunks<'_, SeatContent> {
        self.seats.chunks(self.grid.cols)
    }

    /// Occupied seats with their positions, front to back.
    pub fn occupants(&self) -> impl Iterator<Item = (SeatPosition, &Occupant)> + '_ {
        self.seats.iter().enumerate().filter_map(move |(i, seat)| {
            let occupant = seat.occupant()?;
            Some((self.grid.position(i)?, occupant))
        })
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_empty()).count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.seats.len() - self.occupied_count()
    }

    /// Seat of the student with identifier `id`, if seated.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<SeatPosition> {
        self.occupants()
            .find(|(_, o)| o.id == id)
            .map(|(pos, _)| pos)
    }
}
