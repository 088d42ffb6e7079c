//! Seat assignment: capacity check, roster shuffle and front-loaded placement.
//!
//! The three steps are pure functions of their inputs. [`assign`] composes
//! them in the only valid order and stops at the capacity check, so no grid
//! exists for a roster that does not fit.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SeatchartError};
use crate::types::{Grid, Roster, SeatContent, SeatGrid};

/// Check that every student on `roster` has a seat in `grid`.
///
/// # Errors
/// [`SeatchartError::Capacity`] when the roster is larger than the grid.
pub fn validate_capacity(roster: &Roster, grid: Grid) -> Result<()> {
    let requested = roster.len();
    let available = grid.capacity();
    if requested > available {
        return Err(SeatchartError::Capacity {
            requested,
            available,
        });
    }
    Ok(())
}

/// Permute the whole roster with `rng` (Fisher-Yates).
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(mut roster: Roster, rng: &mut R) -> Roster {
    roster.as_mut_slice().shuffle(rng);
    roster
}

/// Permute the roster, reproducibly when `seed` is given.
///
/// A seed drives a ChaCha8 stream, which does not depend on the platform,
/// so the same roster and seed give the same order on any machine built
/// against the same `rand` 0.9 / `rand_chacha` 0.9 release line. A major
/// `rand` upgrade may change how shuffles consume the stream; the pinned
/// orders in the assignment tests catch that.
/// Without a seed the order comes from the OS-seeded thread generator.
#[must_use]
pub fn shuffle_seeded(roster: Roster, seed: Option<u64>) -> Roster {
    let roster = match seed {
        Some(seed) => shuffle(roster, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => shuffle(roster, &mut rand::rng()),
    };
    match seed {
        Some(seed) => tracing::info!(seed, "Student order randomized"),
        None => tracing::info!("Student order randomized without a seed"),
    }
    roster
}

/// Fill seats row by row, left to right, leaving only trailing seats empty.
///
/// Callers are expected to have run [`validate_capacity`]; students beyond
/// the last seat are left out rather than panicking.
#[must_use]
pub fn place(roster: Roster, grid: Grid) -> SeatGrid {
    let capacity = grid.capacity();
    if roster.len() > capacity {
        tracing::warn!(
            students = roster.len(),
            seats = capacity,
            "More students than seats; surplus students were not placed"
        );
    }

    let seats: Vec<SeatContent> = roster
        .into_iter()
        .take(capacity)
        .map(SeatContent::Occupied)
        .collect();
    SeatGrid::from_seats(grid, seats)
}

/// Validate, shuffle and place in one call.
///
/// # Errors
/// [`SeatchartError::Capacity`] when the roster does not fit; nothing is
/// shuffled or placed in that case.
pub fn assign(roster: Roster, grid: Grid, seed: Option<u64>) -> Result<SeatGrid> {
    validate_capacity(&roster, grid)?;
    let seats = place(shuffle_seeded(roster, seed), grid);
    tracing::info!(
        seated = seats.occupied_count(),
        empty = seats.empty_count(),
        "Students seated"
    );
    Ok(seats)
}
