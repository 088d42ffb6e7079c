//! Data types for rosters and seating plans.

mod grid;
mod occupant;

pub use grid::*;
pub use occupant::*;
