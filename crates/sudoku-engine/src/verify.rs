use crate::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Outcome of checking a player's grid against the retained solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// True when every cell matches the solution.
    pub ok: bool,
    /// Positions whose value differs from the solution, in row-major order.
    /// An empty cell always mismatches, since the solution has none.
    pub mismatches: Vec<Position>,
}

/// Compare `current` against `solution` cell by cell. Neither grid is
/// mutated; correctness means matching the retained solution, not matching
/// any valid completion.
pub fn verify(current: &Grid, solution: &Grid) -> VerifyReport {
    let mismatches: Vec<Position> = Position::all()
        .filter(|&pos| current.get(pos) != solution.get(pos))
        .collect();
    VerifyReport {
        ok: mismatches.is_empty(),
        mismatches,
    }
}
