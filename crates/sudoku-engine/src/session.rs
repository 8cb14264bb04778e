use crate::{verify, Difficulty, Grid, Position, VerifyReport};
use serde::{Deserialize, Serialize};

/// One puzzle's state: the grid handed to the player and the retained
/// solution it was cut from.
///
/// A session is owned by a single caller and replaced wholesale when a new
/// puzzle is generated; nothing in the engine shares it. Callers normally
/// obtain one from [`crate::Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    puzzle: Grid,
    solution: Grid,
    difficulty: Difficulty,
}

impl Session {
    pub fn new(puzzle: Grid, solution: Grid, difficulty: Difficulty) -> Self {
        Self {
            puzzle,
            solution,
            difficulty,
        }
    }

    /// The puzzle as generated, with removed cells empty.
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// The full solution the puzzle was derived from. Not shown to the
    /// player; used for checking.
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether `pos` was part of the original puzzle. Given cells are the
    /// ones a front-end must not let the player edit.
    pub fn is_given(&self, pos: Position) -> bool {
        !self.puzzle.is_empty(pos)
    }

    /// Compare a player's grid against the retained solution.
    pub fn check(&self, current: &Grid) -> VerifyReport {
        verify(current, &self.solution)
    }
}
