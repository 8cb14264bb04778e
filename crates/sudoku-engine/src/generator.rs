use crate::{Grid, Position, Session, Solver, SIZE};
use serde::{Deserialize, Serialize};

/// Difficulty of a generated puzzle, measured purely by how many cells are
/// removed from the solved grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// How many cells are cleared from the solution at this difficulty.
    pub fn removals(self) -> usize {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 40,
            Difficulty::Hard => 60,
        }
    }

    /// Parse a difficulty name, case-insensitively. Unrecognized names fall
    /// back to the default, which is the rule for free-form input at the
    /// presentation boundary.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::default(),
        }
    }

    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// The next difficulty, wrapping around. Used by front-ends to cycle a
    /// selector.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Sudoku puzzle generator.
///
/// Generation solves the all-empty grid to obtain a complete solution, then
/// clears a difficulty-determined number of cells at random positions. The
/// solver's fixed exploration order means the base solution is the same
/// every run; variety comes from which cells are removed.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// A generator with a fixed seed, for reproducible puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Produce a fresh puzzle and its retained solution. Never fails: the
    /// empty grid always admits a completion.
    pub fn generate(&mut self, difficulty: Difficulty) -> Session {
        let mut solution = Grid::empty();
        let completed = Solver::new().solve_in_place(&mut solution);
        debug_assert!(completed);

        let mut puzzle = solution;
        self.remove_cells(&mut puzzle, difficulty.removals());
        Session::new(puzzle, solution, difficulty)
    }

    /// Clear `count` occupied cells at uniformly random positions. Draws
    /// that land on an already-empty cell are simply retried; with removal
    /// counts well below 81 this terminates quickly in practice.
    fn remove_cells(&mut self, grid: &mut Grid, mut count: usize) {
        while count > 0 {
            let pos = Position::new(self.rng.next_usize(SIZE), self.rng.next_usize(SIZE));
            if !grid.is_empty(pos) {
                grid.set(pos, 0);
                count -= 1;
            }
        }
    }
}

/// Small PCG-style PRNG so the engine does not need the full `rand` stack.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still yields distinct streams.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_counts_per_difficulty() {
        let mut generator = Generator::with_seed(42);
        for &difficulty in Difficulty::all() {
            let session = generator.generate(difficulty);
            assert_eq!(
                session.puzzle().filled_count(),
                81 - difficulty.removals(),
                "wrong cell count for {}",
                difficulty
            );
        }
    }

    #[test]
    fn test_solution_is_complete_and_valid() {
        let mut generator = Generator::with_seed(42);
        let session = generator.generate(Difficulty::Easy);
        assert_eq!(session.solution().empty_count(), 0);
        assert!(session.solution().is_solved());
    }

    #[test]
    fn test_puzzle_is_consistent_with_solution() {
        let mut generator = Generator::with_seed(7);
        let session = generator.generate(Difficulty::Hard);
        for pos in Position::all() {
            let v = session.puzzle().get(pos);
            if v != 0 {
                assert_eq!(v, session.solution().get(pos));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::with_seed(42).generate(Difficulty::Medium);
        let b = Generator::with_seed(42).generate(Difficulty::Medium);
        assert_eq!(a.puzzle(), b.puzzle());

        let c = Generator::with_seed(43).generate(Difficulty::Medium);
        assert_ne!(a.puzzle(), c.puzzle());
    }

    #[test]
    fn test_base_solution_does_not_depend_on_seed() {
        let a = Generator::with_seed(1).generate(Difficulty::Easy);
        let b = Generator::with_seed(2).generate(Difficulty::Hard);
        assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn test_from_name_defaults_unrecognized() {
        assert_eq!(Difficulty::from_name("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("fiendish"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(""), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_cycle_wraps() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }
}
