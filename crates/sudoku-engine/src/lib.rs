//! Sudoku engine: generation, solving, and solution checking.
//!
//! The engine works on plain in-memory grids and knows nothing about any
//! display surface. A front-end drives it through three operations:
//!
//! - [`Generator::generate`] produces a [`Session`] holding a puzzle and
//!   its retained solution,
//! - [`Solver::solve_in_place`] completes a partially filled [`Grid`] or
//!   reports that no completion exists,
//! - [`verify`] compares a player's grid against the retained solution and
//!   lists the mismatched cells.
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator, Solver};
//!
//! let mut generator = Generator::new();
//! let session = generator.generate(Difficulty::Easy);
//! assert_eq!(session.puzzle().filled_count(), 61);
//!
//! let mut board = *session.puzzle();
//! assert!(Solver::new().solve_in_place(&mut board));
//! assert!(board.is_solved());
//! ```

mod generator;
mod grid;
mod session;
mod solver;
mod verify;

pub use generator::{Difficulty, Generator};
pub use grid::{Grid, Position, SIZE};
pub use session::Session;
pub use solver::Solver;
pub use verify::{verify, VerifyReport};
