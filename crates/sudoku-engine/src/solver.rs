use crate::Grid;

/// Backtracking Sudoku solver.
///
/// The search is a plain depth-first scan: find the first empty cell in
/// row-major order, try digits 1 through 9 ascending, recurse, and undo on
/// failure. The first completion found wins. There is no candidate ordering
/// heuristic and no constraint propagation; the boards this engine handles
/// are small enough that the simple search is the right trade, and callers
/// rely on its fixed exploration order (see [`crate::Generator`]).
///
/// The solver holds no state between calls and never performs I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Complete `grid` in place, returning `true` on success.
    ///
    /// On failure every speculative placement made by this call has been
    /// undone, so the grid is left exactly as passed in. "No completion
    /// exists" is an ordinary outcome, not an error; a grid whose fixed
    /// cells already contradict each other simply reports `false`. A grid
    /// with no empty cells is accepted as-is.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        for digit in 1..=9 {
            if grid.fits(pos, digit) {
                grid.set(pos, digit);
                if self.solve_in_place(grid) {
                    return true;
                }
                grid.set(pos, 0);
            }
        }
        false
    }

    /// Solve a copy of `grid`, returning the completed grid if one exists.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = *grid;
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_solves_empty_grid() {
        let solver = Solver::new();
        let mut grid = Grid::empty();
        assert!(solver.solve_in_place(&mut grid));
        assert!(grid.is_solved());
    }

    #[test]
    fn test_empty_grid_solution_is_deterministic() {
        let solver = Solver::new();
        let mut first = Grid::empty();
        let mut second = Grid::empty();
        assert!(solver.solve_in_place(&mut first));
        assert!(solver.solve_in_place(&mut second));
        assert_eq!(first, second);

        // Fixed exploration order fills the first row with 1..9.
        for col in 0..9 {
            assert_eq!(first.get(Position::new(0, col)), col as u8 + 1);
        }
    }

    #[test]
    fn test_solves_partial_grid_keeping_givens() {
        let puzzle = Grid::from_string(
            "53..7....\
             6..195...\
             .98....6.\
             8...6...3\
             4..8.3..1\
             7...2...6\
             .6....28.\
             ...419..5\
             ....8..79",
        )
        .unwrap();

        let solver = Solver::new();
        let solved = solver.solve(&puzzle).unwrap();
        assert!(solved.is_solved());
        for pos in Position::all() {
            if !puzzle.is_empty(pos) {
                assert_eq!(solved.get(pos), puzzle.get(pos));
            }
        }
    }

    #[test]
    fn test_contradictory_grid_fails_and_is_restored() {
        // Row 0 holds 1 twice and is missing 8; column 8 already has 8 and
        // 9, so the one empty cell in row 0 has no candidate at all.
        let grid = Grid::from_string(
            "12345671.\
             ........8\
             ........9\
             .........\
             .........\
             .........\
             .........\
             .........\
             .........",
        )
        .unwrap();

        let mut working = grid;
        let solver = Solver::new();
        assert!(!solver.solve_in_place(&mut working));
        assert_eq!(working, grid);
        assert!(solver.solve(&grid).is_none());
    }

    #[test]
    fn test_solve_does_not_touch_input() {
        let puzzle = Grid::from_string(&format!("12345678.{}", ".".repeat(72))).unwrap();
        let copy = puzzle;
        let _ = Solver::new().solve(&puzzle);
        assert_eq!(puzzle, copy);
    }
}
