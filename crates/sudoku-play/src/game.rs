use sudoku_engine::{Difficulty, Grid, Position, Session, Solver, VerifyReport};

/// One puzzle in play: the engine session plus the player's working grid.
pub struct Game {
    session: Session,
    board: Grid,
}

impl Game {
    pub fn new(session: Session) -> Self {
        let board = *session.puzzle();
        Self { session, board }
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty()
    }

    /// Whether `pos` is part of the original puzzle and therefore locked.
    pub fn is_given(&self, pos: Position) -> bool {
        self.session.is_given(pos)
    }

    /// Enter a digit 1-9. Refused on given cells.
    pub fn set_value(&mut self, pos: Position, digit: u8) -> bool {
        if self.is_given(pos) || !(1..=9).contains(&digit) {
            return false;
        }
        self.board.set(pos, digit);
        true
    }

    /// Empty a cell the player filled. Refused on given cells.
    pub fn clear_cell(&mut self, pos: Position) -> bool {
        if self.is_given(pos) || self.board.is_empty(pos) {
            return false;
        }
        self.board.set(pos, 0);
        true
    }

    /// Reset every player entry, leaving the puzzle's given cells.
    pub fn clear_entries(&mut self) {
        self.board = *self.session.puzzle();
    }

    /// Auto-complete the current board in place. Returns false when the
    /// player's entries admit no completion; the board is left untouched in
    /// that case.
    pub fn solve(&mut self) -> bool {
        Solver::new().solve_in_place(&mut self.board)
    }

    /// Compare the current board against the retained solution.
    pub fn check(&self) -> VerifyReport {
        self.session.check(&self.board)
    }

    /// Whether the board is fully filled and matches the solution.
    pub fn is_won(&self) -> bool {
        self.check().ok
    }
}
