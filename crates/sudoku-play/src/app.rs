use crate::game::Game;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use sudoku_engine::{Difficulty, Generator, Position};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    /// Current game
    pub game: Game,
    /// Currently selected cell
    pub cursor: Position,
    /// Difficulty used for the next generated puzzle
    pub difficulty: Difficulty,
    /// Cells flagged by the last check, cleared as they are edited
    pub errors: Vec<Position>,
    /// Message to display in the status line
    pub message: Option<String>,
    /// Color theme
    pub theme: Theme,
    generator: Generator,
}

impl App {
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let mut generator = match seed {
            Some(seed) => Generator::with_seed(seed),
            None => Generator::new(),
        };
        let game = Game::new(generator.generate(difficulty));
        Self {
            game,
            cursor: Position::new(4, 4),
            difficulty,
            errors: Vec::new(),
            message: None,
            theme: Theme::dark(),
            generator,
        }
    }

    fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
    }

    /// Handle a key press. Only digit keys ever reach the engine as values,
    /// so the grid never sees out-of-range input.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            // Cursor movement
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Digit entry
            KeyCode::Char(c @ '1'..='9') => {
                if self.game.set_value(self.cursor, c as u8 - b'0') {
                    self.clear_error_at(self.cursor);
                } else {
                    self.show_message("That cell is part of the puzzle");
                }
            }

            // Empty a cell
            KeyCode::Char('0') | KeyCode::Char(' ') | KeyCode::Backspace | KeyCode::Delete => {
                if self.game.clear_cell(self.cursor) {
                    self.clear_error_at(self.cursor);
                } else if self.game.is_given(self.cursor) {
                    self.show_message("That cell is part of the puzzle");
                }
            }

            // New puzzle at the selected difficulty
            KeyCode::Char('n') => {
                self.game = Game::new(self.generator.generate(self.difficulty));
                self.errors.clear();
                self.show_message(&format!("New {} puzzle", self.difficulty));
            }

            // Cycle the difficulty selector
            KeyCode::Char('d') => {
                self.difficulty = self.difficulty.next();
                self.show_message(&format!("Difficulty: {} (press n for a new puzzle)", self.difficulty));
            }

            // Auto-solve the current board
            KeyCode::Char('s') => {
                if self.game.solve() {
                    self.errors.clear();
                    self.show_message("Solved");
                } else {
                    self.show_message("No completion exists for the current entries");
                }
            }

            // Clear user entries back to the puzzle
            KeyCode::Char('c') => {
                self.game.clear_entries();
                self.errors.clear();
                self.show_message("Cleared entries");
            }

            // Check against the retained solution
            KeyCode::Enter | KeyCode::Char('v') => {
                let report = self.game.check();
                self.errors = report.mismatches;
                if report.ok {
                    self.show_message("The solution is correct!");
                } else {
                    self.show_message(&format!("{} cells are wrong or empty", self.errors.len()));
                }
            }

            _ => {}
        }

        AppAction::Continue
    }

    fn move_cursor(&mut self, drow: isize, dcol: isize) {
        let row = self.cursor.row as isize + drow;
        let col = self.cursor.col as isize + dcol;
        if (0..9).contains(&row) && (0..9).contains(&col) {
            self.cursor = Position::new(row as usize, col as usize);
        }
    }

    fn clear_error_at(&mut self, pos: Position) {
        self.errors.retain(|&p| p != pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Difficulty::Easy, Some(42))
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = app();
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Up));
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.cursor, Position::new(0, 0));
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.cursor, Position::new(8, 8));
    }

    #[test]
    fn test_digit_entry_on_open_cell() {
        let mut app = app();
        app.cursor = Position::all().find(|&p| !app.game.is_given(p)).unwrap();
        app.handle_key(key(KeyCode::Char('7')));
        assert_eq!(app.game.board().get(app.cursor), 7);
        app.handle_key(key(KeyCode::Backspace));
        assert!(app.game.board().is_empty(app.cursor));
    }

    #[test]
    fn test_check_flags_empty_cells_and_edit_unflags() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.errors.len(), Difficulty::Easy.removals());

        let pos = app.errors[0];
        app.cursor = pos;
        app.handle_key(key(KeyCode::Char('1')));
        assert!(!app.errors.contains(&pos));
    }

    #[test]
    fn test_solve_fills_the_board() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.game.board().is_solved());
        // The auto-solved board is a valid completion but not necessarily
        // the retained solution, so no assertion on the check outcome here.
    }

    #[test]
    fn test_difficulty_cycles_without_new_game() {
        let mut app = app();
        let filled = app.game.board().filled_count();
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.difficulty, Difficulty::Medium);
        assert_eq!(app.game.board().filled_count(), filled);

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(
            app.game.board().filled_count(),
            81 - Difficulty::Medium.removals()
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(matches!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit));
        assert!(matches!(app.handle_key(key(KeyCode::Esc)), AppAction::Quit));
    }
}
