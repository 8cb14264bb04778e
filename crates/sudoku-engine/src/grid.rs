use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 9;

/// A cell coordinate on the 9x9 board, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// Index of the 3x3 box containing this cell (0..9, row-major).
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE * SIZE).map(|i| Position::new(i / SIZE, i % SIZE))
    }
}

/// A 9x9 Sudoku board. Each cell holds a digit 1-9, or 0 for empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// An all-empty board.
    pub fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set a cell to a digit 1-9, or 0 to empty it.
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9);
        self.cells[pos.row][pos.col] = value;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// The first empty cell in row-major scan order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.is_empty(pos))
    }

    pub fn filled_count(&self) -> usize {
        Position::all().filter(|&pos| !self.is_empty(pos)).count()
    }

    pub fn empty_count(&self) -> usize {
        SIZE * SIZE - self.filled_count()
    }

    /// Whether `digit` can be placed at `pos` without repeating in the cell's
    /// row, column, or 3x3 box. The cell itself is expected to be empty; a
    /// cell already holding `digit` would reject it.
    pub fn fits(&self, pos: Position, digit: u8) -> bool {
        let (row, col) = (pos.row, pos.col);
        for x in 0..SIZE {
            if self.cells[row][x] == digit
                || self.cells[x][col] == digit
                || self.cells[3 * (row / 3) + x / 3][3 * (col / 3) + x % 3] == digit
            {
                return false;
            }
        }
        true
    }

    /// Whether the board is completely filled and every row, column, and box
    /// holds each digit 1-9 exactly once.
    pub fn is_solved(&self) -> bool {
        fn unit_ok(unit: [u8; SIZE]) -> bool {
            let mut seen = [false; SIZE + 1];
            for v in unit {
                if v == 0 || seen[v as usize] {
                    return false;
                }
                seen[v as usize] = true;
            }
            true
        }

        for i in 0..SIZE {
            let row = self.cells[i];
            let mut col = [0u8; SIZE];
            let mut boxed = [0u8; SIZE];
            let (box_row, box_col) = (3 * (i / 3), 3 * (i % 3));
            for x in 0..SIZE {
                col[x] = self.cells[x][i];
                boxed[x] = self.cells[box_row + x / 3][box_col + x % 3];
            }
            if !unit_ok(row) || !unit_ok(col) || !unit_ok(boxed) {
                return false;
            }
        }
        true
    }

    /// Parse a board from 81 characters, row-major. `1`-`9` are digits,
    /// `0` and `.` are empty; whitespace is ignored.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut positions = Position::all();
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let pos = positions.next()?;
            match c {
                '0' | '.' => {}
                '1'..='9' => grid.set(pos, c as u8 - b'0'),
                _ => return None,
            }
        }
        if positions.next().is_some() {
            return None;
        }
        Some(grid)
    }

    /// The 81-character form accepted by [`Grid::from_string`], with `.` for
    /// empty cells.
    pub fn to_string_compact(&self) -> String {
        Position::all()
            .map(|pos| match self.get(pos) {
                0 => '.',
                v => (b'0' + v) as char,
            })
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            if row % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for col in 0..SIZE {
                if col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}
