use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use sudoku_engine::Position;

const GRID_WIDTH: u16 = 37;
const GRID_HEIGHT: u16 = 19;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, _term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;
    execute!(stdout, SetBackgroundColor(app.theme.bg))?;

    let start_x = if term_width > GRID_WIDTH {
        (term_width - GRID_WIDTH) / 2
    } else {
        0
    };
    let start_y = 1;

    render_grid(stdout, app, start_x, start_y)?;
    render_status(stdout, app, start_x, start_y + GRID_HEIGHT + 1)?;
    render_controls(stdout, app, start_x, start_y + GRID_HEIGHT + 3)?;

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    // Each cell is 3 chars wide; thick separators at the 3x3 boundaries.
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.box_border),
        Print("+===+===+===+===+===+===+===+===+===+")
    )?;

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 * 2;
        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9 {
            if col % 3 == 0 {
                execute!(stdout, SetForegroundColor(theme.box_border), Print("║"))?;
            } else {
                execute!(stdout, SetForegroundColor(theme.border), Print("│"))?;
            }
            render_cell(stdout, app, Position::new(row, col))?;
        }
        execute!(stdout, SetForegroundColor(theme.box_border), Print("║"))?;

        let sep_y = cell_y + 1;
        execute!(stdout, MoveTo(x, sep_y))?;
        if (row + 1) % 3 == 0 {
            execute!(
                stdout,
                SetForegroundColor(theme.box_border),
                Print("+===+===+===+===+===+===+===+===+===+")
            )?;
        } else {
            execute!(
                stdout,
                SetForegroundColor(theme.border),
                Print("+---+---+---+---+---+---+---+---+---+")
            )?;
        }
    }

    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let value = app.game.board().get(pos);

    let fg = if app.errors.contains(&pos) {
        theme.error
    } else if app.game.is_given(pos) {
        theme.given
    } else {
        theme.filled
    };
    let bg = if pos == app.cursor {
        theme.selected_bg
    } else {
        theme.bg
    };

    let ch = match value {
        0 => '.',
        v => (b'0' + v) as char,
    };

    execute!(
        stdout,
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(format!(" {} ", ch)),
        SetBackgroundColor(theme.bg)
    )?;
    Ok(())
}

fn render_status(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print(format!(
            "Difficulty: {}   Filled: {}/81",
            app.difficulty,
            app.game.board().filled_count()
        ))
    )?;

    if let Some(ref msg) = app.message {
        let color = if app.game.is_won() {
            theme.success
        } else {
            theme.info
        };
        execute!(
            stdout,
            MoveTo(x, y + 1),
            SetForegroundColor(color),
            Print(msg)
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let lines = [
        "arrows/hjkl move   1-9 enter   0/space erase",
        "n new   d difficulty   s solve   c clear   enter check   q quit",
    ];

    for (i, line) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + i as u16),
            SetForegroundColor(theme.key),
            Print(line)
        )?;
    }
    Ok(())
}
