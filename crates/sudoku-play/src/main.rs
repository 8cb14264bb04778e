mod app;
mod game;
mod render;
mod theme;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use sudoku_engine::Difficulty;

/// Play Sudoku in the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Difficulty of the first puzzle: easy, medium, or hard.
    /// Anything else falls back to easy.
    #[arg(short, long, default_value = "easy")]
    difficulty: String,

    /// Seed for reproducible puzzles.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let difficulty = Difficulty::from_name(&args.difficulty);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, difficulty, args.seed);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, difficulty: Difficulty, seed: Option<u64>) -> io::Result<()> {
    let mut app = App::new(difficulty, seed);

    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }
            match app.handle_key(key) {
                AppAction::Continue => {}
                AppAction::Quit => break,
            }
        }
    }

    Ok(())
}
