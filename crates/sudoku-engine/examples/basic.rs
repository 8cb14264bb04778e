//! Generate a puzzle, auto-solve it, and check the result.

use sudoku_engine::{Difficulty, Generator, Solver};

fn main() {
    let mut generator = Generator::new();
    let session = generator.generate(Difficulty::Medium);

    println!("Generated {} puzzle:", session.difficulty());
    println!("{}", session.puzzle());
    println!("Filled cells: {}", session.puzzle().filled_count());
    println!("Empty cells: {}\n", session.puzzle().empty_count());

    let solver = Solver::new();
    match solver.solve(session.puzzle()) {
        Some(completed) => {
            println!("Completed grid:");
            println!("{}", completed);

            // The puzzle may admit more than one completion; the check is
            // against the retained solution, not any valid grid.
            let report = session.check(&completed);
            println!(
                "Matches the retained solution: {} ({} mismatched cells)",
                report.ok,
                report.mismatches.len()
            );
        }
        None => println!("No completion exists (unexpected for a generated puzzle)"),
    }
}
