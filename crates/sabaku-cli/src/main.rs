//! Command-line Sudoku solver.
//!
//! Each positional argument is one puzzle: 81 cells, digits `1`-`9` for
//! clues and any other character (typically `.`) for blanks, whitespace
//! ignored. With no
//! arguments, puzzles are read from stdin, one per line; blank lines and
//! `#` comment lines are skipped.
//!
//! ```sh
//! sabaku "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! cat puzzles.txt | sabaku --line
//! ```
//!
//! Exits nonzero if any puzzle was malformed or unsolvable. Set
//! `RUST_LOG=debug` (or `trace`) to watch the search branch, or the
//! propagator work, respectively.

use std::{
    io::{self, BufRead as _},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use log::info;

#[derive(Debug, Parser)]
#[command(name = "sabaku", version, about)]
struct Args {
    /// Puzzles as 81-cell clue strings; read from stdin when absent.
    #[arg(value_name = "PUZZLE")]
    puzzles: Vec<String>,

    /// Print each solution as an 81-character line instead of a boxed grid.
    #[arg(long)]
    line: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let puzzles = if args.puzzles.is_empty() {
        match read_stdin_puzzles() {
            Ok(puzzles) => puzzles,
            Err(err) => {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.puzzles
    };

    let mut failed = false;
    for puzzle in &puzzles {
        let start = Instant::now();
        match sabaku_solver::solve(puzzle) {
            Ok(solution) => {
                info!("solved in {:?}", start.elapsed());
                if args.line {
                    println!("{}", solution.to_line());
                } else {
                    print!("{solution}");
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_stdin_puzzles() -> io::Result<Vec<String>> {
    let mut puzzles = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        puzzles.push(trimmed.to_owned());
    }
    Ok(puzzles)
}
