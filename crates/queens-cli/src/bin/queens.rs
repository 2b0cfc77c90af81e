//! Solves the N-Queens puzzle for one board size.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- 8
//! ```
//!
//! Print `(row, column)` pairs instead of board diagrams:
//!
//! ```sh
//! cargo run -- 8 --format coords
//! ```
//!
//! Print only the placement found by the search, with search statistics:
//!
//! ```sh
//! cargo run -- 8 --fundamental --stats
//! ```
//!
//! Set `RUST_LOG=debug` to trace the starting columns tried.

use std::time::Instant;

use clap::Parser;
use queens_cli::{OutputFormat, render_board, render_solutions, render_stats};
use queens_core::BoardSize;
use queens_solver::{QueensSolver, Solutions, symmetry};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size (1-64).
    #[arg(value_name = "SIZE")]
    size: BoardSize,

    /// Output format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Grid)]
    format: OutputFormat,

    /// Print only the placement found by the search, without its symmetries.
    #[arg(long)]
    fundamental: bool,

    /// Print search statistics.
    #[arg(long)]
    stats: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let solver = QueensSolver::new(args.size);

    let started = Instant::now();
    let (solutions, stats) = solver.search_with_stats();
    log::info!(
        "searched a {size}x{size} board in {elapsed:?}",
        size = args.size,
        elapsed = started.elapsed(),
    );

    if args.fundamental {
        print_fundamental(&solver, &solutions, args.format);
    } else {
        println!("{}", render_solutions(&solutions, args.format));
    }

    if args.stats {
        println!();
        print!("{}", render_stats(&stats));
        println!("  placements: {}", solutions.len());
    }
}

fn print_fundamental(solver: &QueensSolver, solutions: &Solutions, format: OutputFormat) {
    match solver.find_fundamental() {
        Some(board) => {
            debug_assert_eq!(&symmetry::generate_symmetry_solutions(&board), solutions);
            println!("{}", render_board(&board, format));
        }
        None => println!("{}", render_solutions(solutions, format)),
    }
}
