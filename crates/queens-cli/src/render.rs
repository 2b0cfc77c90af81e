use std::fmt::Write as _;

use queens_core::Chessboard;
use queens_solver::{SearchStats, Solutions};

/// How placements are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One board diagram per placement.
    #[default]
    Grid,
    /// One line of `(row, column)` pairs per placement.
    Coords,
}

/// Renders a single board.
#[must_use]
pub fn render_board(board: &Chessboard, format: OutputFormat) -> String {
    match format {
        OutputFormat::Grid => board.to_string(),
        OutputFormat::Coords => board.to_placement().to_string(),
    }
}

/// Renders every placement of a solution set.
///
/// An empty set renders as a single explanatory line.
#[must_use]
pub fn render_solutions(solutions: &Solutions, format: OutputFormat) -> String {
    if solutions.is_empty() {
        return format!("No placement exists for a {0}x{0} board.", solutions.size());
    }

    let separator = match format {
        OutputFormat::Grid => "\n\n",
        OutputFormat::Coords => "\n",
    };
    solutions
        .boards()
        .map(|board| render_board(&board, format))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Renders search statistics as an indented block.
#[must_use]
pub fn render_stats(stats: &SearchStats) -> String {
    let mut out = String::from("Stats:\n");
    let rows = [
        ("starting columns", stats.starting_columns()),
        ("nodes visited", stats.nodes_visited()),
        ("candidates checked", stats.candidates_checked()),
        ("dead ends", stats.dead_ends()),
        ("max depth", stats.max_depth()),
    ];
    for (name, value) in rows {
        let _ = writeln!(out, "  {name}: {value}");
    }
    out
}
