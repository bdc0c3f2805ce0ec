//! Human-readable output for boards and search results.

use std::fmt::Write;

use crate::board::{Board, BLANK};
use crate::solver::SearchResult;

/// Formats a board with one line per row.
///
/// Tiles are right-aligned to the widest tile number. The blank shows as '.'.
pub fn format_board(board: &Board) -> String {
    let largest = board.tiles().len().saturating_sub(1);
    let width = largest.to_string().len();

    let mut output = String::new();
    for row in board.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&tile| {
                if tile == BLANK {
                    format!("{:>width$}", '.')
                } else {
                    format!("{tile:>width$}")
                }
            })
            .collect();
        output.push_str(&cells.join(" "));
        output.push('\n');
    }
    output
}

/// Formats every step of a solved path, starting from the initial board.
///
/// Unsolved results render as a single line saying so.
pub fn format_path(result: &SearchResult) -> String {
    let Some((start, steps)) = result.path.split_first() else {
        return format!(
            "No solution found ({} nodes expanded)\n",
            result.expanded_count
        );
    };

    let mut output = String::from("Initial State:\n");
    output.push_str(&format_board(start));

    for (index, (board, movement)) in steps.iter().zip(result.moves()).enumerate() {
        // writing to a String cannot fail
        let _ = writeln!(output, "\nMove {} ({}):", index + 1, movement);
        output.push_str(&format_board(board));
    }

    output
}

/// The per-heuristic statistics lines.
pub fn format_summary(heuristic: &str, result: &SearchResult) -> String {
    format!(
        "Moves to solve using {heuristic} heuristic: {}\n\
         Expanded Nodes to solve using {heuristic} heuristic: {}\n",
        result.move_count, result.expanded_count
    )
}
