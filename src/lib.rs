//! Sliding Puzzle Solver Library
//!
//! A* search for N×N sliding-tile puzzles (the 8-puzzle by default) with
//! interchangeable admissible heuristics, plus the tooling to compare them.

pub mod benchmark;
pub mod board;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod render;
pub mod solvability;
pub mod solver;

use board::Board;
use error::{PuzzleError, Result};
use heuristic::Heuristic;
use solver::{Outcome, SearchOptions, SearchResult};

/// Solves `start` towards `goal`, refusing unsolvable inputs before searching.
///
/// Unlike `solver::search_with`, an unsuccessful search is reported as an
/// error rather than an empty path.
pub fn solve_puzzle<H: Heuristic + ?Sized>(
    start: &Board,
    goal: &Board,
    heuristic: &H,
    options: &SearchOptions,
) -> Result<SearchResult> {
    if start.dim() != goal.dim() {
        return Err(PuzzleError::DimensionMismatch {
            start: start.dim(),
            goal: goal.dim(),
        });
    }
    if !solvability::is_solvable_towards(start, goal) {
        return Err(PuzzleError::Unsolvable);
    }

    let result = solver::search_with(start, goal, heuristic, options);
    match result.outcome {
        Outcome::Solved => Ok(result),
        Outcome::Exhausted => Err(PuzzleError::NoSolution {
            expanded: result.expanded_count,
        }),
        Outcome::LimitReached => Err(PuzzleError::LimitReached {
            expanded: result.expanded_count,
        }),
    }
}
