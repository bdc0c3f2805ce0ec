//! Admissible distance estimates used to order the A* frontier.

use std::fmt;

use crate::board::{idx_to_coord, Board, BLANK};

/// A stateless estimate of the moves remaining from `board` to `goal`.
///
/// Implementations must never overestimate, or A* may return a longer path
/// than necessary.
pub trait Heuristic {
    /// Human-readable name used in reports.
    fn name(&self) -> &'static str;

    fn estimate(&self, board: &Board, goal: &Board) -> u32;
}

/// Sum over all tiles of the row and column distance to their goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn name(&self) -> &'static str {
        "Manhattan Distance"
    }

    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        let dim = board.dim();

        // goal_cell[tile] = index of `tile` in the goal
        let mut goal_cell = vec![0usize; goal.tiles().len()];
        for (cell, &tile) in goal.tiles().iter().enumerate() {
            goal_cell[tile as usize] = cell;
        }

        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(cell, &tile)| {
                let (row, col) = idx_to_coord(dim, cell);
                let (goal_row, goal_col) = idx_to_coord(dim, goal_cell[tile as usize]);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// Number of cells whose content differs from the goal, blank included.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn name(&self) -> &'static str {
        "Misplaced Tiles"
    }

    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .zip(goal.tiles())
            .filter(|(tile, target)| tile != target)
            .count() as u32
    }
}

/// Selects one of the built-in heuristics at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum HeuristicKind {
    Manhattan,
    Misplaced,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::Manhattan, HeuristicKind::Misplaced];
}

impl Heuristic for HeuristicKind {
    fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => ManhattanDistance.name(),
            HeuristicKind::Misplaced => MisplacedTiles.name(),
        }
    }

    #[inline]
    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        match self {
            HeuristicKind::Manhattan => ManhattanDistance.estimate(board, goal),
            HeuristicKind::Misplaced => MisplacedTiles.estimate(board, goal),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
