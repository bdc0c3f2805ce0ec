//! Parity test deciding whether a board can reach a goal.
//!
//! Every move either keeps the blank in its row (inversions unchanged) or
//! moves it across `dim - 1` tiles. On odd boards that preserves inversion
//! parity; on even boards it flips inversion parity and the blank's row
//! together. So a board reaches a goal iff their parity values agree.

use crate::board::{Board, BLANK};

/// Binary indexed tree over tile values, counting tiles seen so far.
struct FenwickTree {
    tree: Vec<usize>,
}

impl FenwickTree {
    fn new(size: usize) -> Self {
        Self {
            tree: vec![0; size + 1],
        }
    }

    /// Adds `value` at 1-based `index`.
    fn add(&mut self, mut index: usize, value: usize) {
        while index < self.tree.len() {
            self.tree[index] += value;
            index += index & index.wrapping_neg();
        }
    }

    /// Sum over 1-based indices `1..=index`.
    fn prefix_sum(&self, mut index: usize) -> usize {
        let mut sum = 0;
        while index > 0 {
            sum += self.tree[index];
            index -= index & index.wrapping_neg();
        }
        sum
    }
}

/// Counts pairs of non-blank tiles that appear in the wrong relative order.
///
/// Walks the tiles from the end, so each query returns how many smaller tiles
/// follow the current one.
pub fn count_inversions(board: &Board) -> usize {
    let largest = board.tiles().len().saturating_sub(1);
    let mut seen = FenwickTree::new(largest);
    let mut inversions = 0;

    for &tile in board.tiles().iter().rev().filter(|&&t| t != BLANK) {
        let tile = tile as usize;
        inversions += seen.prefix_sum(tile - 1);
        seen.add(tile, 1);
    }

    inversions
}

/// Invariant of a board under legal moves: 0 or 1.
fn parity(board: &Board) -> usize {
    let inversions = count_inversions(board);
    if board.dim() % 2 == 1 {
        inversions % 2
    } else {
        let (blank_row, _) = board.blank();
        (inversions + blank_row) % 2
    }
}

/// Whether `board` can reach the conventional goal (`Board::goal`).
///
/// Odd sides: solvable iff the inversion count is even. Even sides: solvable
/// iff inversions plus the blank's row (0-indexed from the top) is odd.
pub fn is_solvable(board: &Board) -> bool {
    if board.dim() % 2 == 1 {
        parity(board) == 0
    } else {
        parity(board) == 1
    }
}

/// Whether `board` can reach an arbitrary `goal` of the same size.
pub fn is_solvable_towards(board: &Board, goal: &Board) -> bool {
    board.dim() == goal.dim() && parity(board) == parity(goal)
}
