//! Blank-tile moves and successor generation.
//!
//! A move is named by the direction the blank travels. Successors are always
//! produced in the order of `MOVES` (right, left, down, up) so that frontier
//! tie-breaking, and therefore every search statistic, is deterministic.

use std::fmt;

use crate::board::Board;

/// Direction in which the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Right,
    Left,
    Down,
    Up,
}

/// All moves in successor-generation order.
pub const MOVES: [Move; 4] = [Move::Right, Move::Left, Move::Down, Move::Up];

impl Move {
    /// Row and column displacement of the blank.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Move::Right => (0, 1),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Up => (-1, 0),
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Self {
        match self {
            Move::Right => Move::Left,
            Move::Left => Move::Right,
            Move::Down => Move::Up,
            Move::Up => Move::Down,
        }
    }

    /// Infers the move that turns `from` into `to`, if they differ by one move.
    pub fn between(from: &Board, to: &Board) -> Option<Self> {
        MOVES
            .into_iter()
            .find(|&candidate| from.apply(candidate).as_ref() == Some(to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Right => "Right",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Up => "Up",
        };
        f.write_str(name)
    }
}

impl Board {
    /// Slides the blank one cell in the given direction.
    ///
    /// Returns `None` if the blank would leave the board.
    pub fn apply(&self, movement: Move) -> Option<Board> {
        let dim = self.dim();
        let (row, col) = self.blank();
        let (d_row, d_col) = movement.offset();

        let target_row = row.checked_add_signed(d_row).filter(|&r| r < dim)?;
        let target_col = col.checked_add_signed(d_col).filter(|&c| c < dim)?;

        Some(self.swapped((row, col), (target_row, target_col)))
    }
}

/// Generates every board reachable in one move, in `MOVES` order.
///
/// Corners yield two successors, edges three and interior cells four.
pub fn neighbors(board: &Board) -> Vec<Board> {
    MOVES
        .into_iter()
        .filter_map(|movement| board.apply(movement))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_board;

    #[test]
    fn test_corner_has_two_neighbors_in_order() {
        let goal = Board::goal(3).unwrap();
        let successors = neighbors(&goal);
        assert_eq!(
            successors,
            vec![
                parse_board("1 2 3 4 5 6 7 0 8").unwrap(),
                parse_board("1 2 3 4 5 0 7 8 6").unwrap(),
            ]
        );
    }

    #[test]
    fn test_edge_has_three_neighbors() {
        let board = parse_board("1 2 3 5 6 0 7 8 4").unwrap();
        let successors = neighbors(&board);
        assert_eq!(
            successors,
            vec![
                parse_board("1 2 3 5 0 6 7 8 4").unwrap(),
                parse_board("1 2 3 5 6 4 7 8 0").unwrap(),
                parse_board("1 2 0 5 6 3 7 8 4").unwrap(),
            ]
        );
    }

    #[test]
    fn test_center_has_four_neighbors_in_order() {
        let board = parse_board("1 2 3 4 0 5 6 7 8").unwrap();
        let blanks: Vec<_> = neighbors(&board).iter().map(Board::blank).collect();
        assert_eq!(blanks, vec![(1, 2), (1, 0), (2, 1), (0, 1)]);
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected() {
        let goal = Board::goal(3).unwrap();
        assert!(goal.apply(Move::Right).is_none());
        assert!(goal.apply(Move::Down).is_none());
        assert!(goal.apply(Move::Left).is_some());
    }

    #[test]
    fn test_opposite_move_restores_board() {
        let boards = [
            Board::goal(3).unwrap(),
            parse_board("5 2 8 4 1 7 0 3 6").unwrap(),
            parse_board("1 2 3 4 0 5 6 7 8").unwrap(),
            Board::goal(4).unwrap(),
        ];
        for board in &boards {
            for movement in MOVES {
                if let Some(moved) = board.apply(movement) {
                    assert_ne!(&moved, board);
                    assert_eq!(moved.apply(movement.opposite()).as_ref(), Some(board));
                    assert_eq!(Move::between(board, &moved), Some(movement));
                }
            }
        }
    }

    #[test]
    fn test_neighbors_do_not_mutate_source() {
        let board = parse_board("1 2 3 4 0 5 6 7 8").unwrap();
        let snapshot = board.clone();
        let _ = neighbors(&board);
        assert_eq!(board, snapshot);
    }
}
