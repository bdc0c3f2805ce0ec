//! Board representation and input parsing for sliding-tile puzzles.
//!
//! A board is a square grid stored as a flat row-major array where each cell
//! holds a tile number, with 0 for the blank.

use std::fmt;
use std::io::BufRead;

use crate::error::{PuzzleError, Result};

/// Tile value of the blank cell.
pub const BLANK: u8 = 0;

/// Largest supported side length; every tile of a 16x16 board fits in a `u8`.
pub const MAX_DIM: usize = 16;

/// A (row, column) position on the board, 0-indexed from the top left.
pub type Coord = (usize, usize);

/// Converts (row, col) coordinates to a linear cell index.
///
/// Index order is row-major: `idx = row * dim + col`.
#[inline(always)]
pub const fn coord_to_idx(dim: usize, row: usize, col: usize) -> usize {
    row * dim + col
}

/// Converts a linear cell index to (row, col) coordinates.
#[inline(always)]
pub const fn idx_to_coord(dim: usize, cell_index: usize) -> Coord {
    (cell_index / dim, cell_index % dim)
}

/// An immutable puzzle configuration.
///
/// Equality and hashing are by tile values, so two boards reached along
/// different paths compare equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dim: usize,
    tiles: Box<[u8]>,
}

impl Board {
    /// Creates a board from row-major tiles, inferring the dimension.
    ///
    /// Fails unless the tile count is a non-zero perfect square and the tiles
    /// are a permutation of `0..dim*dim`.
    pub fn new(tiles: Vec<u8>) -> Result<Self> {
        let count = tiles.len();
        let dim = count.isqrt();
        if count == 0 || dim * dim != count {
            return Err(PuzzleError::BadTileCount { count });
        }

        let mut seen = vec![false; count];
        for &tile in &tiles {
            let slot = seen.get_mut(tile as usize).ok_or(PuzzleError::NotPermutation {
                dim,
                max: count - 1,
            })?;
            if *slot {
                return Err(PuzzleError::NotPermutation {
                    dim,
                    max: count - 1,
                });
            }
            *slot = true;
        }

        Ok(Self {
            dim,
            tiles: tiles.into_boxed_slice(),
        })
    }

    /// Creates a board from a list of rows.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let dim = rows.len();
        if let Some((row, tiles)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(PuzzleError::NotSquare {
                rows: dim,
                row,
                len: tiles.len(),
            });
        }
        Self::new(rows.concat())
    }

    /// The conventional goal: tiles ascending in reading order, blank last.
    ///
    /// Fails unless `dim` is between 1 and [`MAX_DIM`].
    pub fn goal(dim: usize) -> Result<Self> {
        if !(1..=MAX_DIM).contains(&dim) {
            return Err(PuzzleError::UnsupportedSize { dim, max: MAX_DIM });
        }
        let cells = dim * dim;
        let tiles = (1..cells)
            .map(|tile| tile as u8)
            .chain(std::iter::once(BLANK))
            .collect();
        Ok(Self { dim, tiles })
    }

    /// Side length of the board.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Tile at the given position.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[coord_to_idx(self.dim, row, col)]
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.dim)
    }

    /// Position of the blank.
    pub fn blank(&self) -> Coord {
        // every valid board holds exactly one blank
        let idx = self
            .tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .unwrap_or_default();
        idx_to_coord(self.dim, idx)
    }

    /// Returns a copy of this board with two cells exchanged.
    pub(crate) fn swapped(&self, a: Coord, b: Coord) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(
            coord_to_idx(self.dim, a.0, a.1),
            coord_to_idx(self.dim, b.0, b.1),
        );
        Self {
            dim: self.dim,
            tiles,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

fn parse_tile(token: &str) -> Result<u8> {
    token.parse().map_err(|source| PuzzleError::InvalidTile {
        token: token.to_string(),
        source,
    })
}

/// Splits text into tile tokens, treating brackets and commas as separators.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
        .filter(|token| !token.is_empty())
}

/// Parses a board from free-form text such as `"1 2 3 4 5 6 7 8 0"` or
/// `"[[1,2,3],[4,5,6],[7,8,0]]"`.
///
/// The dimension is inferred from the number of tiles.
pub fn parse_board(text: &str) -> Result<Board> {
    let tiles = tokens(text).map(parse_tile).collect::<Result<Vec<_>>>()?;
    Board::new(tiles)
}

/// Reads `dim` rows of `dim` whitespace-separated tiles.
///
/// Blank lines are skipped. Reading stops after the last row, so the rest of
/// the stream is left untouched.
pub fn read_board<R: BufRead>(reader: R, dim: usize) -> Result<Board> {
    let mut rows = Vec::with_capacity(dim);

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = tokens(&line).map(parse_tile).collect::<Result<Vec<_>>>()?;
        if row.len() != dim {
            return Err(PuzzleError::NotSquare {
                rows: dim,
                row: rows.len(),
                len: row.len(),
            });
        }
        rows.push(row);
        if rows.len() == dim {
            break;
        }
    }

    if rows.len() < dim {
        return Err(PuzzleError::MissingRows {
            expected: dim,
            found: rows.len(),
        });
    }

    Board::from_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_ascending_with_blank_last() {
        let goal = Board::goal(3).unwrap();
        assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(goal.blank(), (2, 2));
    }

    #[test]
    fn test_from_rows_matches_parse() {
        let rows = vec![vec![1, 2, 3], vec![5, 6, 0], vec![7, 8, 4]];
        let from_rows = Board::from_rows(&rows).unwrap();
        let parsed = parse_board("[[1,2,3],[5,6,0],[7,8,4]]").unwrap();
        assert_eq!(from_rows, parsed);
        assert_eq!(parsed.blank(), (1, 2));
        assert_eq!(parsed.tile(2, 2), 4);
    }

    #[test]
    fn test_goal_rejects_unsupported_sizes() {
        assert!(matches!(
            Board::goal(0),
            Err(PuzzleError::UnsupportedSize { dim: 0, max: MAX_DIM })
        ));
        assert!(matches!(
            Board::goal(MAX_DIM + 1),
            Err(PuzzleError::UnsupportedSize { dim: 17, .. })
        ));

        let largest = Board::goal(MAX_DIM).unwrap();
        assert_eq!(largest.tiles().iter().filter(|&&t| t == BLANK).count(), 1);
        assert_eq!(largest.rows().count(), MAX_DIM);
        assert_eq!(Board::new(largest.tiles().to_vec()).unwrap(), largest);
    }

    #[test]
    fn test_perfect_square_counts() {
        assert_eq!(parse_board("0").unwrap().dim(), 1);
        assert_eq!(Board::goal(4).unwrap().dim(), 4);
        assert!(matches!(
            Board::new((0..15).collect()),
            Err(PuzzleError::BadTileCount { count: 15 })
        ));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 0]];
        assert!(matches!(
            Board::from_rows(&rows),
            Err(PuzzleError::NotSquare { row: 1, len: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_and_out_of_range_tiles() {
        assert!(matches!(
            parse_board("1 2 3 4 5 6 7 8 8"),
            Err(PuzzleError::NotPermutation { dim: 3, max: 8 })
        ));
        assert!(matches!(
            parse_board("1 2 3 4 5 6 7 9 0"),
            Err(PuzzleError::NotPermutation { .. })
        ));
    }

    #[test]
    fn test_rejects_non_square_tile_count() {
        assert!(matches!(
            parse_board("1 2 0"),
            Err(PuzzleError::BadTileCount { count: 3 })
        ));
        assert!(matches!(
            parse_board(""),
            Err(PuzzleError::BadTileCount { count: 0 })
        ));
    }

    #[test]
    fn test_rejects_non_numeric_tile() {
        let err = parse_board("1 2 x 0").unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidTile { ref token, .. } if token == "x"));
    }

    #[test]
    fn test_read_board_skips_blank_lines() {
        let input = "\n1 2 3\n\n4 5 6\n7 8 0\ntrailing garbage\n";
        let board = read_board(input.as_bytes(), 3).unwrap();
        assert_eq!(board, Board::goal(3).unwrap());
    }

    #[test]
    fn test_read_board_reports_short_input() {
        let input = "1 2 3\n4 5 6\n";
        assert!(matches!(
            read_board(input.as_bytes(), 3),
            Err(PuzzleError::MissingRows {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_read_board_reports_short_row() {
        let input = "1 2 3\n4 5\n6 7 8 0\n";
        assert!(matches!(
            read_board(input.as_bytes(), 3),
            Err(PuzzleError::NotSquare { row: 1, len: 2, .. })
        ));
    }

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for dim in 2..=4 {
            for idx in 0..dim * dim {
                let (row, col) = idx_to_coord(dim, idx);
                assert!(row < dim && col < dim);
                assert_eq!(coord_to_idx(dim, row, col), idx, "Roundtrip failed for {idx}");
            }
        }
    }
}
