//! The 8x8 grid of committed piece placement.

use std::fmt;

use crate::error::BoardError;
use crate::piece::{EMPTY, Piece};
use crate::square::{BOARD_SIZE, Square};

const N: usize = BOARD_SIZE as usize;

/// Identifier grid of the starting position, row 0 first.
pub const INITIAL_IDS: [[i8; N]; N] = [
    [1, 2, 3, 4, 5, 3, 2, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [EMPTY; N],
    [EMPTY; N],
    [EMPTY; N],
    [EMPTY; N],
    [6, 6, 6, 6, 6, 6, 6, 6],
    [7, 8, 9, 10, 11, 9, 8, 7],
];

/// Piece placement, row-major. Row 0 is White's back rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; N]; N],
        }
    }

    /// The starting layout.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for (row, ids) in INITIAL_IDS.iter().enumerate() {
            for (col, &id) in ids.iter().enumerate() {
                board.cells[row][col] = Piece::from_id(id);
            }
        }
        board
    }

    /// Build a board from an identifier grid, validating every cell.
    pub fn from_ids(ids: &[[i8; N]; N]) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (row, line) in ids.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == EMPTY {
                    continue;
                }
                let piece = Piece::from_id(value)
                    .ok_or(BoardError::InvalidIdentifier { value, row, col })?;
                board.cells[row][col] = Some(piece);
            }
        }
        board.validate()?;
        Ok(board)
    }

    /// Identifier grid, with [`EMPTY`] for vacant squares.
    pub fn to_ids(&self) -> [[i8; N]; N] {
        let mut ids = [[EMPTY; N]; N];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if let Some(piece) = cell {
                    ids[row][col] = piece.id() as i8;
                }
            }
        }
        ids
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Empty `sq`, returning its previous occupant.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Rows of cells, row 0 first.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; N]; N] {
        &self.cells
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.pieces().count()
    }

    /// Check that no piece appears more often than in the starting layout.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut counts = [0usize; Piece::COUNT];
        for (_, piece) in self.pieces() {
            counts[piece.id() as usize] += 1;
        }

        for piece in Piece::ALL {
            let count = counts[piece.id() as usize];
            let max = piece.kind().initial_count();
            if count > max {
                return Err(BoardError::TooManyPieces { piece, count, max });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as a grid of glyphs, row 7 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.0.cells.iter().enumerate().rev() {
            write!(f, "{}  ", row + 1)?;
            for (col, cell) in line.iter().enumerate() {
                let c = match cell {
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                if col + 1 < N {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
