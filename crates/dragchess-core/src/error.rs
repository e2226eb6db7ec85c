//! Error types for layout parsing and board validation.

use std::fmt;

use crate::piece::Piece;

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The placement does not have exactly 8 rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    BadRowLength {
        /// Board row the text describes (7 = first segment).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The turn marker is not "w" or "b".
    InvalidTurn {
        /// The invalid marker.
        found: String,
    },
    /// The parsed board fails validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "expected 8 rows in layout, found {found}")
            }
            LayoutError::BadRowLength { row, length } => {
                write!(f, "row {row} describes {length} squares, expected 8")
            }
            LayoutError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            LayoutError::InvalidTurn { found } => {
                write!(f, "invalid turn marker: \"{found}\"")
            }
            LayoutError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for LayoutError {
    fn from(source: BoardError) -> Self {
        LayoutError::InvalidBoard { source }
    }
}

/// Errors from validating a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A grid cell holds a number that is neither a piece identifier nor the empty marker.
    #[error("invalid piece identifier {value} at row {row}, col {col}")]
    InvalidIdentifier {
        /// The offending value.
        value: i8,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },
    /// More copies of a piece than the initial layout holds.
    #[error("found {count} of {piece:?}, at most {max} allowed")]
    TooManyPieces {
        /// The duplicated piece.
        piece: Piece,
        /// Number found on the board.
        count: usize,
        /// Number in the initial layout.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, LayoutError};
    use crate::piece::Piece;

    #[test]
    fn layout_error_display() {
        let err = LayoutError::WrongRowCount { found: 3 };
        assert_eq!(format!("{err}"), "expected 8 rows in layout, found 3");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::TooManyPieces {
            piece: Piece::WHITE_KING,
            count: 2,
            max: 1,
        };
        assert_eq!(format!("{err}"), "found 2 of WK, at most 1 allowed");
    }

    #[test]
    fn layout_error_from_board_error() {
        let board_err = BoardError::InvalidIdentifier {
            value: 12,
            row: 0,
            col: 0,
        };
        let err: LayoutError = board_err.into();
        assert!(matches!(err, LayoutError::InvalidBoard { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
