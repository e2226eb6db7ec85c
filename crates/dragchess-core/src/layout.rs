//! Layout strings: a compact text form of a [`Board`].
//!
//! Rows are listed from row 7 down to row 0, separated by `/`. Uppercase
//! letters are White, lowercase are Black, digits are runs of empty squares.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::square::{BOARD_SIZE, Square};
use crate::team::Team;

/// The layout string of the starting position.
pub const INITIAL_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (i, text) in rows.iter().enumerate() {
            let row = BOARD_SIZE as usize - 1 - i;
            let mut col = 0usize;

            for c in text.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece = Piece::from_letter(c).ok_or(LayoutError::InvalidPieceChar {
                    character: c,
                })?;
                let sq = Square::new(col as u8, row as u8).ok_or(LayoutError::BadRowLength {
                    row,
                    length: col + 1,
                })?;
                board.put(sq, piece);
                col += 1;
            }

            if col != BOARD_SIZE as usize {
                return Err(LayoutError::BadRowLength { row, length: col });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.rows().iter().enumerate().rev() {
            let mut empty_run = 0u8;

            for cell in line {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty_run += 1,
                }
            }

            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Parse `"<layout> [w|b]"` into a board and the team to move (White when omitted).
pub fn parse_position(text: &str) -> Result<(Board, Team), LayoutError> {
    let mut fields = text.split_whitespace();
    let board: Board = fields.next().unwrap_or_default().parse()?;
    let turn = match fields.next() {
        None | Some("w") => Team::White,
        Some("b") => Team::Black,
        Some(other) => {
            return Err(LayoutError::InvalidTurn {
                found: other.to_string(),
            });
        }
    };
    Ok((board, turn))
}

#[cfg(test)]
mod tests {
    use super::{INITIAL_LAYOUT, parse_position};
    use crate::board::Board;
    use crate::error::LayoutError;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::team::Team;

    fn roundtrip(layout: &str) {
        let board: Board = layout.parse().unwrap();
        assert_eq!(format!("{board}"), layout, "layout roundtrip failed");
    }

    #[test]
    fn initial_layout_matches_board() {
        let board: Board = INITIAL_LAYOUT.parse().unwrap();
        assert_eq!(board, Board::initial());
        assert_eq!(format!("{}", Board::initial()), INITIAL_LAYOUT);
    }

    #[test]
    fn roundtrip_sparse() {
        roundtrip("4k3/8/8/8/8/8/4P3/R3K3");
        roundtrip("8/8/8/8/8/8/8/8");
    }

    #[test]
    fn rows_are_listed_top_down() {
        let board: Board = "8/8/8/8/8/8/8/R7".parse().unwrap();
        assert_eq!(
            board.piece_at(Square::new(0, 0).unwrap()),
            Some(Piece::WHITE_ROOK)
        );
    }

    #[test]
    fn error_wrong_row_count() {
        assert_eq!(
            "8/8".parse::<Board>(),
            Err(LayoutError::WrongRowCount { found: 2 })
        );
    }

    #[test]
    fn error_bad_row_length() {
        assert!(matches!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Board>(),
            Err(LayoutError::BadRowLength { row: 6, length: 7 })
        ));
        assert!(matches!(
            "rnbqkbnrr/8/8/8/8/8/8/8".parse::<Board>(),
            Err(LayoutError::BadRowLength { .. })
        ));
    }

    #[test]
    fn error_invalid_char() {
        assert!(matches!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR".parse::<Board>(),
            Err(LayoutError::InvalidPieceChar { character: 'X' })
        ));
    }

    #[test]
    fn error_too_many_queens() {
        assert!(matches!(
            "qq6/8/8/8/8/8/8/8".parse::<Board>(),
            Err(LayoutError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn position_with_turn() {
        let (board, turn) = parse_position("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(board.count(), 2);
        assert_eq!(turn, Team::Black);

        let (_, turn) = parse_position(INITIAL_LAYOUT).unwrap();
        assert_eq!(turn, Team::White);

        assert!(matches!(
            parse_position("8/8/8/8/8/8/8/8 x"),
            Err(LayoutError::InvalidTurn { .. })
        ));
    }
}
