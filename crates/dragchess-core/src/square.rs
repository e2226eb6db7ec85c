//! Board squares addressed by column and row.

use std::fmt;

/// Board width and height.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board, stored as `row * 8 + col`.
///
/// Column 0 is file `a`; row 0 is rank `1` (White's back rank).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a column and a row, returning `None` if either is off the board.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Square> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates, clamping each axis into `0..=7`.
    #[inline]
    pub fn clamped(col: i32, row: i32) -> Square {
        let max = i32::from(BOARD_SIZE) - 1;
        let col = col.clamp(0, max) as u8;
        let row = row.clamp(0, max) as u8;
        Square(row * BOARD_SIZE + col)
    }

    /// Parse algebraic notation ("e2" is column 4, row 1).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Square::new(file - b'a', rank - b'1')
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `dc` columns and `dr` rows away, if it is on the board.
    #[inline]
    pub fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        let col = i16::from(self.col()) + i16::from(dc);
        let row = i16::from(self.row()) + i16::from(dr);
        let col = u8::try_from(col).ok()?;
        let row = u8::try_from(row).ok()?;
        Square::new(col, row)
    }

    /// The `"row:col"` key the render layer uses to address a square.
    pub fn key(self) -> String {
        format!("{}:{}", self.row(), self.col())
    }

    /// Iterate over all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{}{}", file, self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn new_and_accessors() {
        let sq = Square::new(4, 1).unwrap();
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.row(), 1);
        assert_eq!(sq.index(), 12);
    }

    #[test]
    fn new_rejects_off_board() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(7, 7).is_some());
    }

    #[test]
    fn clamped_stays_on_board() {
        assert_eq!(Square::clamped(-3, 12), Square::new(0, 7).unwrap());
        assert_eq!(Square::clamped(9, -1), Square::new(7, 0).unwrap());
        assert_eq!(Square::clamped(2, 5), Square::new(2, 5).unwrap());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("e2"), Square::new(4, 1));
        assert_eq!(Square::from_algebraic("h8"), Square::new(7, 7));
        assert_eq!(format!("{}", Square::new(4, 3).unwrap()), "e4");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn offsets() {
        let sq = Square::new(1, 0).unwrap();
        assert_eq!(sq.offset(1, 2), Square::new(2, 2));
        assert_eq!(sq.offset(-2, 0), None);
        assert_eq!(sq.offset(0, -1), None);
        assert_eq!(Square::new(7, 7).unwrap().offset(1, 0), None);
    }

    #[test]
    fn key_is_row_then_col() {
        assert_eq!(Square::new(2, 5).unwrap().key(), "5:2");
    }

    #[test]
    fn all_iterator_covers_board() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), Square::COUNT);
        assert_eq!(squares[9], Square::new(1, 1).unwrap());
    }
}
