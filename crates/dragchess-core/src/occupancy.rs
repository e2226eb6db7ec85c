//! Square-to-piece lookup derived from a committed [`Board`].

use std::collections::HashMap;

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Which piece stands on each occupied square. Absent squares are empty.
///
/// Always derived from a [`Board`] with [`derive_occupancy`]; never updated in
/// place, so it cannot drift from committed placement while a drag is live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    by_square: HashMap<Square, Piece>,
}

impl Occupancy {
    /// The piece on `sq`, or `None` if it is empty.
    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Option<Piece> {
        self.by_square.get(&sq).copied()
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.by_square.contains_key(&sq)
    }

    /// Number of occupied squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_square.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_square.is_empty()
    }

    /// Iterate over occupied squares in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.by_square.iter().map(|(&sq, &piece)| (sq, piece))
    }
}

/// Index the live pieces of `board` by square.
pub fn derive_occupancy(board: &Board) -> Occupancy {
    Occupancy {
        by_square: board.pieces().collect(),
    }
}
