//! Per-drag context: which piece is moving and where it has been.

use dragchess_core::{Piece, Square};

use crate::geometry::Point;

/// One pointer interaction, from touch start to release or cancel.
///
/// Owned by the [`Session`](crate::Session) while the drag lasts and dropped
/// afterwards, so nothing about a finished drag leaks into the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gesture {
    piece: Piece,
    origin: Square,
    /// Resting position of the piece on its origin square.
    home: Point,
    /// Latest clamped position reported by the render layer.
    position: Point,
    /// Square the highlight was last computed for.
    last_square: Option<Square>,
}

impl Gesture {
    pub(crate) fn begin(piece: Piece, origin: Square, home: Point) -> Gesture {
        Gesture {
            piece,
            origin,
            home,
            position: home,
            last_square: None,
        }
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn origin(&self) -> Square {
        self.origin
    }

    #[inline]
    pub fn home(&self) -> Point {
        self.home
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Distance dragged so far.
    pub fn delta(&self) -> Point {
        Point::new(self.position.x - self.home.x, self.position.y - self.home.y)
    }

    /// Record a new position over `square`.
    ///
    /// Returns `true` only when `square` differs from the previous tick's.
    pub(crate) fn track(&mut self, position: Point, square: Square) -> bool {
        self.position = position;
        if self.last_square == Some(square) {
            return false;
        }
        self.last_square = Some(square);
        true
    }
}
