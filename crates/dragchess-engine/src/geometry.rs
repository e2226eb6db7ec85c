//! Pixel positions and their mapping onto board squares.

use std::fmt;

use dragchess_core::{BOARD_SIZE, Square};

use crate::config::BoardGeometry;
use crate::highlight::Advice;

/// A piece's top-left corner in board pixels. `x` follows columns, `y` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// `true` for the darker squares of the checkerboard.
#[inline]
pub fn is_dark(sq: Square) -> bool {
    (sq.row() + sq.col()) & 1 == 1
}

impl BoardGeometry {
    /// Width and height of the whole board.
    #[inline]
    pub fn board_px(&self) -> i32 {
        (self.tile_size() * u32::from(BOARD_SIZE)) as i32
    }

    /// Width and height of one piece.
    #[inline]
    pub fn piece_px(&self) -> i32 {
        (self.tile_size() - self.piece_inset()) as i32
    }

    /// Keep a piece entirely inside the board.
    pub fn clamp(&self, p: Point) -> Point {
        let max = self.board_px() - self.piece_px();
        Point::new(p.x.clamp(0, max), p.y.clamp(0, max))
    }

    /// The square a piece at `p` is over: each axis rounds to the nearest tile.
    pub fn snap(&self, p: Point) -> Square {
        let p = self.clamp(p);
        let half = (self.tile_size() / 2) as i32;
        let shift = self.tile_size().trailing_zeros();
        Square::clamped((p.x + half) >> shift, (p.y + half) >> shift)
    }

    /// Where a piece resting on `sq` is drawn: centred in its tile.
    pub fn align_center(&self, sq: Square) -> Point {
        let tile = self.tile_size() as i32;
        let offset = (tile - self.piece_px()) / 2;
        Point::new(
            tile * i32::from(sq.col()) + offset,
            tile * i32::from(sq.row()) + offset,
        )
    }

    /// Background colour of `sq`.
    pub fn square_color(&self, sq: Square) -> &str {
        if is_dark(sq) {
            self.dark_color()
        } else {
            self.light_color()
        }
    }

    /// Highlight colour for a verdict.
    pub fn advice_color(&self, advice: Advice) -> &str {
        match advice {
            Advice::Legal => self.legal_color(),
            Advice::Illegal => self.illegal_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use dragchess_core::Square;

    use super::{Point, is_dark};
    use crate::config::BoardGeometry;
    use crate::highlight::Advice;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn sizes() {
        let g = BoardGeometry::default();
        assert_eq!(g.board_px(), 256);
        assert_eq!(g.piece_px(), 24);
    }

    #[test]
    fn clamp_keeps_piece_on_board() {
        let g = BoardGeometry::default();
        assert_eq!(g.clamp(Point::new(-40, 500)), Point::new(0, 232));
        assert_eq!(g.clamp(Point::new(100, 100)), Point::new(100, 100));
    }

    #[test]
    fn align_center_of_squares() {
        let g = BoardGeometry::default();
        assert_eq!(g.align_center(sq("a1")), Point::new(4, 4));
        assert_eq!(g.align_center(sq("e2")), Point::new(132, 36));
        assert_eq!(g.align_center(sq("h8")), Point::new(228, 228));
    }

    #[test]
    fn snap_of_centred_piece_is_its_square() {
        let g = BoardGeometry::default();
        for s in Square::all() {
            assert_eq!(g.snap(g.align_center(s)), s);
        }
    }

    #[test]
    fn snap_rounds_to_nearest_tile() {
        let g = BoardGeometry::default();
        // 15 px past column 2 stays there, 16 px tips into column 3.
        assert_eq!(g.snap(Point::new(64 + 15, 0)), Square::new(2, 0).unwrap());
        assert_eq!(g.snap(Point::new(64 + 16, 0)), Square::new(3, 0).unwrap());
    }

    #[test]
    fn snap_never_leaves_board() {
        let g = BoardGeometry::default();
        assert_eq!(g.snap(Point::new(-1000, -1000)), sq("a1"));
        assert_eq!(g.snap(Point::new(10_000, 10_000)), sq("h8"));
    }

    #[test]
    fn snap_follows_tile_size() {
        let mut g = BoardGeometry::default();
        g.set_tile_size(64).unwrap();
        assert_eq!(g.snap(g.align_center(sq("c6"))), sq("c6"));
        assert_eq!(g.snap(Point::new(64 * 4, 64 * 3)), sq("e4"));
    }

    #[test]
    fn checkerboard_colours() {
        let g = BoardGeometry::default();
        assert!(!is_dark(sq("a1")));
        assert!(is_dark(sq("b1")));
        assert_eq!(g.square_color(sq("a1")), "lightgreen");
        assert_eq!(g.square_color(sq("a2")), "green");
    }

    #[test]
    fn advice_colours() {
        let g = BoardGeometry::default();
        assert_eq!(g.advice_color(Advice::Legal), "#09c");
        assert_eq!(g.advice_color(Advice::Illegal), "#c60");
    }
}
