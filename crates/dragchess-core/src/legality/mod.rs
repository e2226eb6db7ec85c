//! Move legality: per-kind movement patterns over a committed occupancy.
//!
//! Only movement shape, same-team blocking, and path clearance are checked.
//! There is no notion of check, castling, en passant, or promotion.

mod leapers;
mod pawns;
mod sliders;

use tracing::trace;

use crate::occupancy::Occupancy;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Everything a movement rule may look at for one candidate move.
pub(crate) struct Probe<'a> {
    pub origin: Square,
    pub dest: Square,
    pub mover: Piece,
    /// Occupant of `dest`; never a teammate of `mover` once a rule runs.
    pub target: Option<Piece>,
    pub occupancy: &'a Occupancy,
}

impl Probe<'_> {
    /// Signed column delta.
    #[inline]
    pub fn col_delta(&self) -> i8 {
        self.dest.col() as i8 - self.origin.col() as i8
    }

    /// Signed row delta.
    #[inline]
    pub fn row_delta(&self) -> i8 {
        self.dest.row() as i8 - self.origin.row() as i8
    }

    #[inline]
    pub fn dc(&self) -> u8 {
        self.col_delta().unsigned_abs()
    }

    #[inline]
    pub fn dr(&self) -> u8 {
        self.row_delta().unsigned_abs()
    }

    /// `true` if every square strictly between origin and destination is empty.
    ///
    /// Steps one unit per axis (zero on an axis that does not change), so it
    /// is only meaningful for straight and diagonal lines.
    pub fn path_is_clear(&self) -> bool {
        let step_col = self.col_delta().signum();
        let step_row = self.row_delta().signum();
        let steps = self.dc().max(self.dr()) as i8;

        (1..steps).all(|i| {
            self.origin
                .offset(step_col * i, step_row * i)
                .is_none_or(|sq| !self.occupancy.is_occupied(sq))
        })
    }
}

/// A movement rule for one piece kind.
type Rule = fn(&Probe<'_>) -> bool;

/// Movement rules indexed by [`PieceKind::index`].
const RULES: [Rule; PieceKind::COUNT] = [
    pawns::pawn,
    sliders::rook,
    leapers::knight,
    sliders::bishop,
    sliders::queen,
    leapers::king,
];

/// Decide whether the piece on `origin` may move to `dest`.
///
/// Pure: the answer depends only on the arguments. `origin` must hold a piece;
/// an empty origin is a caller bug and trips a debug assertion.
pub fn is_legal(origin: Square, dest: Square, occupancy: &Occupancy) -> bool {
    let Some(mover) = occupancy.occupant_at(origin) else {
        debug_assert!(false, "no piece on origin square {origin}");
        return false;
    };

    if origin == dest {
        return false;
    }

    let target = occupancy.occupant_at(dest);
    if target.is_some_and(|t| t.team() == mover.team()) {
        return false;
    }

    let probe = Probe {
        origin,
        dest,
        mover,
        target,
        occupancy,
    };
    let legal = RULES[mover.kind().index()](&probe);
    trace!(piece = ?mover, %origin, %dest, legal, "legality check");
    legal
}

/// All squares the piece on `origin` may move to, in row-major order.
///
/// Returns an empty list when `origin` is empty.
pub fn legal_destinations(origin: Square, occupancy: &Occupancy) -> Vec<Square> {
    if !occupancy.is_occupied(origin) {
        return Vec::new();
    }
    Square::all()
        .filter(|&dest| is_legal(origin, dest, occupancy))
        .collect()
}
