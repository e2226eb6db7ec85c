//! Advisory drop-target highlight shown while a piece is dragged.

use dragchess_core::Square;

/// Verdict on the square under a dragged piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    Legal,
    Illegal,
}

impl Advice {
    #[inline]
    pub const fn from_legal(legal: bool) -> Advice {
        if legal { Advice::Legal } else { Advice::Illegal }
    }
}

/// The square under a dragged piece and whether dropping there would commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub square: Square,
    pub advice: Advice,
}
