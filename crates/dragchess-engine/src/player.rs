//! Per-team score and capture record.

use dragchess_core::Piece;

/// What one team has won so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    score: u32,
    /// Enemy pieces taken, oldest first.
    captured: Vec<Piece>,
}

impl Player {
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub(crate) fn record_capture(&mut self, piece: Piece) {
        self.score += 1;
        self.captured.push(piece);
    }
}
