//! Engine-side errors: gesture protocol violations and bad configuration.

/// A pointer event arrived that the current gesture state cannot accept.
///
/// Illegal moves are never errors; they snap back. These cover events the
/// render layer should not have sent at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    /// A drag began on an empty square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The touched square.
        square: String,
    },
    /// A drag began on a piece whose team is not on turn.
    #[error("{team} is not on turn")]
    NotOnTurn {
        /// Team of the touched piece.
        team: &'static str,
    },
    /// A drag began after a king was captured.
    #[error("game is over")]
    GameOver,
    /// A drag began while another is still active.
    #[error("a gesture is already in progress")]
    GestureInProgress,
    /// A tick, release, or cancel arrived with no active gesture.
    #[error("no gesture in progress")]
    NoGesture,
}

/// Rejected geometry settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Tile sizes must be powers of two so release snapping can shift.
    #[error("tile size {size} must be a power of two between 8 and 256")]
    InvalidTileSize {
        /// The rejected size.
        size: u32,
    },
    /// A colour value was empty.
    #[error("empty colour for {name}")]
    EmptyColor {
        /// Option name.
        name: &'static str,
    },
}
