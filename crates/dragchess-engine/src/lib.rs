//! Game state, drag gestures, and render snapshots for dragchess.

pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod highlight;
pub mod player;
pub mod session;
pub mod snapshot;
pub mod state;

pub use config::BoardGeometry;
pub use error::{ConfigError, GestureError};
pub use geometry::Point;
pub use gesture::Gesture;
pub use highlight::{Advice, Highlight};
pub use player::Player;
pub use session::Session;
pub use snapshot::{HighlightView, PlayerSummary, Snapshot};
pub use state::{GameState, Release, Transition};
