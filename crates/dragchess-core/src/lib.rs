//! Core board types and the move-legality rules.

mod board;
mod error;
mod layout;
pub mod legality;
mod occupancy;
mod piece;
mod piece_kind;
mod square;
mod team;

pub use board::{Board, INITIAL_IDS, PrettyBoard};
pub use error::{BoardError, LayoutError};
pub use layout::{INITIAL_LAYOUT, parse_position};
pub use legality::{is_legal, legal_destinations};
pub use occupancy::{Occupancy, derive_occupancy};
pub use piece::{EMPTY, Piece};
pub use piece_kind::PieceKind;
pub use square::{BOARD_SIZE, Square};
pub use team::Team;
