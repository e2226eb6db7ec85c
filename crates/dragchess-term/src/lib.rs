//! Line-oriented text front end for dragchess.
//!
//! Stands in for a pointer-driven UI: each input line is one pointer event
//! or board command, and each response line is what a renderer would draw.

pub mod command;
pub mod error;
pub mod frontend;

pub use command::{Command, TermOption, parse_command};
pub use error::TermError;
pub use frontend::Frontend;
