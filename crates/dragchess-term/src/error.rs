//! Front-end errors.

use dragchess_core::LayoutError;
use dragchess_engine::{ConfigError, GestureError};

/// Errors that can occur while reading and executing front-end commands.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// A command is missing a required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The rejected text.
        value: String,
    },

    /// A pixel coordinate could not be parsed.
    #[error("invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The rejected text.
        value: String,
    },

    /// A `move` argument is not two squares, e.g. `e2e4`.
    #[error("invalid move: {value}")]
    InvalidMove {
        /// The rejected text.
        value: String,
    },

    /// The `position` command is missing `startpos` or `layout`.
    #[error("malformed position command: missing startpos or layout keyword")]
    MalformedPosition,

    /// The layout given to `position layout` failed to parse.
    #[error("invalid layout: {source}")]
    InvalidLayout {
        /// The underlying layout error.
        #[from]
        source: LayoutError,
    },

    /// `setoption` is not of the form `setoption name <id> value <x>`.
    #[error("malformed setoption command")]
    MalformedOption,

    /// `setoption` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `setoption` value could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The session refused a pointer event.
    #[error(transparent)]
    Gesture(#[from] GestureError),

    /// The geometry refused a setting.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
