//! Front-end command parsing.

use dragchess_core::{Square, parse_position};
use dragchess_engine::{GameState, Point};

use crate::error::TermError;

/// A setting adjustable via `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOption {
    /// Tile edge in pixels.
    TileSize(u32),
    /// Highlight colour for legal targets.
    LegalColor(String),
    /// Highlight colour for illegal targets.
    IllegalColor(String),
}

/// A parsed front-end command.
#[derive(Debug)]
pub enum Command {
    /// `touch <sq>` -- pick up the piece on a square.
    Touch(Square),
    /// `drag <x> <y>` -- move the held piece to a pixel position.
    Drag(Point),
    /// `release <x> <y>` -- drop the held piece at a pixel position.
    Release(Point),
    /// `cancel` -- abort the drag in progress.
    Cancel,
    /// `move <from><to>` -- touch, then release on the centre of the target.
    Move { from: Square, to: Square },
    /// `hint <sq>` -- list the legal targets of the piece on a square.
    Hint(Square),
    /// `show` or `d` -- print the current frame.
    Show,
    /// `reset` -- start a new game.
    Reset,
    /// `position` -- load a placement.
    Position(GameState),
    /// `setoption` -- change a geometry setting.
    SetOption(TermOption),
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, TermError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "touch" => Ok(Command::Touch(parse_square(tokens.get(1), "touch")?)),
        "drag" => Ok(Command::Drag(parse_point(&tokens[1..], "drag")?)),
        "release" => Ok(Command::Release(parse_point(&tokens[1..], "release")?)),
        "cancel" => Ok(Command::Cancel),
        "move" => parse_move(tokens.get(1)),
        "hint" => Ok(Command::Hint(parse_square(tokens.get(1), "hint")?)),
        "show" | "d" => Ok(Command::Show),
        "reset" => Ok(Command::Reset),
        "position" => parse_position_command(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

fn parse_square(token: Option<&&str>, command: &'static str) -> Result<Square, TermError> {
    let value = token.ok_or(TermError::MissingArgument { command })?;
    Square::from_algebraic(value).ok_or_else(|| TermError::InvalidSquare {
        value: value.to_string(),
    })
}

fn parse_point(tokens: &[&str], command: &'static str) -> Result<Point, TermError> {
    let [x, y] = [tokens.first(), tokens.get(1)].map(|token| {
        let value = token.ok_or(TermError::MissingArgument { command })?;
        value.parse::<i32>().map_err(|_| TermError::InvalidCoordinate {
            value: value.to_string(),
        })
    });
    Ok(Point::new(x?, y?))
}

/// Parse `e2e4` style move text.
fn parse_move(token: Option<&&str>) -> Result<Command, TermError> {
    let value = token.ok_or(TermError::MissingArgument { command: "move" })?;
    let invalid = || TermError::InvalidMove {
        value: value.to_string(),
    };
    if value.len() != 4 || !value.is_ascii() {
        return Err(invalid());
    }
    let from = Square::from_algebraic(&value[..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&value[2..]).ok_or_else(invalid)?;
    Ok(Command::Move { from, to })
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position layout <placement> [w|b]`
fn parse_position_command(tokens: &[&str]) -> Result<Command, TermError> {
    match tokens.first() {
        Some(&"startpos") => Ok(Command::Position(GameState::initial())),
        Some(&"layout") if tokens.len() > 1 => {
            let (board, turn) = parse_position(&tokens[1..].join(" "))?;
            Ok(Command::Position(GameState::from_position(board, turn)))
        }
        _ => Err(TermError::MalformedPosition),
    }
}

/// Parse `setoption name <id> value <x>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, TermError> {
    let (name, value) = match tokens {
        ["name", name, "value", value] => (*name, *value),
        _ => return Err(TermError::MalformedOption),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "tilesize" => {
            let size = value.parse().map_err(|_| TermError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            })?;
            TermOption::TileSize(size)
        }
        "legalcolor" => TermOption::LegalColor(value.to_string()),
        "illegalcolor" => TermOption::IllegalColor(value.to_string()),
        _ => {
            return Err(TermError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}
