//! Render-ready view of the game handed to the UI layer.

use std::fmt;

use dragchess_core::{BOARD_SIZE, Piece, Square, Team};

use crate::config::BoardGeometry;
use crate::geometry::is_dark;
use crate::highlight::Advice;
use crate::state::GameState;

const N: usize = BOARD_SIZE as usize;

/// A highlighted square with its resolved colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightView {
    pub square: Square,
    pub advice: Advice,
    pub color: String,
}

/// Score line for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub team: Team,
    pub score: u32,
    /// Enemy pieces taken, oldest first.
    pub captured: Vec<Piece>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Rows of cells, row 0 first.
    pub cells: [[Option<Piece>; N]; N],
    pub highlight: Option<HighlightView>,
    /// White first.
    pub players: [PlayerSummary; Team::COUNT],
    pub turn: Team,
    pub game_over: bool,
    pub winner: Option<Team>,
}

impl Snapshot {
    pub fn capture(state: &GameState, geometry: &BoardGeometry) -> Snapshot {
        let summary = |team: Team| {
            let player = state.player(team);
            PlayerSummary {
                team,
                score: player.score(),
                captured: player.captured().to_vec(),
            }
        };

        Snapshot {
            cells: *state.board().rows(),
            highlight: state.highlight().map(|h| HighlightView {
                square: h.square,
                advice: h.advice,
                color: geometry.advice_color(h.advice).to_string(),
            }),
            players: [summary(Team::White), summary(Team::Black)],
            turn: state.turn(),
            game_over: state.is_game_over(),
            winner: state.winner(),
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Whether the piece on `sq` may be picked up right now.
    pub fn is_draggable(&self, sq: Square) -> bool {
        !self.game_over && self.piece_at(sq).is_some_and(|p| p.team() == self.turn)
    }

    pub fn turn_label(&self) -> String {
        format!("{} turn", self.turn)
    }

    /// Game-over message, e.g. "Black won!".
    pub fn banner(&self) -> Option<String> {
        self.winner.map(|team| format!("{team} won!"))
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let Some(sq) = Square::new(col, row) else {
                    continue;
                };
                let glyph = match self.piece_at(sq) {
                    Some(piece) => piece.symbol(),
                    None if is_dark(sq) => ':',
                    None => '.',
                };
                let mark = match &self.highlight {
                    Some(h) if h.square == sq => match h.advice {
                        Advice::Legal => '*',
                        Advice::Illegal => 'x',
                    },
                    _ => ' ',
                };
                write!(f, "{glyph}{mark}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;

        for (i, player) in self.players.iter().enumerate() {
            let won: String = player.captured.iter().map(|p| p.symbol()).collect();
            writeln!(f, "Player {}: {} pts {}", i + 1, player.score, won)?;
        }

        write!(f, "{}", self.turn_label())?;
        if let Some(banner) = self.banner() {
            write!(f, "\n{banner} Tap to restart")?;
        }
        Ok(())
    }
}
