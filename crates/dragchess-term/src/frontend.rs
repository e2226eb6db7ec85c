//! Line-driven front end: reads commands, feeds the session, prints frames.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use dragchess_core::{Square, legal_destinations};
use dragchess_engine::{Advice, Highlight, Point, Session};

use crate::command::{Command, TermOption, parse_command};
use crate::error::TermError;

/// The text front end, holding the one game session.
///
/// Output protocol, one line per reply:
/// - `grab <sq> <x> <y>` after a touch
/// - `highlight <sq> legal|illegal <color>` or `highlight none` after a drag tick
/// - `commit` or `snapback <x> <y>` after a release, cancel or move
/// - `gameover <banner>` once a king has been taken
/// - `hint <sq> [targets...]`
/// - `error <message>` when a command is refused
#[derive(Debug, Default)]
pub struct Frontend {
    session: Session,
}

impl Frontend {
    /// Create a front end with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Refused commands are reported on `output` and the loop carries on;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), TermError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut output),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => {}
                Err(e @ TermError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command refused");
                    writeln!(output, "error {e}")?;
                }
            }
            output.flush()?;
        }

        info!("dragchess shutting down");
        Ok(())
    }

    /// Apply one command and write its reply.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), TermError> {
        match cmd {
            Command::Touch(square) => {
                let home = self.session.on_touch_start(square)?;
                writeln!(out, "grab {square} {home}")?;
            }
            Command::Drag(point) => {
                let highlight = self.session.on_drag_tick(point)?;
                self.write_highlight(highlight, out)?;
            }
            Command::Release(point) => {
                let back = self.session.on_release(point)?;
                self.write_release(back, out)?;
            }
            Command::Cancel => {
                let home = self.session.on_cancel()?;
                writeln!(out, "snapback {home}")?;
            }
            Command::Move { from, to } => {
                self.session.on_touch_start(from)?;
                let target = self.session.geometry().align_center(to);
                let back = self.session.on_release(target)?;
                self.write_release(back, out)?;
            }
            Command::Hint(square) => self.write_hint(square, out)?,
            Command::Show => writeln!(out, "{}", self.session.snapshot())?,
            Command::Reset => self.session.reset(),
            Command::Position(state) => {
                info!(turn = %state.turn(), "position loaded");
                self.session.load(state);
            }
            Command::SetOption(option) => self.handle_setoption(option)?,
            Command::Quit => {}
            Command::Unknown(name) => {
                debug!(%name, "ignoring unknown command");
            }
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: TermOption) -> Result<(), TermError> {
        let mut geometry = self.session.geometry().clone();
        match &option {
            TermOption::TileSize(size) => geometry.set_tile_size(*size)?,
            TermOption::LegalColor(color) => geometry.set_legal_color(color)?,
            TermOption::IllegalColor(color) => geometry.set_illegal_color(color)?,
        }
        self.session.set_geometry(geometry)?;
        info!(?option, "option set");
        Ok(())
    }

    fn write_highlight<W: Write>(&self, highlight: Option<Highlight>, out: &mut W) -> Result<(), TermError> {
        match highlight {
            Some(h) => {
                let verdict = match h.advice {
                    Advice::Legal => "legal",
                    Advice::Illegal => "illegal",
                };
                let color = self.session.geometry().advice_color(h.advice);
                writeln!(out, "highlight {} {verdict} {color}", h.square)?;
            }
            None => writeln!(out, "highlight none")?,
        }
        Ok(())
    }

    fn write_release<W: Write>(&self, back: Option<Point>, out: &mut W) -> Result<(), TermError> {
        match back {
            Some(home) => writeln!(out, "snapback {home}")?,
            None => {
                writeln!(out, "commit")?;
                if let Some(banner) = self.session.snapshot().banner() {
                    writeln!(out, "gameover {banner}")?;
                }
            }
        }
        Ok(())
    }

    fn write_hint<W: Write>(&self, square: Square, out: &mut W) -> Result<(), TermError> {
        let occupancy = self.session.state().occupancy();
        write!(out, "hint {square}")?;
        for dest in legal_destinations(square, &occupancy) {
            write!(out, " {dest}")?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use dragchess_core::{Piece, Square, Team};

    use super::Frontend;

    fn run_script(frontend: &mut Frontend, script: &str) -> String {
        let mut out = Vec::new();
        frontend.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn touch_drag_release() {
        let mut fe = Frontend::new();
        let out = run_script(&mut fe, "touch e2\ndrag 132 100\nrelease 132 100\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["grab e2 132 36", "highlight e4 legal #09c", "commit"]);
        assert_eq!(fe.session().state().board().piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn illegal_release_snaps_back() {
        let mut fe = Frontend::new();
        let out = run_script(&mut fe, "touch e2\ndrag 132 132\nrelease 132 132\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["grab e2 132 36", "highlight e5 illegal #c60", "snapback 132 36"]);
        assert_eq!(fe.session().state().turn(), Team::White);
    }

    #[test]
    fn move_shorthand() {
        let mut fe = Frontend::new();
        let out = run_script(&mut fe, "move g1f3\nmove e7e5\nmove f3e5\nmove d8d5\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["commit", "commit", "commit", "snapback 100 228"]);
        assert_eq!(fe.session().state().player(Team::White).score(), 1);
        assert_eq!(fe.session().state().turn(), Team::Black);
    }

    #[test]
    fn refused_commands_keep_running() {
        let mut fe = Frontend::new();
        let out = run_script(&mut fe, "touch e4\nrelease 0 0\nbogus\ntouch e2\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("error "));
        assert!(lines[1].starts_with("error "));
        assert_eq!(lines[2], "grab e2 132 36");
    }

    #[test]
    fn quit_stops_reading() {
        let mut fe = Frontend::new();
        let out = run_script(&mut fe, "quit\ntouch e2\n");
        assert!(out.is_empty());
        assert!(fe.session().gesture().is_none());
    }

    #[test]
    fn hint_lists_targets() {
        let mut fe = Frontend::new();
        let out = run_script(&mut fe, "hint b1\nhint e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["hint b1 a3 c3", "hint e4"]);
    }

    #[test]
    fn king_capture_reports_game_over() {
        let mut fe = Frontend::new();
        let out = run_script(
            &mut fe,
            "position layout 8/8/8/8/8/8/3k4/4K3 w\nmove e1d2\ntouch d2\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "commit");
        assert_eq!(lines[1], "gameover White won!");
        assert!(lines[2].starts_with("error "));
    }

    #[test]
    fn setoption_changes_geometry() {
        let mut fe = Frontend::new();
        let out = run_script(
            &mut fe,
            "setoption name TileSize value 64\nsetoption name TileSize value 60\ntouch a1\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("error "));
        assert_eq!(lines[1], "grab a1 8 8");
        assert_eq!(fe.session().geometry().tile_size(), 64);
    }

    #[test]
    fn show_and_reset() {
        let mut fe = Frontend::new();
        let out = run_script(&mut fe, "move e2e4\nreset\nshow\n");
        assert!(out.contains("White turn"));
        assert_eq!(fe.session().state().board().piece_at(sq("e2")), Some(Piece::WHITE_PAWN));
    }
}
