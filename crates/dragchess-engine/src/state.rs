//! Game state and its transitions.

use tracing::{debug, info};

use dragchess_core::{Board, Occupancy, Piece, Square, Team, derive_occupancy, is_legal};

use crate::highlight::{Advice, Highlight};
use crate::player::Player;

/// What became of a released piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The move was applied, possibly taking an enemy piece.
    Committed { captured: Option<Piece> },
    /// The move was rejected; the piece returns to its origin.
    SnapBack,
}

/// Result of [`GameState::apply_release`]: the next state and the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub release: Release,
}

/// Everything that persists between gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    highlight: Option<Highlight>,
    /// Indexed by [`Team::index`].
    players: [Player; Team::COUNT],
    turn: Team,
    game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState {
    /// Starting layout, zero scores, White to move.
    pub fn initial() -> GameState {
        GameState::from_position(Board::initial(), Team::White)
    }

    /// A fresh game from an arbitrary placement.
    pub fn from_position(board: Board, turn: Team) -> GameState {
        GameState {
            board,
            highlight: None,
            players: Default::default(),
            turn,
            game_over: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    #[inline]
    pub fn player(&self, team: Team) -> &Player {
        &self.players[team.index()]
    }

    #[inline]
    pub fn turn(&self) -> Team {
        self.turn
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The team that took a king. The turn has already passed to the loser.
    pub fn winner(&self) -> Option<Team> {
        self.game_over.then_some(self.turn.flip())
    }

    /// Occupancy of the committed board.
    pub fn occupancy(&self) -> Occupancy {
        derive_occupancy(&self.board)
    }

    /// Read-only legality query against the committed board.
    pub fn can_move(&self, origin: Square, dest: Square) -> bool {
        is_legal(origin, dest, &self.occupancy())
    }

    /// Drop `piece`, dragged from `origin`, onto `dest`.
    ///
    /// `self` is left untouched; the returned transition carries the next
    /// state. Rejected drops (illegal move, game already over) yield an
    /// otherwise identical state with the highlight cleared.
    pub fn apply_release(&self, piece: Piece, origin: Square, dest: Square) -> Transition {
        let mut next = self.clone();
        next.highlight = None;

        let snap_back = |state: GameState| Transition {
            state,
            release: Release::SnapBack,
        };

        if self.game_over {
            debug!(%origin, %dest, "release after game over");
            return snap_back(next);
        }

        let occupant = self.board.piece_at(origin);
        debug_assert_eq!(occupant, Some(piece), "dragged {piece:?} is not on {origin}");
        if occupant != Some(piece) {
            return snap_back(next);
        }

        if !self.can_move(origin, dest) {
            debug!(piece = ?piece, %origin, %dest, "illegal move rejected");
            return snap_back(next);
        }

        let captured = next.board.take(dest);
        if let Some(victim) = captured {
            let player = &mut next.players[piece.team().index()];
            player.record_capture(victim);
            info!(
                team = %piece.team(),
                victim = ?victim,
                score = player.score(),
                "capture"
            );
            if victim.is_king() {
                next.game_over = true;
                info!(winner = %piece.team(), "king captured, game over");
            }
        }

        next.board.take(origin);
        next.board.put(dest, piece);
        next.turn = next.turn.flip();
        info!(piece = ?piece, %origin, %dest, "move committed");

        Transition {
            state: next,
            release: Release::Committed { captured },
        }
    }

    /// Point the advisory highlight at `hovered` for a piece dragged from `origin`.
    ///
    /// Hovering the origin clears it. The board is never modified.
    pub fn update_highlight(&mut self, origin: Square, hovered: Square) -> Option<Highlight> {
        self.highlight = (hovered != origin).then(|| Highlight {
            square: hovered,
            advice: Advice::from_legal(self.can_move(origin, hovered)),
        });
        self.highlight
    }

    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    /// Discard everything and return to [`GameState::initial`].
    pub fn reset(&mut self) {
        *self = GameState::initial();
    }
}

#[cfg(test)]
mod tests {
    use dragchess_core::{Board, Piece, Square, Team};

    use super::{GameState, Release};
    use crate::highlight::{Advice, Highlight};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn position(layout: &str, turn: Team) -> GameState {
        GameState::from_position(layout.parse::<Board>().unwrap(), turn)
    }

    #[test]
    fn initial_state() {
        let state = GameState::initial();
        assert_eq!(state.board(), &Board::initial());
        assert_eq!(state.turn(), Team::White);
        assert!(!state.is_game_over());
        assert_eq!(state.highlight(), None);
        assert_eq!(state.winner(), None);
        for team in Team::ALL {
            assert_eq!(state.player(team).score(), 0);
            assert!(state.player(team).captured().is_empty());
        }
    }

    #[test]
    fn legal_move_commits_and_flips_turn() {
        let state = GameState::initial();
        let t = state.apply_release(Piece::WHITE_PAWN, sq("e2"), sq("e4"));
        assert_eq!(t.release, Release::Committed { captured: None });
        assert_eq!(t.state.board().piece_at(sq("e2")), None);
        assert_eq!(t.state.board().piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(t.state.turn(), Team::Black);
        assert_eq!(state, GameState::initial(), "source state is untouched");
    }

    #[test]
    fn illegal_move_snaps_back_unchanged() {
        let state = GameState::initial();
        let t = state.apply_release(Piece::WHITE_PAWN, sq("e2"), sq("e5"));
        assert_eq!(t.release, Release::SnapBack);
        assert_eq!(t.state, state);
    }

    #[test]
    fn release_on_origin_snaps_back() {
        let state = GameState::initial();
        let t = state.apply_release(Piece::WHITE_KNIGHT, sq("b1"), sq("b1"));
        assert_eq!(t.release, Release::SnapBack);
        assert_eq!(t.state, state);
    }

    #[test]
    fn release_on_teammate_snaps_back() {
        let state = GameState::initial();
        let t = state.apply_release(Piece::WHITE_ROOK, sq("a1"), sq("a2"));
        assert_eq!(t.release, Release::SnapBack);
        assert_eq!(t.state.board(), &Board::initial());
    }

    #[test]
    fn capture_scores_for_mover() {
        let state = position("4k3/8/p7/8/8/8/8/R3K3", Team::White);
        let t = state.apply_release(Piece::WHITE_ROOK, sq("a1"), sq("a6"));
        assert_eq!(
            t.release,
            Release::Committed {
                captured: Some(Piece::BLACK_PAWN)
            }
        );
        let white = t.state.player(Team::White);
        assert_eq!(white.score(), 1);
        assert_eq!(white.captured(), &[Piece::BLACK_PAWN]);
        assert_eq!(t.state.player(Team::Black).score(), 0);
        assert!(!t.state.is_game_over());
    }

    #[test]
    fn king_capture_ends_game() {
        let state = position("8/8/8/8/8/8/3k4/4K3", Team::White);
        let t = state.apply_release(Piece::WHITE_KING, sq("e1"), sq("d2"));
        assert!(t.state.is_game_over());
        assert_eq!(t.state.winner(), Some(Team::White));
        assert_eq!(t.state.turn(), Team::Black);
        assert_eq!(t.state.player(Team::White).captured(), &[Piece::BLACK_KING]);
    }

    #[test]
    fn black_king_capture_names_black_winner() {
        let state = position("8/8/8/8/8/8/4K3/3k4", Team::Black);
        let t = state.apply_release(Piece::BLACK_KING, sq("d1"), sq("e2"));
        assert!(t.state.is_game_over());
        assert_eq!(t.state.winner(), Some(Team::Black));
    }

    #[test]
    fn nothing_moves_after_game_over() {
        let state = position("8/8/8/8/8/8/3k4/4K3", Team::White);
        let over = state
            .apply_release(Piece::WHITE_KING, sq("e1"), sq("d2"))
            .state;

        let t = over.apply_release(Piece::WHITE_KING, sq("d2"), sq("d3"));
        assert_eq!(t.release, Release::SnapBack);
        assert_eq!(t.state, over);
    }

    #[test]
    fn highlight_tracks_hovered_square() {
        let mut state = GameState::initial();
        let h = state.update_highlight(sq("g1"), sq("f3"));
        assert_eq!(
            h,
            Some(Highlight {
                square: sq("f3"),
                advice: Advice::Legal
            })
        );

        let h = state.update_highlight(sq("g1"), sq("g3"));
        assert_eq!(h.map(|h| h.advice), Some(Advice::Illegal));

        assert_eq!(state.update_highlight(sq("g1"), sq("g1")), None);
        assert_eq!(state.board(), &Board::initial(), "highlight never touches the board");
    }

    #[test]
    fn reset_restores_initial() {
        let mut state = position("4k3/8/p7/8/8/8/8/R3K3", Team::White);
        state = state
            .apply_release(Piece::WHITE_ROOK, sq("a1"), sq("a6"))
            .state;
        state.update_highlight(sq("e8"), sq("e7"));
        state.reset();
        assert_eq!(state, GameState::initial());
    }
}
