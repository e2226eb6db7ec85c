//! The engine boundary: pointer events in, snapshots out.

use tracing::{debug, info};

use dragchess_core::Square;

use crate::config::BoardGeometry;
use crate::error::GestureError;
use crate::geometry::Point;
use crate::gesture::Gesture;
use crate::highlight::Highlight;
use crate::snapshot::Snapshot;
use crate::state::{GameState, Release, Transition};

/// Owns the game state and the one live gesture, if any.
///
/// Events are handled synchronously in arrival order. At most one gesture is
/// active at a time, so a release is always applied before the next touch
/// starts evaluating.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
    geometry: BoardGeometry,
    gesture: Option<Gesture>,
}

impl Session {
    /// A new game with default geometry.
    pub fn new() -> Session {
        Session::default()
    }

    pub fn with_geometry(geometry: BoardGeometry) -> Session {
        Session {
            geometry,
            ..Session::default()
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// The drag in progress, if any.
    #[inline]
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Replace the geometry. Refused mid-drag since positions would be reinterpreted.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) -> Result<(), GestureError> {
        if self.gesture.is_some() {
            return Err(GestureError::GestureInProgress);
        }
        self.geometry = geometry;
        Ok(())
    }

    /// Start over from an arbitrary state, abandoning any drag.
    pub fn load(&mut self, state: GameState) {
        self.gesture = None;
        self.state = state;
    }

    /// Pick up the piece on `square`.
    ///
    /// Returns the piece's resting position, which is where dragging starts.
    pub fn on_touch_start(&mut self, square: Square) -> Result<Point, GestureError> {
        if self.gesture.is_some() {
            return Err(GestureError::GestureInProgress);
        }
        if self.state.is_game_over() {
            return Err(GestureError::GameOver);
        }
        let piece = self
            .state
            .board()
            .piece_at(square)
            .ok_or_else(|| GestureError::EmptySquare {
                square: square.to_string(),
            })?;
        if piece.team() != self.state.turn() {
            return Err(GestureError::NotOnTurn {
                team: piece.team().name(),
            });
        }

        let home = self.geometry.align_center(square);
        debug!(piece = ?piece, %square, "gesture started");
        self.gesture = Some(Gesture::begin(piece, square, home));
        Ok(home)
    }

    /// The dragged piece moved to `proposed`.
    ///
    /// Returns the advisory highlight to draw. It is recomputed only when the
    /// snapped square changes between ticks.
    pub fn on_drag_tick(&mut self, proposed: Point) -> Result<Option<Highlight>, GestureError> {
        let position = self.geometry.clamp(proposed);
        let square = self.geometry.snap(position);
        let gesture = self.gesture.as_mut().ok_or(GestureError::NoGesture)?;

        if gesture.track(position, square) {
            let highlight = self.state.update_highlight(gesture.origin(), square);
            debug!(%square, ?highlight, "highlight updated");
        }
        Ok(self.state.highlight())
    }

    /// The dragged piece was dropped at `proposed`.
    ///
    /// Returns `Some(position)` when the piece must snap back there, or
    /// `None` when the move was committed.
    pub fn on_release(&mut self, proposed: Point) -> Result<Option<Point>, GestureError> {
        let gesture = self.gesture.take().ok_or(GestureError::NoGesture)?;
        let dest = self.geometry.snap(proposed);

        let Transition { state, release } =
            self.state
                .apply_release(gesture.piece(), gesture.origin(), dest);
        self.state = state;

        match release {
            Release::Committed { .. } => Ok(None),
            Release::SnapBack => {
                debug!(origin = %gesture.origin(), %dest, "snap back");
                Ok(Some(gesture.home()))
            }
        }
    }

    /// The drag was aborted by the render layer. Same outcome as an illegal drop.
    pub fn on_cancel(&mut self) -> Result<Point, GestureError> {
        let gesture = self.gesture.take().ok_or(GestureError::NoGesture)?;
        self.state.clear_highlight();
        debug!(origin = %gesture.origin(), "gesture cancelled");
        Ok(gesture.home())
    }

    /// Back to the starting position. Always allowed, even mid-drag.
    pub fn reset(&mut self) {
        self.gesture = None;
        self.state.reset();
        info!("game reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.geometry)
    }
}
