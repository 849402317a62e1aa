//! Drag session state machine and the snapping pipeline.
//!
//! All transitions run synchronously inside the host's pointer-event handler.
//! Events for a session are processed in arrival order: down, a sequence of
//! moves, then up. A drag that never receives pointer-up stays open; ending
//! it (e.g. on window blur) is the host's job.

use kurbo::{Point, Vec2};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, DragConfig};
use crate::indicator::{self, SnapLine};
use crate::input::PointerInput;
use crate::point::SnapPoint;
use crate::snap::{nearest, snap_to_grid};

/// Result of the caller's drag-stop hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Keep the final position.
    Commit,
    /// Roll the position back to where the drag started.
    Reject,
}

/// Final position handed to the drag-stop hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStop {
    /// The final (possibly snapped) position.
    pub position: Point,
    /// Delta from the position at drag start.
    pub delta: Vec2,
}

/// Caller seam for drag policy and host wiring.
///
/// Every method has a default, so a unit delegate gives plain dragging with
/// snapping always on and every drop committed.
pub trait DragDelegate {
    /// Whether grid snapping should run for this move event.
    fn should_snap(&self, _event: &PointerInput) -> bool {
        true
    }

    /// Finalization hook; [`DragOutcome::Reject`] rolls the position back.
    fn on_drag_stop(&mut self, _stop: DragStop) -> DragOutcome {
        DragOutcome::Commit
    }

    /// Global pointer-move observation starts (pointer-down).
    fn begin_move_capture(&mut self) {}

    /// Global pointer-move observation ends (pointer-up).
    fn end_move_capture(&mut self) {}
}

/// Plain dragging: always snap, always commit.
impl DragDelegate for () {}

/// Subscription handle for global pointer-move observation.
///
/// Acquired on pointer-down, released exactly once on pointer-up; release is
/// idempotent, so the rollback branch cannot double-release.
#[derive(Debug)]
struct CaptureGuard {
    released: bool,
}

impl CaptureGuard {
    fn acquire<D: DragDelegate>(delegate: &mut D) -> Self {
        delegate.begin_move_capture();
        Self { released: false }
    }

    fn release<D: DragDelegate>(&mut self, delegate: &mut D) {
        if !self.released {
            self.released = true;
            delegate.end_move_capture();
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        // The delegate is unreachable from here, so the host hook cannot be
        // invoked; flag the leak instead.
        if !self.released {
            warn!("drag session dropped while still holding move capture");
        }
    }
}

/// Snapshot taken at pointer-down, immutable for the rest of the gesture.
/// Present iff a drag is in progress.
#[derive(Debug)]
pub struct DragSession {
    /// Pointer position at pointer-down.
    pub pointer_origin: Point,
    /// Element position at pointer-down, kept for preview and rollback.
    pub position_at_start: Point,
    capture: CaptureGuard,
}

/// The drag state machine: Idle or Dragging, nothing else.
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    /// Check whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}

/// Active snap targets per axis.
///
/// An axis is `Some` only when the current position on that axis exactly
/// equals the point's value. Re-derived on every move, never carried forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapIndicatorState {
    /// Active target on the horizontal axis (`position.x`).
    pub x: Option<SnapPoint>,
    /// Active target on the vertical axis (`position.y`).
    pub y: Option<SnapPoint>,
}

impl SnapIndicatorState {
    /// Drop both targets.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Position and indicators produced by one move event. Committed only as a
/// whole, after the full pipeline succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MoveResolution {
    position: Point,
    indicators: SnapIndicatorState,
}

/// Run the snapping pipeline for one move event: raw delta, grid
/// quantization, then distance-gated point attraction.
fn resolve_move(
    config: &DragConfig,
    session: &DragSession,
    event: &PointerInput,
    snap_enabled: bool,
) -> ConfigResult<MoveResolution> {
    let raw = session.position_at_start + (event.position - session.pointer_origin);
    let mut position = if snap_enabled {
        snap_to_grid(config.grid, raw)
    } else {
        raw
    };

    let mut indicators = SnapIndicatorState::default();
    if let Some(targets) = &config.snap_targets {
        let snap_distance = config.required_snap_distance()?;

        let (near_x, near_y) = if config.crosshairs {
            // Crosshair mode wraps the current coordinate itself, so the
            // distance gate below passes at zero distance and the position
            // is never pulled toward a list candidate.
            (SnapPoint::new(position.x), SnapPoint::new(position.y))
        } else {
            (
                nearest(position.x, &targets.x),
                nearest(position.y, &targets.y),
            )
        };

        if (near_x.value - position.x).abs() <= snap_distance {
            position.x = near_x.value;
        }
        if (near_y.value - position.y).abs() <= snap_distance {
            position.y = near_y.value;
        }

        // An indicator is shown only when the final coordinate coincides
        // with the indicated value.
        indicators.x = (near_x.value == position.x).then_some(near_x);
        indicators.y = (near_y.value == position.y).then_some(near_y);
    }

    Ok(MoveResolution {
        position,
        indicators,
    })
}

/// A pointer-driven draggable position with optional grid and point snapping.
///
/// The host feeds it pointer events and reads back [`Draggable::position`],
/// [`Draggable::is_dragging`] and [`Draggable::snap_lines`] for placement and
/// indicator rendering.
#[derive(Debug)]
pub struct Draggable<D: DragDelegate> {
    config: DragConfig,
    delegate: D,
    position: Point,
    state: DragState,
    indicators: SnapIndicatorState,
}

impl<D: DragDelegate> Draggable<D> {
    /// Create a draggable at the configured initial position.
    pub fn new(config: DragConfig, delegate: D) -> Self {
        let position = config.initial_position;
        Self {
            config,
            delegate,
            position,
            state: DragState::Idle,
            indicators: SnapIndicatorState::default(),
        }
    }

    /// Current on-screen offset.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Active snap targets per axis.
    pub fn indicators(&self) -> &SnapIndicatorState {
        &self.indicators
    }

    /// The configuration this draggable was built with.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// The caller's delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the caller's delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Snap-line descriptors for the current state.
    pub fn snap_lines(&self) -> Vec<SnapLine> {
        indicator::snap_lines(&self.indicators, self.is_dragging(), &self.config)
    }

    /// Open a drag session.
    ///
    /// Ignored entirely while a drag is already in progress, so a spurious
    /// re-entrant down event cannot restart the session or move the start
    /// snapshot.
    pub fn pointer_down(&mut self, event: &PointerInput) {
        if self.state.is_dragging() {
            trace!("pointer-down ignored: drag already in progress");
            return;
        }
        debug!("drag session opened at {:?}", event.position);
        let capture = CaptureGuard::acquire(&mut self.delegate);
        self.state = DragState::Dragging(DragSession {
            pointer_origin: event.position,
            position_at_start: self.position,
            capture,
        });
    }

    /// Apply one move event. A no-op while idle.
    ///
    /// Position and indicators are committed only if the whole pipeline
    /// succeeds; a configuration error leaves both untouched.
    pub fn pointer_move(&mut self, event: &PointerInput) -> ConfigResult<()> {
        let DragState::Dragging(session) = &self.state else {
            return Ok(());
        };
        let snap_enabled = self.delegate.should_snap(event);
        let resolved = resolve_move(&self.config, session, event, snap_enabled)?;
        trace!("move resolved to {:?}", resolved.position);
        self.position = resolved.position;
        self.indicators = resolved.indicators;
        Ok(())
    }

    /// Close the drag session. A no-op while idle.
    ///
    /// Releases move capture, then hands the final position to the delegate;
    /// [`DragOutcome::Reject`] restores the position at drag start. Indicators
    /// are cleared on both branches.
    pub fn pointer_up(&mut self) {
        let DragState::Dragging(mut session) = std::mem::take(&mut self.state) else {
            return;
        };
        session.capture.release(&mut self.delegate);

        let stop = DragStop {
            position: self.position,
            delta: self.position - session.position_at_start,
        };
        match self.delegate.on_drag_stop(stop) {
            DragOutcome::Reject => {
                debug!("drag rejected, rolling back to {:?}", session.position_at_start);
                self.position = session.position_at_start;
            }
            DragOutcome::Commit => {
                debug!("drag committed at {:?}", self.position);
            }
        }
        self.indicators.clear();
    }
}
