//! Pointer input payloads delivered to the drag state machine.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A pointer down/move/up payload.
///
/// The host translates its native events (DOM, winit, egui) into this and
/// feeds them to [`Draggable`](crate::Draggable) in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Pointer position in the host's coordinate space.
    pub position: Point,
    /// Modifier keys held during the event.
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// Create an input with no modifiers held.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::default(),
        }
    }

    /// Shorthand for [`PointerInput::new`] from bare coordinates.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y))
    }
}
