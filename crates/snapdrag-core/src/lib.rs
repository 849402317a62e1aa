//! SnapDrag Core Library
//!
//! Platform-agnostic drag session state machine with grid quantization,
//! nearest-point attraction, and snap-line indicator descriptors. Rendering
//! and host-window wiring live outside this crate.

pub mod config;
pub mod drag;
pub mod indicator;
pub mod input;
pub mod point;
pub mod snap;

pub use config::{ConfigError, ConfigResult, DragConfig};
pub use drag::{
    DragDelegate, DragOutcome, DragSession, DragState, DragStop, Draggable, SnapIndicatorState,
};
pub use indicator::{snap_lines, Axis, SnapLine};
pub use input::{Modifiers, PointerInput};
pub use point::{SnapPoint, SnapTargets};
pub use snap::{nearest, snap_to_grid, DEFAULT_GRID};
