//! egui painting helpers for draggable surfaces and snap-line indicators.
//!
//! This crate turns the descriptor types exported by `snapdrag-core` into
//! pixels:
//!
//! - **Lines**: full-viewport snap-line painting from [`snapdrag_core::SnapLine`]
//! - **Surface**: fill/stroke styling for the dragged element

pub mod lines;
pub mod surface;

pub use lines::paint_snap_lines;
pub use surface::{drag_visuals, paint_draggable, DragVisuals};

/// Standard sizing constants used across the helpers.
pub mod sizing {
    /// Stroke width for the active snap target line
    pub const TARGET_LINE_WIDTH: f32 = 1.5;
    /// Stroke width for muted candidate lines
    pub const CANDIDATE_LINE_WIDTH: f32 = 1.0;
    /// Corner radius of the dragged surface
    pub const SURFACE_RADIUS: u8 = 4;
}

/// Standard colors used across the helpers.
pub mod theme {
    use egui::Color32;

    /// Active snap target line (blue)
    pub const TARGET: Color32 = Color32::from_rgb(59, 130, 246);
    /// Muted candidate line
    pub const LINE_MUTED: Color32 = Color32::from_rgb(210, 210, 210);
    /// Surface fill at rest
    pub const SURFACE: Color32 = Color32::from_rgb(245, 245, 245);
    /// Surface fill while dragging
    pub const SURFACE_ACTIVE: Color32 = Color32::from_rgb(235, 245, 255);
    /// Surface border
    pub const BORDER: Color32 = Color32::from_rgb(180, 180, 180);
}
