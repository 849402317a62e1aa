//! Styling and painting for the dragged surface.

use egui::{CornerRadius, Painter, Rect, Stroke, StrokeKind};

use crate::{sizing, theme};

/// Visual style of the draggable surface.
#[derive(Clone)]
pub struct DragVisuals {
    /// Surface fill color
    pub fill: egui::Color32,
    /// Border stroke
    pub stroke: Stroke,
    /// Corner radius
    pub corner_radius: u8,
}

/// Style for the current drag state (the presentation hook).
pub fn drag_visuals(is_dragging: bool) -> DragVisuals {
    DragVisuals {
        fill: if is_dragging {
            theme::SURFACE_ACTIVE
        } else {
            theme::SURFACE
        },
        stroke: Stroke::new(
            1.0,
            if is_dragging {
                theme::TARGET
            } else {
                theme::BORDER
            },
        ),
        corner_radius: sizing::SURFACE_RADIUS,
    }
}

/// Fill the draggable surface with the given visuals.
pub fn paint_draggable(painter: &Painter, rect: Rect, visuals: &DragVisuals) {
    painter.rect(
        rect,
        CornerRadius::same(visuals.corner_radius),
        visuals.fill,
        visuals.stroke,
        StrokeKind::Inside,
    );
}
