//! Snap-line painting from core descriptors.

use egui::{Painter, Pos2, Rect, Stroke};
use snapdrag_core::SnapLine;

use crate::{sizing, theme};

fn line_stroke(line: &SnapLine) -> Stroke {
    if line.is_target {
        Stroke::new(sizing::TARGET_LINE_WIDTH, theme::TARGET)
    } else {
        Stroke::new(sizing::CANDIDATE_LINE_WIDTH, theme::LINE_MUTED)
    }
}

/// Paint snap-line descriptors across the viewport.
///
/// Descriptor values are interpreted in the painter's coordinate space; the
/// host converts beforehand if its drag coordinates differ. Lines outside the
/// viewport are skipped.
pub fn paint_snap_lines(painter: &Painter, viewport: Rect, lines: &[SnapLine]) {
    for line in lines {
        let stroke = line_stroke(line);
        if let Some(point) = line.x {
            let x = point.value as f32;
            if x >= viewport.left() && x <= viewport.right() {
                painter.line_segment(
                    [
                        Pos2::new(x, viewport.top()),
                        Pos2::new(x, viewport.bottom()),
                    ],
                    stroke,
                );
            }
        }
        if let Some(point) = line.y {
            let y = point.value as f32;
            if y >= viewport.top() && y <= viewport.bottom() {
                painter.line_segment(
                    [
                        Pos2::new(viewport.left(), y),
                        Pos2::new(viewport.right(), y),
                    ],
                    stroke,
                );
            }
        }
    }
}
