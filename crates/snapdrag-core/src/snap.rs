//! Grid quantization and nearest-point search.

use kurbo::Point;

use crate::point::SnapPoint;

/// Default grid cell size. Quantization against a 1x1 grid is the identity,
/// so grid snapping is effectively off until a larger cell is configured.
pub const DEFAULT_GRID: (f64, f64) = (1.0, 1.0);

/// Quantize a position to the nearest grid cell.
///
/// Rounding is half-away-from-zero (`f64::round`). Both axes quantize against
/// the horizontal cell size; each axis scales back by its own cell size, so a
/// non-square grid rounds y against the x divisor. Square grids and the
/// default 1x1 grid are unaffected.
// TODO: decide whether the vertical axis should divide by `cell.1` for
// non-square grids; changing it alters every caller with anisotropic cells.
pub fn snap_to_grid(cell: (f64, f64), position: Point) -> Point {
    Point::new(
        (position.x / cell.0).round() * cell.0,
        (position.y / cell.0).round() * cell.1,
    )
}

/// Find the candidate nearest to `target`.
///
/// Ties keep the earliest candidate in list order. An empty list yields a
/// synthetic point at `target` itself, i.e. "no snap".
pub fn nearest(target: f64, candidates: &[SnapPoint]) -> SnapPoint {
    let mut best: Option<SnapPoint> = None;
    for candidate in candidates {
        let closer = match best {
            Some(current) => (candidate.value - target).abs() < (current.value - target).abs(),
            None => true,
        };
        if closer {
            best = Some(*candidate);
        }
    }
    best.unwrap_or_else(|| SnapPoint::new(target))
}
