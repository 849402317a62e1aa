//! Snap-line descriptors for rendering by the host.

use serde::{Deserialize, Serialize};

use crate::config::DragConfig;
use crate::drag::SnapIndicatorState;
use crate::point::SnapPoint;

/// Which axis a snap line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// A vertical line at an x value.
    Vertical,
    /// A horizontal line at a y value.
    Horizontal,
}

/// A renderable snap-line descriptor.
///
/// In show-all mode each descriptor carries exactly one axis; in active-only
/// mode a single descriptor carries both (either possibly absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapLine {
    /// Stable identity for list rendering, derived from axis and value.
    pub key: String,
    /// Vertical line position (a snapped x value).
    pub x: Option<SnapPoint>,
    /// Horizontal line position (a snapped y value).
    pub y: Option<SnapPoint>,
    /// Whether this line is the currently active snap target.
    pub is_target: bool,
    /// Whether a drag is in progress.
    pub is_dragging: bool,
}

impl SnapLine {
    fn candidate(axis: Axis, point: SnapPoint, is_target: bool, is_dragging: bool) -> Self {
        let (key, x, y) = match axis {
            Axis::Vertical => (format!("x:{}", point.value), Some(point), None),
            Axis::Horizontal => (format!("y:{}", point.value), None, Some(point)),
        };
        Self {
            key,
            x,
            y,
            is_target,
            is_dragging,
        }
    }
}

/// Build snap-line descriptors for the current snap state.
///
/// With `show_all_snap_lines` and configured candidate lists this emits one
/// descriptor per candidate, tagging the active targets; otherwise it emits a
/// single descriptor carrying the active points. Pure; no failure modes.
pub fn snap_lines(
    state: &SnapIndicatorState,
    is_dragging: bool,
    config: &DragConfig,
) -> Vec<SnapLine> {
    match &config.snap_targets {
        Some(targets) if config.show_all_snap_lines => {
            let mut lines = Vec::with_capacity(targets.x.len() + targets.y.len());
            for point in &targets.x {
                let is_target = state.x == Some(*point);
                lines.push(SnapLine::candidate(
                    Axis::Vertical,
                    *point,
                    is_target,
                    is_dragging,
                ));
            }
            for point in &targets.y {
                let is_target = state.y == Some(*point);
                lines.push(SnapLine::candidate(
                    Axis::Horizontal,
                    *point,
                    is_target,
                    is_dragging,
                ));
            }
            lines
        }
        _ => vec![SnapLine {
            key: "active".to_string(),
            x: state.x,
            y: state.y,
            is_target: true,
            is_dragging,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::SnapTargets;

    fn config_with_targets(show_all: bool) -> DragConfig {
        DragConfig {
            snap_targets: Some(SnapTargets::from_values([10.0, 20.0], [5.0])),
            snap_distance: Some(4.0),
            show_all_snap_lines: show_all,
            ..DragConfig::default()
        }
    }

    #[test]
    fn test_active_only_single_descriptor() {
        let state = SnapIndicatorState {
            x: Some(SnapPoint::new(20.0)),
            y: None,
        };
        let lines = snap_lines(&state, true, &config_with_targets(false));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].x, Some(SnapPoint::new(20.0)));
        assert_eq!(lines[0].y, None);
        assert!(lines[0].is_target);
        assert!(lines[0].is_dragging);
    }

    #[test]
    fn test_active_only_without_targets_configured() {
        let lines = snap_lines(&SnapIndicatorState::default(), false, &DragConfig::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].x, None);
        assert_eq!(lines[0].y, None);
        assert!(lines[0].is_target);
        assert!(!lines[0].is_dragging);
    }

    #[test]
    fn test_show_all_emits_every_candidate() {
        let state = SnapIndicatorState {
            x: Some(SnapPoint::new(20.0)),
            y: Some(SnapPoint::new(5.0)),
        };
        let lines = snap_lines(&state, true, &config_with_targets(true));

        assert_eq!(lines.len(), 3);
        let targets: Vec<bool> = lines.iter().map(|line| line.is_target).collect();
        assert_eq!(targets, vec![false, true, true]);
        assert!(lines.iter().all(|line| line.is_dragging));
    }

    #[test]
    fn test_show_all_keys_are_stable_and_distinct() {
        let lines = snap_lines(
            &SnapIndicatorState::default(),
            false,
            &config_with_targets(true),
        );

        assert_eq!(lines[0].key, "x:10");
        assert_eq!(lines[1].key, "x:20");
        assert_eq!(lines[2].key, "y:5");
        assert!(lines.iter().all(|line| !line.is_target));
    }
}
