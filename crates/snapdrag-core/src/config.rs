//! Draggable configuration.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::point::SnapTargets;
use crate::snap::DEFAULT_GRID;

/// Configuration errors. These are programmer errors, not transient faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("snap targets configured without a snap distance")]
    MissingSnapDistance,
}

/// Result type for operations that can hit a configuration error.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Caller-supplied configuration, immutable for the draggable's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Grid cell size per axis. The default 1x1 cell disables quantization.
    pub grid: (f64, f64),
    /// Per-axis candidate lists for point snapping.
    pub snap_targets: Option<SnapTargets>,
    /// Attraction tolerance. Must be present whenever `snap_targets` is; its
    /// absence surfaces as [`ConfigError::MissingSnapDistance`] the moment
    /// point snapping runs.
    pub snap_distance: Option<f64>,
    /// Indicator-only mode: snap lines track the cursor-derived coordinate
    /// instead of a list candidate, and the position is never attracted.
    pub crosshairs: bool,
    /// Emit one snap-line descriptor per candidate instead of only the
    /// active target.
    pub show_all_snap_lines: bool,
    /// Position before the first drag.
    pub initial_position: Point,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID,
            snap_targets: None,
            snap_distance: None,
            crosshairs: false,
            show_all_snap_lines: false,
            initial_position: Point::ZERO,
        }
    }
}

impl DragConfig {
    /// The snap distance, required once point snapping is reached.
    pub(crate) fn required_snap_distance(&self) -> ConfigResult<f64> {
        self.snap_distance.ok_or(ConfigError::MissingSnapDistance)
    }
}
