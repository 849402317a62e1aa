//! Snap point model: attraction targets with optional caller metadata.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A designated attraction target value on one axis.
///
/// `source` is caller-defined metadata, typically the id of whatever the
/// target was derived from (a shape edge, a guide, a sibling element). It is
/// carried through unchanged and never interpreted by the core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapPoint {
    /// The target coordinate on this axis.
    pub value: f64,
    /// Opaque caller reference, carried through unchanged.
    #[serde(default)]
    pub source: Option<Uuid>,
}

impl SnapPoint {
    /// Wrap a bare coordinate with no caller reference.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            source: None,
        }
    }

    /// Create a snap point carrying a caller reference.
    pub fn with_source(value: f64, source: Uuid) -> Self {
        Self {
            value,
            source: Some(source),
        }
    }
}

/// Two snap points are equal iff their values are equal; `source` is not
/// part of identity.
impl PartialEq for SnapPoint {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<f64> for SnapPoint {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Ordered candidate lists, one per axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapTargets {
    /// Candidates for the horizontal position (`position.x`).
    #[serde(default)]
    pub x: Vec<SnapPoint>,
    /// Candidates for the vertical position (`position.y`).
    #[serde(default)]
    pub y: Vec<SnapPoint>,
}

impl SnapTargets {
    /// Build candidate lists from bare coordinates.
    pub fn from_values(x: impl IntoIterator<Item = f64>, y: impl IntoIterator<Item = f64>) -> Self {
        Self {
            x: x.into_iter().map(SnapPoint::new).collect(),
            y: y.into_iter().map(SnapPoint::new).collect(),
        }
    }
}
