use serde::{Deserialize, Serialize};

use crate::math::linspace;

/// Default pulse window end, ns.
pub const DEFAULT_WINDOW_NS: f64 = 20.0;
/// Default number of samples in the pulse window.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Ordered sample times in ns at which the pulse is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Evenly spaced grid from `start_ns` to `end_ns` inclusive.
    pub fn linspace(start_ns: f64, end_ns: f64, samples: usize) -> Self {
        Self {
            samples: linspace(start_ns, end_ns, samples),
        }
    }

    /// Sample times in ns.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the grid has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::linspace(0.0, DEFAULT_WINDOW_NS, DEFAULT_SAMPLES)
    }
}

impl From<Vec<f64>> for TimeGrid {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}
