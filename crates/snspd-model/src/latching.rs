//! Heuristic susceptibility to latching.

use std::fmt;

use serde::{Deserialize, Serialize};
use snspd_core::DetectorConstants;

use crate::math::clamp;

/// Score below which the risk is [`LatchingLevel::Low`].
pub const MODERATE_FLOOR: f64 = 1.0;

/// Coarse latching risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LatchingLevel {
    /// `score < 1`.
    Low,
    /// `1 <= score < latch_thresh`.
    Moderate,
    /// `score >= latch_thresh`.
    High,
}

impl LatchingLevel {
    /// Classifies a score. Boundary values belong to the higher band.
    pub fn classify(score: f64, threshold: f64) -> Self {
        if score < MODERATE_FLOOR {
            LatchingLevel::Low
        } else if score < threshold {
            LatchingLevel::Moderate
        } else {
            LatchingLevel::High
        }
    }

    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            LatchingLevel::Low => "Low",
            LatchingLevel::Moderate => "Moderate",
            LatchingLevel::High => "High",
        }
    }
}

impl fmt::Display for LatchingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latching score and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatchingRisk {
    /// `bias * (R_load / R_ref) * (Lk_scale / Lk)`.
    pub score: f64,
    /// Band the score falls into.
    pub level: LatchingLevel,
}

/// Higher bias, higher load and lower inductance all raise the score.
pub fn latching_risk(
    ib_over_ic: f64,
    load_ohm: f64,
    kinetic_inductance_nh: f64,
    constants: &DetectorConstants,
) -> LatchingRisk {
    let bias = clamp(ib_over_ic, 0.0, 1.2);
    let score = bias
        * (load_ohm / constants.latch_ref_rload)
        * (constants.latch_scale_lk_nh / kinetic_inductance_nh.max(1e-3));
    LatchingRisk {
        score,
        level: LatchingLevel::classify(score, constants.latch_thresh),
    }
}
