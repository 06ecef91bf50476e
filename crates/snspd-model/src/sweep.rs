use serde::{Deserialize, Serialize};
use snspd_core::{sanitize, DetectorConstants, DeviceParams};

use crate::efficiency::{internal_detection_efficiency, system_detection_efficiency};
use crate::math::linspace;

fn default_start() -> f64 {
    0.5
}

fn default_end() -> f64 {
    1.1
}

fn default_points() -> usize {
    120
}

/// Bias range over which the efficiency curves are traced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasSweep {
    /// First bias value.
    #[serde(default = "default_start")]
    pub start: f64,
    /// Last bias value (inclusive).
    #[serde(default = "default_end")]
    pub end: f64,
    /// Number of evenly spaced points.
    #[serde(default = "default_points")]
    pub points: usize,
}

impl Default for BiasSweep {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            points: default_points(),
        }
    }
}

/// Efficiencies at a single bias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasPoint {
    /// Normalised bias.
    pub ib_over_ic: f64,
    /// Internal detection efficiency.
    pub ide: f64,
    /// System detection efficiency.
    pub sde: f64,
}

/// Traces IDE and SDE against bias, holding every other parameter fixed.
///
/// The bias in `params` is ignored; each point uses its own sweep value.
pub fn bias_sweep(
    params: &DeviceParams,
    constants: &DetectorConstants,
    sweep: &BiasSweep,
) -> Vec<BiasPoint> {
    let p = sanitize(params).params;
    linspace(sweep.start, sweep.end, sweep.points)
        .into_iter()
        .map(|bias| {
            let ide = internal_detection_efficiency(bias, p.wavelength_nm, p.width_nm, constants);
            BiasPoint {
                ib_over_ic: bias,
                ide,
                sde: system_detection_efficiency(ide, p.absorption, p.coupling),
            }
        })
        .collect()
}
