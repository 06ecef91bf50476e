//! Voltage pulse shape: fast exponential rise, `L/R` exponential decay.

use std::iter::FusedIterator;
use std::slice;

use serde::{Deserialize, Serialize};
use snspd_core::DetectorConstants;

use crate::math::clamp;

const MIN_INDUCTANCE_H: f64 = 1e-12;
const MIN_LOAD_OHM: f64 = 1.0;
const MIN_TIME_CONSTANT_NS: f64 = 1e-3;

/// Closed-form pulse parameters; evaluate at any time with [`PulseShape::voltage_at`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseShape {
    /// Nominal peak amplitude, arbitrary units.
    pub peak_amplitude: f64,
    /// Decay constant `tau = Lk / R_load`, ns.
    pub decay_constant_ns: f64,
    /// Rise time constant, ns.
    pub rise_time_ns: f64,
}

impl PulseShape {
    /// Derives the shape from bias, load and kinetic inductance.
    pub fn new(
        ib_over_ic: f64,
        load_ohm: f64,
        kinetic_inductance_nh: f64,
        constants: &DetectorConstants,
    ) -> Self {
        let inductance_h = (kinetic_inductance_nh * 1e-9).max(MIN_INDUCTANCE_H);
        let load_ohm = load_ohm.max(MIN_LOAD_OHM);
        let decay_constant_ns = (inductance_h / load_ohm) * 1e9;
        let bias = clamp(ib_over_ic, 0.0, 1.1);
        let peak_amplitude = constants.amp_scale * (0.5 + 0.5 * bias);
        Self {
            peak_amplitude,
            decay_constant_ns,
            rise_time_ns: constants.jitter_rise_ps / 1000.0,
        }
    }

    /// Voltage at `t_ns`; negative times are treated as zero.
    pub fn voltage_at(&self, t_ns: f64) -> f64 {
        let t = t_ns.max(0.0);
        let rise = 1.0 - (-t / self.rise_time_ns.max(MIN_TIME_CONSTANT_NS)).exp();
        let decay = (-t / self.decay_constant_ns.max(MIN_TIME_CONSTANT_NS)).exp();
        self.peak_amplitude * rise * decay
    }

    /// Lazily evaluates the pulse over `grid`. Calling again restarts from the first sample.
    pub fn samples<'a>(&self, grid: &'a [f64]) -> PulseSamples<'a> {
        PulseSamples {
            shape: *self,
            times: grid.iter(),
        }
    }
}

/// Iterator over pulse voltages at successive grid times.
#[derive(Debug, Clone)]
pub struct PulseSamples<'a> {
    shape: PulseShape,
    times: slice::Iter<'a, f64>,
}

impl Iterator for PulseSamples<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.times.next().map(|&t| self.shape.voltage_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.times.size_hint()
    }
}

impl ExactSizeIterator for PulseSamples<'_> {}

impl FusedIterator for PulseSamples<'_> {}

/// Materialised pulse over a time grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseTrace {
    /// Voltage per grid sample, same length as the grid.
    pub voltages: Vec<f64>,
    /// Decay constant, ns.
    pub decay_constant_ns: f64,
    /// Nominal peak amplitude, arbitrary units.
    pub peak_amplitude: f64,
}

impl PulseTrace {
    /// Largest sampled voltage, or 0 for an empty trace.
    pub fn max_voltage(&self) -> f64 {
        self.voltages.iter().copied().fold(0.0, f64::max)
    }
}

/// Samples the pulse over `time_grid_ns` and reports its decay constant and peak.
pub fn pulse_waveform(
    time_grid_ns: &[f64],
    ib_over_ic: f64,
    load_ohm: f64,
    kinetic_inductance_nh: f64,
    constants: &DetectorConstants,
) -> PulseTrace {
    let shape = PulseShape::new(ib_over_ic, load_ohm, kinetic_inductance_nh, constants);
    PulseTrace {
        voltages: shape.samples(time_grid_ns).collect(),
        decay_constant_ns: shape.decay_constant_ns,
        peak_amplitude: shape.peak_amplitude,
    }
}
