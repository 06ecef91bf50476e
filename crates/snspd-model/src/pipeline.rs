//! One full pass from device parameters to every metric.

use serde::{Deserialize, Serialize};
use snspd_core::{sanitize, DetectorConstants, DeviceParams, RangeWarning};

use crate::efficiency::{internal_detection_efficiency, system_detection_efficiency};
use crate::geometry::kinetic_inductance_nh;
use crate::grid::TimeGrid;
use crate::jitter::jitter_fwhm_ps;
use crate::latching::{latching_risk, LatchingRisk};
use crate::noise::dark_count_rate_hz;
use crate::pulse::{pulse_waveform, PulseTrace};

/// Scalar metrics produced by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorMetrics {
    /// Kinetic inductance, nH.
    pub kinetic_inductance_nh: f64,
    /// Internal detection efficiency in [0, 1].
    pub internal_detection_efficiency: f64,
    /// System detection efficiency in [0, 1].
    pub system_detection_efficiency: f64,
    /// Dark count rate, Hz.
    pub dark_count_rate_hz: f64,
    /// Pulse decay constant, ns.
    pub decay_constant_ns: f64,
    /// Nominal pulse peak amplitude, arbitrary units.
    pub peak_amplitude: f64,
    /// Timing jitter FWHM, ps.
    pub jitter_fwhm_ps: f64,
    /// Latching heuristic.
    pub latching: LatchingRisk,
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Parameters after sanitization, as seen by the formulas.
    pub params: DeviceParams,
    /// Scalar metrics.
    pub metrics: DetectorMetrics,
    /// Grid the pulse was sampled on.
    pub grid: TimeGrid,
    /// Sampled pulse waveform.
    pub pulse: PulseTrace,
    /// Inputs that were clamped or fell outside the validated range.
    pub warnings: Vec<RangeWarning>,
}

/// Evaluates on the default 0-20 ns, 1000-sample pulse grid.
pub fn evaluate(params: &DeviceParams, constants: &DetectorConstants) -> Evaluation {
    evaluate_with_grid(params, constants, &TimeGrid::default())
}

/// Sanitizes `params` once, then runs geometry, efficiency, noise, pulse,
/// jitter and latching in dependency order.
pub fn evaluate_with_grid(
    params: &DeviceParams,
    constants: &DetectorConstants,
    grid: &TimeGrid,
) -> Evaluation {
    let sanitized = sanitize(params);
    let p = sanitized.params;

    let lk_nh = kinetic_inductance_nh(p.length_um, p.width_nm, p.thickness_nm, constants);
    let ide = internal_detection_efficiency(p.ib_over_ic, p.wavelength_nm, p.width_nm, constants);
    let sde = system_detection_efficiency(ide, p.absorption, p.coupling);
    let dcr = dark_count_rate_hz(p.ib_over_ic, p.temperature_k, p.wavelength_nm, constants);
    tracing::debug!(lk_nh, ide, sde, dcr, "efficiency and noise evaluated");

    let pulse = pulse_waveform(grid.as_slice(), p.ib_over_ic, p.load_ohm, lk_nh, constants);
    let jitter = jitter_fwhm_ps(pulse.peak_amplitude, constants);
    let latching = latching_risk(p.ib_over_ic, p.load_ohm, lk_nh, constants);
    tracing::debug!(
        tau_ns = pulse.decay_constant_ns,
        v_peak = pulse.peak_amplitude,
        jitter_ps = jitter,
        latch_score = latching.score,
        latch_level = %latching.level,
        "timing evaluated"
    );

    Evaluation {
        params: p,
        metrics: DetectorMetrics {
            kinetic_inductance_nh: lk_nh,
            internal_detection_efficiency: ide,
            system_detection_efficiency: sde,
            dark_count_rate_hz: dcr,
            decay_constant_ns: pulse.decay_constant_ns,
            peak_amplitude: pulse.peak_amplitude,
            jitter_fwhm_ps: jitter,
            latching,
        },
        grid: grid.clone(),
        pulse,
        warnings: sanitized.warnings,
    }
}
