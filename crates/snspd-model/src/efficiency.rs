//! Internal and system detection efficiency.

use snspd_core::constants::{REFERENCE_WAVELENGTH_NM, REFERENCE_WIDTH_NM};
use snspd_core::DetectorConstants;

use crate::math::clamp;

/// Upper saturation of the normalised bias seen by the efficiency curve.
pub const MAX_EFFICIENCY_BIAS: f64 = 1.1;
/// Bounds keeping the logistic centre physically plausible.
pub const CENTER_BOUNDS: (f64, f64) = (0.7, 0.98);

/// Bias (fraction of Ic) at which the internal efficiency reaches one half.
///
/// Longer wavelengths and wider wires push the centre up.
pub fn logistic_center(wavelength_nm: f64, width_nm: f64, constants: &DetectorConstants) -> f64 {
    let d_lambda = (wavelength_nm - REFERENCE_WAVELENGTH_NM) / 500.0;
    let d_width = (REFERENCE_WIDTH_NM - width_nm) / 50.0;
    let center = constants.ide_center_base
        + constants.ide_center_lambda_sens * d_lambda
        + constants.ide_center_width_sens * d_width;
    clamp(center, CENTER_BOUNDS.0, CENTER_BOUNDS.1)
}

/// Probability that an absorbed photon produces a detectable pulse.
///
/// Non-decreasing in `ib_over_ic` for fixed wavelength and width.
pub fn internal_detection_efficiency(
    ib_over_ic: f64,
    wavelength_nm: f64,
    width_nm: f64,
    constants: &DetectorConstants,
) -> f64 {
    let bias = clamp(ib_over_ic, 0.0, MAX_EFFICIENCY_BIAS);
    let center = logistic_center(wavelength_nm, width_nm, constants);
    let x = constants.ide_steepness * (bias - center);
    clamp(1.0 / (1.0 + (-x).exp()), 0.0, 1.0)
}

/// End-to-end detection probability: `absorption * coupling * ide`.
///
/// Coupling is passed explicitly; all three factors are clamped to [0, 1].
pub fn system_detection_efficiency(internal_efficiency: f64, absorption: f64, coupling: f64) -> f64 {
    let ide = clamp(internal_efficiency, 0.0, 1.0);
    let absorption = clamp(absorption, 0.0, 1.0);
    let coupling = clamp(coupling, 0.0, 1.0);
    clamp(absorption * coupling * ide, 0.0, 1.0)
}
