use snspd_core::constants::{DCR_REFERENCE_BIAS, REFERENCE_WAVELENGTH_NM};
use snspd_core::DetectorConstants;

use crate::math::clamp;

/// Lowest temperature (K) the Arrhenius term is evaluated at.
pub const MIN_TEMPERATURE_K: f64 = 0.5;

/// Dark count rate in Hz.
///
/// Exponential bias gain times an Arrhenius-like thermal factor, plus a
/// blackbody floor scaling with `(wavelength / 1550)^2`. Never negative.
pub fn dark_count_rate_hz(
    ib_over_ic: f64,
    temperature_k: f64,
    wavelength_nm: f64,
    constants: &DetectorConstants,
) -> f64 {
    let bias = clamp(ib_over_ic, 0.0, 1.1);
    let temperature = temperature_k.max(MIN_TEMPERATURE_K);
    let bias_term = (constants.dcr_bias_gain * (bias - DCR_REFERENCE_BIAS)).exp();
    let arrhenius = (-constants.dcr_e_over_k / temperature).exp();
    let blackbody_floor = constants.dcr_bb_base * (wavelength_nm / REFERENCE_WAVELENGTH_NM).powi(2);
    (constants.dcr_base_hz * bias_term * arrhenius + blackbody_floor).max(0.0)
}
