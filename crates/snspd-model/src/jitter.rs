use snspd_core::DetectorConstants;

const MIN_AMPLITUDE: f64 = 1e-6;

/// Timing jitter FWHM in ps.
///
/// A slope-limited term `C * tr^2 / V_peak` added in quadrature to the
/// intrinsic floor, so the result is never below `jitter_base_ps` and falls
/// as the amplitude grows.
pub fn jitter_fwhm_ps(peak_amplitude: f64, constants: &DetectorConstants) -> f64 {
    let rise_ps = constants.jitter_rise_ps;
    let amplitude_term =
        constants.jitter_noise_coeff * rise_ps.powi(2) / peak_amplitude.max(MIN_AMPLITUDE);
    (amplitude_term.powi(2) + constants.jitter_base_ps.powi(2)).sqrt()
}
