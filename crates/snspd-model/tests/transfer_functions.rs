use snspd_core::DetectorConstants;
use snspd_model::{
    dark_count_rate_hz, internal_detection_efficiency, jitter_fwhm_ps, kinetic_inductance_nh,
    linspace, logistic_center, pulse_waveform, system_detection_efficiency, TimeGrid,
};

fn approx_monotone_increasing<F: Fn(f64) -> f64>(f: F, xs: &[f64]) -> bool {
    let values: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
    values.windows(2).all(|pair| pair[0] <= pair[1] + 1e-9)
}

#[test]
fn inductance_scales_with_length_and_width() {
    let c = DetectorConstants::default();
    let lk1 = kinetic_inductance_nh(8000.0, 100.0, 7.0, &c);
    let lk2 = kinetic_inductance_nh(16000.0, 100.0, 7.0, &c);
    assert!(lk2 > lk1);
    let lk3 = kinetic_inductance_nh(8000.0, 80.0, 7.0, &c);
    assert!(lk3 > lk1, "narrower wire must raise Lk");
    assert!((lk1 - 30.0 * 8000.0 / 700.0).abs() < 1e-9);
}

#[test]
fn degenerate_geometry_is_floored() {
    let c = DetectorConstants::default();
    let floored = kinetic_inductance_nh(8000.0, 0.0, -5.0, &c);
    assert!(floored.is_finite());
    assert_eq!(floored, kinetic_inductance_nh(8000.0, 1e-3, 1e-3, &c));
    assert_eq!(
        kinetic_inductance_nh(-1.0, 100.0, 7.0, &c),
        kinetic_inductance_nh(1e-3, 100.0, 7.0, &c)
    );
}

#[test]
fn ide_is_monotone_in_bias() {
    let c = DetectorConstants::default();
    let xs = linspace(0.6, 1.05, 20);
    assert!(approx_monotone_increasing(
        |x| internal_detection_efficiency(x, 1550.0, 100.0, &c),
        &xs
    ));
}

#[test]
fn ide_centre_shifts_and_clamps() {
    let c = DetectorConstants::default();
    assert!((logistic_center(1550.0, 100.0, &c) - 0.9).abs() < 1e-12);
    assert!(logistic_center(2200.0, 100.0, &c) > logistic_center(1550.0, 100.0, &c));
    assert!(logistic_center(1550.0, 150.0, &c) < logistic_center(1550.0, 50.0, &c));
    assert_eq!(logistic_center(10_000.0, 100.0, &c), 0.98);
    assert_eq!(logistic_center(-10_000.0, 100.0, &c), 0.7);

    // At the centre the logistic is exactly one half.
    let half = internal_detection_efficiency(0.9, 1550.0, 100.0, &c);
    assert!((half - 0.5).abs() < 1e-12);
}

#[test]
fn ide_saturates_above_max_bias() {
    let c = DetectorConstants::default();
    let at_cap = internal_detection_efficiency(1.1, 1550.0, 100.0, &c);
    assert_eq!(internal_detection_efficiency(5.0, 1550.0, 100.0, &c), at_cap);
    assert_eq!(
        internal_detection_efficiency(-1.0, 1550.0, 100.0, &c),
        internal_detection_efficiency(0.0, 1550.0, 100.0, &c)
    );
}

#[test]
fn sde_is_bounded_product() {
    let sde = system_detection_efficiency(0.8, 0.9, DetectorConstants::default().coupling);
    assert!((0.0..=1.0).contains(&sde));
    assert!((sde - 0.9 * 0.9 * 0.8).abs() < 1e-12);
    assert_eq!(system_detection_efficiency(1.5, 2.0, 3.0), 1.0);
    assert_eq!(system_detection_efficiency(0.8, -0.5, 0.9), 0.0);
}

#[test]
fn dcr_rises_with_bias_and_stays_positive() {
    let c = DetectorConstants::default();
    let low = dark_count_rate_hz(0.7, 2.0, 1550.0, &c);
    let high = dark_count_rate_hz(0.95, 2.0, 1550.0, &c);
    assert!(high > low);
    assert!(dark_count_rate_hz(0.0, -4.0, 0.0, &c) >= 0.0);
    assert_eq!(
        dark_count_rate_hz(0.9, -4.0, 1550.0, &c),
        dark_count_rate_hz(0.9, 0.5, 1550.0, &c)
    );
}

#[test]
fn dcr_floor_follows_wavelength_squared() {
    let c = DetectorConstants {
        dcr_base_hz: 1e-300,
        ..DetectorConstants::default()
    };
    let at_ref = dark_count_rate_hz(0.0, 2.0, 1550.0, &c);
    let doubled = dark_count_rate_hz(0.0, 2.0, 3100.0, &c);
    assert!((at_ref - 10.0).abs() < 1e-9);
    assert!((doubled - 40.0).abs() < 1e-9);
}

#[test]
fn pulse_and_jitter_reference_point() {
    let c = DetectorConstants::default();
    let grid = TimeGrid::linspace(0.0, 20.0, 1000);
    let trace = pulse_waveform(grid.as_slice(), 0.9, 50.0, 300.0, &c);
    assert_eq!(trace.voltages.len(), 1000);
    assert!(trace.max_voltage() > 0.0);
    assert!((trace.decay_constant_ns - 6.0).abs() < 1e-12);
    assert!((trace.peak_amplitude - 0.95).abs() < 1e-12);
    let jitter = jitter_fwhm_ps(trace.peak_amplitude, &c);
    assert!(jitter > 0.0);
    assert!(jitter >= c.jitter_base_ps);
}

#[test]
fn jitter_handles_zero_amplitude() {
    let c = DetectorConstants::default();
    let jitter = jitter_fwhm_ps(0.0, &c);
    assert!(jitter.is_finite());
    assert_eq!(jitter, jitter_fwhm_ps(1e-6, &c));
    assert!(jitter_fwhm_ps(1e9, &c) - c.jitter_base_ps < 1e-6);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let c = DetectorConstants::default();
    let a = dark_count_rate_hz(0.93, 3.1, 1310.0, &c);
    let b = dark_count_rate_hz(0.93, 3.1, 1310.0, &c);
    assert_eq!(a.to_bits(), b.to_bits());
    let a = internal_detection_efficiency(0.93, 1310.0, 85.0, &c);
    let b = internal_detection_efficiency(0.93, 1310.0, 85.0, &c);
    assert_eq!(a.to_bits(), b.to_bits());
    let a = jitter_fwhm_ps(0.77, &c);
    let b = jitter_fwhm_ps(0.77, &c);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn jitter_is_root_sum_of_squares_bit_for_bit() {
    let c = DetectorConstants::default();
    for step in 1..2000 {
        let amplitude = step as f64 * 0.0137;
        let term = c.jitter_noise_coeff * c.jitter_rise_ps.powi(2) / amplitude;
        let expected = (term.powi(2) + c.jitter_base_ps.powi(2)).sqrt();
        assert_eq!(jitter_fwhm_ps(amplitude, &c).to_bits(), expected.to_bits());
    }
}
