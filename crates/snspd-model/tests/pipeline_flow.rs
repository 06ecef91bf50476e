use snspd_core::{DetectorConstants, DeviceParams, Param, Preset, WarningKind};
use snspd_model::{
    dark_count_rate_hz, evaluate, evaluate_with_grid, internal_detection_efficiency,
    jitter_fwhm_ps, kinetic_inductance_nh, latching_risk, system_detection_efficiency,
    LatchingLevel, TimeGrid,
};

#[test]
fn pipeline_matches_direct_calls() {
    let c = DetectorConstants::default();
    let p = DeviceParams::default();
    let evaluation = evaluate(&p, &c);
    let m = evaluation.metrics;

    let lk = kinetic_inductance_nh(p.length_um, p.width_nm, p.thickness_nm, &c);
    let ide = internal_detection_efficiency(p.ib_over_ic, p.wavelength_nm, p.width_nm, &c);
    assert_eq!(m.kinetic_inductance_nh, lk);
    assert_eq!(m.internal_detection_efficiency, ide);
    assert_eq!(
        m.system_detection_efficiency,
        system_detection_efficiency(ide, p.absorption, p.coupling)
    );
    assert_eq!(
        m.dark_count_rate_hz,
        dark_count_rate_hz(p.ib_over_ic, p.temperature_k, p.wavelength_nm, &c)
    );
    assert_eq!(m.jitter_fwhm_ps, jitter_fwhm_ps(m.peak_amplitude, &c));
    assert_eq!(m.latching, latching_risk(p.ib_over_ic, p.load_ohm, lk, &c));
    assert!(evaluation.warnings.is_empty());
    assert_eq!(evaluation.pulse.voltages.len(), 1000);
}

#[test]
fn coupling_is_an_explicit_input() {
    let c = DetectorConstants::default();
    let full = evaluate(&DeviceParams::default().with(Param::Coupling, 1.0), &c);
    let half = evaluate(&DeviceParams::default().with(Param::Coupling, 0.5), &c);
    let ratio = half.metrics.system_detection_efficiency / full.metrics.system_detection_efficiency;
    assert!((ratio - 0.5).abs() < 1e-12);
    assert_eq!(
        full.metrics.internal_detection_efficiency,
        half.metrics.internal_detection_efficiency
    );
}

#[test]
fn match_our_spec_preset_lands_near_design_point() {
    let evaluation = evaluate(&Preset::MatchOurSpec.params(), &DetectorConstants::default());
    let m = evaluation.metrics;
    assert!((m.kinetic_inductance_nh - 353.0).abs() < 0.01);
    assert!((m.decay_constant_ns - 7.06).abs() < 1e-3);
    assert!(m.system_detection_efficiency > 0.85);
    assert_eq!(m.latching.level, LatchingLevel::Low);
}

#[test]
fn presets_trade_off_as_described() {
    let c = DetectorConstants::default();
    let matched = evaluate(&Preset::MatchOurSpec.params(), &c).metrics;
    let fast = evaluate(&Preset::HighThroughput.params(), &c).metrics;
    let quiet = evaluate(&Preset::LowNoise.params(), &c).metrics;
    assert!(fast.decay_constant_ns < matched.decay_constant_ns);
    assert!(quiet.dark_count_rate_hz < matched.dark_count_rate_hz);
}

#[test]
fn out_of_range_inputs_are_clamped_once_and_reported() {
    let c = DetectorConstants::default();
    let params = DeviceParams {
        load_ohm: 0.2,
        temperature_k: 0.0,
        ..DeviceParams::default()
    };
    let evaluation = evaluate(&params, &c);
    assert_eq!(evaluation.params.load_ohm, 1.0);
    assert_eq!(evaluation.params.temperature_k, 0.5);
    assert_eq!(evaluation.warnings.len(), 2);
    assert!(evaluation
        .warnings
        .iter()
        .all(|w| matches!(w.kind, WarningKind::Clamped { .. })));
    let expected = latching_risk(params.ib_over_ic, 1.0, evaluation.metrics.kinetic_inductance_nh, &c);
    assert_eq!(evaluation.metrics.latching, expected);
}

#[test]
fn evaluation_is_idempotent() {
    let c = DetectorConstants::default();
    let params = Preset::HighThroughput.params();
    let a = evaluate(&params, &c);
    let b = evaluate(&params, &c);
    assert_eq!(a, b);
    assert_eq!(
        a.metrics.jitter_fwhm_ps.to_bits(),
        b.metrics.jitter_fwhm_ps.to_bits()
    );
}

#[test]
fn custom_grid_controls_trace_length() {
    let grid = TimeGrid::linspace(0.0, 5.0, 11);
    let evaluation = evaluate_with_grid(&DeviceParams::default(), &DetectorConstants::default(), &grid);
    assert_eq!(evaluation.pulse.voltages.len(), 11);
    assert_eq!(evaluation.grid, grid);
}
