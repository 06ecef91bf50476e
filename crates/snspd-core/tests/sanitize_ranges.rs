use snspd_core::{range_for, sanitize, DeviceParams, Param, WarningKind, PARAM_RANGES};

#[test]
fn table_rows_follow_param_order() {
    for (row, param) in PARAM_RANGES.iter().zip(Param::ALL) {
        assert_eq!(row.param, param);
        assert_eq!(range_for(param).param, param);
    }
}

#[test]
fn defaults_pass_without_warnings() {
    let sanitized = sanitize(&DeviceParams::default());
    assert!(sanitized.warnings.is_empty());
    assert_eq!(sanitized.params, DeviceParams::default());
}

#[test]
fn hard_clamps_are_applied_and_reported() {
    let params = DeviceParams {
        ib_over_ic: 1.5,
        temperature_k: -3.0,
        absorption: 1.4,
        length_um: -10.0,
        load_ohm: 0.0,
        ..DeviceParams::default()
    };
    let sanitized = sanitize(&params);
    assert_eq!(sanitized.params.ib_over_ic, 1.2);
    assert_eq!(sanitized.params.temperature_k, 0.5);
    assert_eq!(sanitized.params.absorption, 1.0);
    assert_eq!(sanitized.params.length_um, 1e-3);
    assert_eq!(sanitized.params.load_ohm, 1.0);

    let clamped: Vec<Param> = sanitized
        .warnings
        .iter()
        .filter(|w| matches!(w.kind, WarningKind::Clamped { .. }))
        .map(|w| w.param)
        .collect();
    assert_eq!(
        clamped,
        vec![
            Param::IbOverIc,
            Param::TemperatureK,
            Param::Absorption,
            Param::LengthUm,
            Param::LoadOhm
        ]
    );
    let bias = &sanitized.warnings[0];
    assert_eq!(bias.value, 1.5);
    assert_eq!(bias.kind, WarningKind::Clamped { to: 1.2 });
}

#[test]
fn advisory_violations_do_not_change_values() {
    let params = DeviceParams {
        ib_over_ic: 1.15,
        wavelength_nm: 3000.0,
        ..DeviceParams::default()
    };
    let sanitized = sanitize(&params);
    assert_eq!(sanitized.params, params);
    assert_eq!(sanitized.warnings.len(), 2);
    assert_eq!(
        sanitized.warnings[1].kind,
        WarningKind::OutsideAdvisory {
            min: 800.0,
            max: 2200.0
        }
    );
}

#[test]
fn sanitizing_twice_is_stable() {
    let params = DeviceParams {
        width_nm: 0.0,
        coupling: -0.2,
        ..DeviceParams::default()
    };
    let once = sanitize(&params);
    let twice = sanitize(&once.params);
    assert_eq!(once.params, twice.params);
}

#[test]
fn nan_bias_falls_to_lower_bound() {
    let params = DeviceParams::default().with(Param::IbOverIc, f64::NAN);
    let sanitized = sanitize(&params);
    assert_eq!(sanitized.params.ib_over_ic, 0.0);
    assert!(matches!(
        sanitized.warnings[0].kind,
        WarningKind::Clamped { to } if to == 0.0
    ));
}
