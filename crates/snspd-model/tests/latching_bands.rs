use snspd_core::DetectorConstants;
use snspd_model::{latching_risk, LatchingLevel};

#[test]
fn unit_score_is_moderate() {
    let risk = latching_risk(1.0, 50.0, 100.0, &DetectorConstants::default());
    assert_eq!(risk.score, 1.0);
    assert_eq!(risk.level, LatchingLevel::Moderate);
    assert_eq!(risk.level.to_string(), "Moderate");
}

#[test]
fn threshold_score_is_high() {
    let risk = latching_risk(1.0, 150.0, 100.0, &DetectorConstants::default());
    assert_eq!(risk.score, 3.0);
    assert_eq!(risk.level, LatchingLevel::High);
}

#[test]
fn typical_device_is_low() {
    let risk = latching_risk(0.85, 50.0, 342.857, &DetectorConstants::default());
    assert!(risk.score < 1.0);
    assert_eq!(risk.level, LatchingLevel::Low);
}

#[test]
fn bias_is_clamped_to_one_point_two() {
    let c = DetectorConstants::default();
    assert_eq!(
        latching_risk(2.0, 50.0, 100.0, &c).score,
        latching_risk(1.2, 50.0, 100.0, &c).score
    );
    assert_eq!(latching_risk(-1.0, 50.0, 100.0, &c).score, 0.0);
}

#[test]
fn inductance_floor_avoids_division_by_zero() {
    let risk = latching_risk(1.0, 50.0, 0.0, &DetectorConstants::default());
    assert!(risk.score.is_finite());
    assert_eq!(risk.level, LatchingLevel::High);
}

#[test]
fn classification_respects_custom_threshold() {
    assert_eq!(LatchingLevel::classify(0.999, 3.0), LatchingLevel::Low);
    assert_eq!(LatchingLevel::classify(2.0, 2.0), LatchingLevel::High);
    assert_eq!(LatchingLevel::classify(1.5, 2.0), LatchingLevel::Moderate);
    assert!(LatchingLevel::Low < LatchingLevel::High);
}

#[test]
fn levels_serialize_as_labels() {
    let json = serde_json::to_string(&LatchingLevel::High).expect("serialize");
    assert_eq!(json, "\"High\"");
}
