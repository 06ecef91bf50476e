use snspd_core::errors::{ErrorInfo, SnspdError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("field", "k_lk")
        .with_context("value", "-1")
}

#[test]
fn config_error_surface() {
    let err = SnspdError::Config(sample_info("CFG001", "negative constant"));
    assert_eq!(err.info().code, "CFG001");
    assert!(err.info().context.contains_key("field"));
}

#[test]
fn params_error_surface() {
    let err = SnspdError::Params(sample_info("P001", "unknown preset").with_hint("try low-noise"));
    assert_eq!(err.info().hint.as_deref(), Some("try low-noise"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = SnspdError::Io(ErrorInfo::new("read_failed", "missing").with_hint("check path"));
    let text = err.to_string();
    assert!(text.starts_with("io error: missing (code: read_failed)"));
    assert!(text.ends_with("| hint: check path"));

    let err = SnspdError::Serde(sample_info("S001", "schema mismatch"));
    assert!(err.to_string().contains("context: [field=k_lk, value=-1]"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = SnspdError::Config(ErrorInfo::new("CFG002", "bad"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Config");
    assert_eq!(json["detail"]["code"], "CFG002");
}
