use super::*;

#[test]
fn empty_object_is_the_default_config() {
    let cfg = StudioConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, StudioConfig::default());
    assert_eq!(cfg.model, "gemini-3-flash-preview");
    assert_eq!(cfg.request_timeout(), Duration::from_secs(45));
    assert_eq!(cfg.export_scale, 3.0);
    assert_eq!(cfg.brand_prefix, "arte");
}

#[test]
fn fields_override_defaults() {
    let cfg = StudioConfig::from_json_str(
        r#"{ "export_scale": 2.0, "brand_prefix": "clinic", "fonts_dir": "assets/fonts" }"#,
    )
    .unwrap();
    assert_eq!(cfg.export_scale, 2.0);
    assert_eq!(cfg.brand_prefix, "clinic");
    assert_eq!(cfg.render_settings().fonts_dir, Some(PathBuf::from("assets/fonts")));
    assert_eq!(cfg.render_settings().scale, 2.0);
}

#[test]
fn invalid_values_are_rejected() {
    for bad in [
        r#"{ "model": " " }"#,
        r#"{ "brand_prefix": "" }"#,
        r#"{ "request_timeout_secs": 0 }"#,
        r#"{ "export_scale": -1.0 }"#,
    ] {
        let err = StudioConfig::from_json_str(bad).unwrap_err();
        assert!(matches!(err, StudioError::Validation(_)), "{bad}");
    }
}

#[test]
fn malformed_json_and_unknown_fields_are_serde_errors() {
    assert!(matches!(
        StudioConfig::from_json_str("{"),
        Err(StudioError::Serde(_))
    ));
    assert!(matches!(
        StudioConfig::from_json_str(r#"{ "modle": "x" }"#),
        Err(StudioError::Serde(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let err = StudioConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("read studio config"));
}
