use super::*;

#[test]
fn empty_object_gives_defaults() {
    assert_eq!(Settings::from_json_str("{}").unwrap(), Settings::default());
}

#[test]
fn partial_json_overrides_fields() {
    let s = Settings::from_json_str(
        r#"{ "color_space": "RGBA", "composite_op": "divide", "display": { "parallel": true, "threads": 2 } }"#,
    )
    .unwrap();
    assert_eq!(s.color_space, ColorSpaceId::Rgba8);
    assert_eq!(s.composite_op, CompositeOp::Divide);
    assert!(s.display.parallel);
    assert_eq!(s.display.threads, Some(2));
    assert_eq!(s.display.rows_per_task, 64);
}

#[test]
fn invalid_threading_is_rejected_after_parse() {
    let err = Settings::from_json_str(r#"{ "display": { "rows_per_task": 0 } }"#).unwrap_err();
    assert!(matches!(err, PixelError::Validation(_)));
    let err = Settings::from_json_str(r#"{ "display": { "threads": 0 } }"#).unwrap_err();
    assert!(matches!(err, PixelError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Settings::from_json_str(r#"{ "composite_op": "dissolve" }"#).unwrap_err();
    assert!(matches!(err, PixelError::Serde(_)));
    let err = Settings::from_json_str(r#"{ "colour_space": "RGBA" }"#).unwrap_err();
    assert!(matches!(err, PixelError::Serde(_)));
}

#[test]
fn pretty_json_round_trips() {
    let s = Settings {
        composite_op: CompositeOp::Screen,
        ..Settings::default()
    };
    let json = s.to_json_pretty().unwrap();
    assert_eq!(Settings::from_json_str(&json).unwrap(), s);
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = Settings::load(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
