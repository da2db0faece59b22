use serde_json::json;

use super::*;
use crate::foundation::error::ErrorKind;

fn opts(v: serde_json::Value) -> ConvertOptions {
    serde_json::from_value(v).unwrap()
}

#[test]
fn missing_or_blank_format_is_rejected() {
    let err = ConvertOptions::default().validate("<svg/>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingFormat);

    let err = opts(json!({"format": "  "})).validate("<svg/>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingFormat);
}

#[test]
fn unsupported_format_names_the_value() {
    let err = opts(json!({"format": "bmp"})).validate("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    let msg = err.to_string();
    assert!(msg.contains("bmp"));
    assert!(msg.contains("png, jpg, jpeg, gif, webp"));
}

#[test]
fn format_is_checked_before_dimensions() {
    let err = opts(json!({"width": 0})).validate("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingFormat);
}

#[test]
fn dimensions_must_be_positive_integers() {
    for bad in [
        json!(0),
        json!(-5),
        json!(12.5),
        json!("100"),
        json!(true),
        json!(5_000_000_000u64),
    ] {
        let err = opts(json!({"format": "png", "width": bad.clone()}))
            .validate("")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDimension, "{bad}");
        assert!(err.to_string().contains("width"));
    }

    let err = opts(json!({"format": "png", "height": -1}))
        .validate("")
        .unwrap_err();
    assert!(matches!(err, SvgagerError::InvalidDimension { dimension: "height", .. }));
}

#[test]
fn integral_floats_and_null_dimensions_are_accepted() {
    let req = opts(json!({"format": "gif", "width": 200.0, "height": null}))
        .validate("src")
        .unwrap();
    assert_eq!(req.width, Some(200));
    assert_eq!(req.height, None);
    assert_eq!(req.format, OutputFormat::Gif);
    assert_eq!(req.source, "src");
}

#[test]
fn replacement_object_keeps_insertion_order() {
    let req = opts(json!({
        "format": "png",
        "replacements": {"zeta": "1", "alpha": "2", "mid": "3"}
    }))
    .validate("")
    .unwrap();
    assert_eq!(
        req.replacements,
        vec![
            ("zeta".to_string(), "1".to_string()),
            ("alpha".to_string(), "2".to_string()),
            ("mid".to_string(), "3".to_string()),
        ]
    );
}

#[test]
fn replacement_pair_list_is_accepted() {
    let req = opts(json!({"format": "png", "replacements": [["a", "b"], ["c", ""]]}))
        .validate("")
        .unwrap();
    assert_eq!(req.replacements.len(), 2);
    assert_eq!(req.replacements[1], ("c".to_string(), String::new()));
}

#[test]
fn non_mapping_replacements_are_rejected() {
    for bad in [
        json!("a=b"),
        json!(42),
        json!({"a": 1}),
        json!([["only-one"]]),
        json!([["a", 2]]),
    ] {
        let err = opts(json!({"format": "webp", "replacements": bad.clone()}))
            .validate("")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReplacements, "{bad}");
    }
}

#[test]
fn options_load_from_json_text() {
    let o = ConvertOptions::from_json_str(
        r##"{"format": "jpeg", "width": 64, "background_color": "#102030"}"##,
    )
    .unwrap();
    let req = o.validate("").unwrap();
    assert_eq!(req.format, OutputFormat::Jpeg);
    assert_eq!(req.width, Some(64));
    assert_eq!(req.background_color.as_deref(), Some("#102030"));

    assert!(ConvertOptions::from_json_str("{not json").is_err());
}

#[test]
fn typed_request_check_rejects_zero() {
    let req = ConversionRequest::new("", OutputFormat::Png).with_width(0);
    assert_eq!(req.check().unwrap_err().kind(), ErrorKind::InvalidDimension);

    let req = ConversionRequest::new("", OutputFormat::Png)
        .with_width(10)
        .with_height(0);
    assert!(matches!(
        req.check().unwrap_err(),
        SvgagerError::InvalidDimension { dimension: "height", .. }
    ));

    ConversionRequest::new("", OutputFormat::Png)
        .with_width(1)
        .with_height(1)
        .check()
        .unwrap();
}
