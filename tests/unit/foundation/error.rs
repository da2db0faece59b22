use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SvgagerError::parse("x")
            .to_string()
            .starts_with("Failed to parse SVG:")
    );
    assert!(
        SvgagerError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SvgagerError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        SvgagerError::invalid_replacements("x")
            .to_string()
            .contains("invalid replacements:")
    );
    assert!(
        SvgagerError::invalid_background_color("x")
            .to_string()
            .contains("invalid background color:")
    );
}

#[test]
fn unsupported_format_names_value_and_supported_set() {
    let msg = SvgagerError::unsupported_format("bmp").to_string();
    assert!(msg.contains("'bmp'"));
    assert!(msg.contains("png, jpg, jpeg, gif, webp"));
}

#[test]
fn invalid_dimension_names_the_dimension() {
    let msg = SvgagerError::invalid_dimension("height", -3).to_string();
    assert!(msg.contains("height"));
    assert!(msg.contains("-3"));
}

#[test]
fn kind_matches_variant() {
    assert_eq!(SvgagerError::MissingFormat.kind(), ErrorKind::MissingFormat);
    assert_eq!(SvgagerError::parse("x").kind(), ErrorKind::Parse);
    assert_eq!(
        SvgagerError::invalid_dimension("width", 0).kind(),
        ErrorKind::InvalidDimension
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SvgagerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}
