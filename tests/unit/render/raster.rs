use super::*;
use crate::document::parse::parse_document;
use crate::foundation::error::ErrorKind;

fn no_fonts() -> RenderConfig {
    RenderConfig {
        system_fonts: false,
        ..RenderConfig::default()
    }
}

fn doc(text: &str) -> Document {
    parse_document(text, &no_fonts()).unwrap()
}

const HALF_RED: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
  <rect x="0" y="0" width="5" height="10" fill="#ff0000"/>
</svg>"##;

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn png_background_is_transparent_and_ignores_color() {
    assert_eq!(
        Background::for_format(OutputFormat::Png, Some("not a color")).unwrap(),
        Background::Transparent
    );
}

#[test]
fn other_formats_default_to_white() {
    for f in [OutputFormat::Jpg, OutputFormat::Gif, OutputFormat::Webp] {
        assert_eq!(
            Background::for_format(f, None).unwrap(),
            Background::Solid(Rgb8::WHITE)
        );
    }
    assert_eq!(
        Background::for_format(OutputFormat::Jpeg, Some("#000080")).unwrap(),
        Background::Solid(Rgb8::new(0, 0, 128))
    );
    assert_eq!(
        Background::for_format(OutputFormat::Gif, Some("blue"))
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidBackgroundColor
    );
}

#[test]
fn transparent_background_keeps_uncovered_pixels_clear() {
    let buf = rasterize(&doc(HALF_RED), canvas(10, 10), Background::Transparent, &no_fonts())
        .unwrap();
    assert_eq!(buf.pixel(1, 5), Some([255, 0, 0, 255]));
    assert_eq!(buf.pixel(8, 5), Some([0, 0, 0, 0]));
}

#[test]
fn solid_background_fills_uncovered_pixels() {
    let bg = Background::Solid(Rgb8::new(0, 0, 255));
    let buf = rasterize(&doc(HALF_RED), canvas(10, 10), bg, &no_fonts()).unwrap();
    assert_eq!(buf.pixel(1, 5), Some([255, 0, 0, 255]));
    assert_eq!(buf.pixel(8, 5), Some([0, 0, 255, 255]));
    assert!(buf.is_opaque());
}

#[test]
fn geometry_scales_with_the_canvas() {
    let buf = rasterize(&doc(HALF_RED), canvas(40, 20), Background::Transparent, &no_fonts())
        .unwrap();
    assert_eq!(buf.canvas(), canvas(40, 20));
    // Left half of the stretched canvas is red, right half is empty.
    assert_eq!(buf.pixel(18, 10), Some([255, 0, 0, 255]));
    assert_eq!(buf.pixel(22, 10), Some([0, 0, 0, 0]));
}

#[test]
fn semi_transparent_fill_is_straight_alpha() {
    let d = doc(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
  <rect width="4" height="4" fill="#00ff00" fill-opacity="0.5"/>
</svg>"##,
    );
    let buf = rasterize(&d, canvas(4, 4), Background::Transparent, &no_fonts()).unwrap();
    let [r, g, b, a] = buf.pixel(2, 2).unwrap();
    assert_eq!((r, b), (0, 0));
    assert!(g >= 254, "green channel should be un-premultiplied, got {g}");
    assert!((127..=128).contains(&a));
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let cfg = RenderConfig {
        max_canvas_dim: 64,
        ..no_fonts()
    };
    let err = rasterize(&doc(HALF_RED), canvas(65, 10), Background::Transparent, &cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Render);
    assert!(err.to_string().contains("too large"));
}

#[test]
fn empty_canvas_is_a_render_error() {
    let err = rasterize(&doc(HALF_RED), canvas(0, 10), Background::Transparent, &no_fonts())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Render);
}
