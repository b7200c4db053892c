use super::*;
use serde_json::json;

#[test]
fn wire_names_are_kebab_case() {
    assert_eq!(BlendMode::ColorDodge.to_json(), json!("color-dodge"));
    assert_eq!(FlowDirection::RightToLeft.to_json(), json!("right-to-left"));
    assert_eq!(ColorFilter::HueRotate.to_json(), json!("hue-rotate"));
    assert_eq!(Easing::ElasticOut.to_json(), json!("elastic-out"));
    assert_eq!(Easing::EaseInOutQuad.to_json(), json!("ease-in-out-quad"));
    assert_eq!(OutputFormat::Mp4.to_json(), json!("mp4"));
    assert_eq!(Fit::Cover.to_json(), json!("cover"));
}

#[test]
fn constants_parse_from_wire_names() {
    let easing: Easing = serde_json::from_value(json!("quadratic-out")).unwrap();
    assert_eq!(easing, Easing::QuadraticOut);
    let format: OutputFormat = serde_json::from_value(json!("gif")).unwrap();
    assert_eq!(format, OutputFormat::Gif);
}
