use super::*;
use crate::element::{Image, Text, Video};
use crate::properties::structures::FillColorStop;
use serde_json::json;

#[test]
fn empty_source_emits_only_output_format() {
    assert_eq!(Source::default().to_json(), json!({ "output_format": "mp4" }));
}

#[test]
fn settings_and_elements_are_serialized() {
    let mut source = Source {
        width: Some(1280),
        height: Some(720),
        frame_rate: Some(30.0),
        duration: Some(4.5),
        ..Source::new(OutputFormat::Gif)
    };
    source.push(Video::new("a.mp4")).push(Text::new("hi"));

    assert_eq!(
        source.to_json(),
        json!({
            "output_format": "gif",
            "width": 1280,
            "height": 720,
            "frame_rate": 30,
            "duration": 4.5,
            "elements": [
                { "type": "video", "source": "a.mp4" },
                { "type": "text", "text": "hi" },
            ],
        })
    );
}

#[test]
fn fonts_and_gradient_fill() {
    let source = Source {
        fill_color: Some(
            vec![
                FillColorStop::new(0.0, "#000"),
                FillColorStop::new(1.0, "#fff"),
            ]
            .into(),
        ),
        fill_mode: Some(FillMode::Linear.into()),
        fonts: vec![FontDefinition::new("Brand", "https://example.com/brand.ttf")],
        ..Source::default()
    };

    let out = source.to_json();
    assert_eq!(out["fill_mode"], json!("linear"));
    assert_eq!(
        out["fill_color"],
        json!([{ "offset": 0, "color": "#000" }, { "offset": 1, "color": "#fff" }])
    );
    assert_eq!(
        out["fonts"],
        json!([{ "name": "Brand", "url": "https://example.com/brand.ttf" }])
    );
}

#[test]
fn serialization_is_deterministic() {
    let mut source = Source::new(OutputFormat::Mp4);
    source.extend([Image::new("a.png"), Image::new("b.png")]);

    let first = serde_json::to_string(&source).ok();
    let second = serde_json::to_string(&source.clone()).ok();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn serde_serialize_matches_to_json() {
    let source = Source {
        r#loop: Some(true),
        ..Source::new(OutputFormat::Gif)
    };
    assert_eq!(serde_json::to_value(&source).ok(), Some(source.to_json()));
    assert_eq!(source.to_json()["loop"], json!(true));
}
