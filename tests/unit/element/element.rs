use super::*;
use crate::animation::{Animation, AnimationTiming, Fade, Slide};
use crate::properties::constants::{Direction, Easing, Fit};
use crate::properties::text::{Font, TextBackground};
use crate::properties::value::{Keyframe, Prop, Scalar};
use serde_json::json;

fn fade(duration: f64) -> Animation {
    Fade::new(AnimationTiming::new().duration(duration)).into()
}

fn slide_left() -> Animation {
    Slide {
        direction: Some(Direction::Left),
        ..Slide::new(AnimationTiming::new().duration(1))
    }
    .into()
}

#[test]
fn video_emits_source_and_type() {
    let el = Element::from(Video {
        fit: Some(Fit::Cover),
        ..Video::new("https://example.com/a.mp4")
    });
    assert_eq!(
        el.to_json(),
        json!({ "type": "video", "source": "https://example.com/a.mp4", "fit": "cover" })
    );
}

#[test]
fn slot_keys_never_appear_in_output() {
    let mut video = Video::new("a.mp4");
    video.base.enter = Some(fade(1.0));
    video.base.exit = Some(fade(1.0));
    video.base.transition = Some(fade(1.0));

    let map = Element::from(video).to_map();
    assert!(!map.contains_key("enter"));
    assert!(!map.contains_key("exit"));
    assert!(!map.contains_key("transition"));
    assert_eq!(map["animations"].as_array().map(Vec::len), Some(3));
}

#[test]
fn enter_is_prepended_with_start_time() {
    let mut image = Image::new("a.png");
    image.base.enter = Some(fade(1.0));
    image.base.animations = vec![slide_left()];

    let out = Element::from(image).to_json();
    assert_eq!(
        out["animations"],
        json!([
            { "type": "fade", "duration": 1, "time": "start" },
            { "type": "slide", "duration": 1, "direction": "left" },
        ])
    );
}

#[test]
fn exit_is_appended_reversed_at_end() {
    let mut image = Image::new("a.png");
    image.base.animations = vec![slide_left()];
    image.base.exit = Some(fade(0.5));

    let out = Element::from(image).to_json();
    assert_eq!(
        out["animations"],
        json!([
            { "type": "slide", "duration": 1, "direction": "left" },
            { "type": "fade", "duration": 0.5, "time": "end", "reversed": true },
        ])
    );
}

#[test]
fn transition_goes_before_enter() {
    let mut shape = Rectangle::default();
    shape.base.enter = Some(fade(1.0));
    shape.base.transition = Some(slide_left());
    shape.base.animations = vec![fade(2.0)];
    shape.base.exit = Some(fade(3.0));

    let out = Element::from(shape).to_json();
    let types: Vec<_> = out["animations"]
        .as_array()
        .into_iter()
        .flatten()
        .map(|a| (a["type"].clone(), a.get("time").cloned()))
        .collect();
    assert_eq!(
        types,
        vec![
            (json!("slide"), Some(json!("start"))),
            (json!("fade"), Some(json!("start"))),
            (json!("fade"), None),
            (json!("fade"), Some(json!("end"))),
        ]
    );
    assert_eq!(out["animations"][0]["transition"], json!(true));
}

#[test]
fn slot_time_overrides_animation_timing() {
    let mut text = Text::new("hi");
    text.base.enter = Some(Fade::new(AnimationTiming::new().time(4).duration(1)).into());

    let out = Element::from(text).to_json();
    assert_eq!(out["animations"][0]["time"], json!("start"));
}

#[test]
fn no_animations_key_without_animations() {
    let map = Element::from(Ellipse::default()).to_map();
    assert!(!map.contains_key("animations"));
    assert_eq!(map["type"], json!("ellipse"));
}

#[test]
fn text_flattens_font_and_background() {
    let text = Text {
        font: Some(Font {
            size: Some(Scalar::from("8 vmin")),
            ..Font::new("Open Sans", 700)
        }),
        background: Some(TextBackground::with_padding("#fff", "26%", "7%", "0%", "100%")),
        ..Text::new("Hello")
    };

    assert_eq!(
        Element::from(text).to_json(),
        json!({
            "type": "text",
            "text": "Hello",
            "font_family": "Open Sans",
            "font_weight": 700,
            "font_size": "8 vmin",
            "background_color": "#fff",
            "background_x_padding": "26%",
            "background_y_padding": "7%",
            "background_border_radius": "0%",
            "background_align_threshold": "100%",
        })
    );
}

#[test]
fn explicit_font_fields_win_over_flattened_font() {
    let text = Text {
        font: Some(Font::new("Open Sans", 400)),
        font_family: Some("Roboto".to_string()),
        ..Text::new("x")
    };
    let map = Element::from(text).to_map();
    assert_eq!(map["font_family"], json!("Roboto"));
    assert_eq!(map["font_weight"], json!(400));
}

#[test]
fn background_wins_over_text_background() {
    let text = Text {
        text_background: Some(TextBackground::new("#000")),
        background: Some(TextBackground::new("#fff")),
        ..Text::new("x")
    };
    let map = Element::from(text).to_map();
    assert_eq!(map["background_color"], json!("#fff"));
}

#[test]
fn composition_serializes_children_recursively() {
    let mut inner = Text::new("child");
    inner.base.enter = Some(fade(1.0));

    let mut comp = Composition::new([Element::from(inner), Image::new("b.png").into()]);
    comp.base.track = Some(1);
    comp.base.duration = Some(Scalar::from("composition"));

    let out = Element::from(comp).to_json();
    assert_eq!(out["type"], json!("composition"));
    assert_eq!(out["track"], json!(1));
    assert_eq!(out["elements"][0]["type"], json!("text"));
    assert_eq!(
        out["elements"][0]["animations"],
        json!([{ "type": "fade", "duration": 1, "time": "start" }])
    );
    assert_eq!(out["elements"][1], json!({ "type": "image", "source": "b.png" }));
}

#[test]
fn empty_composition_omits_elements() {
    let map = Element::from(Composition::default()).to_map();
    assert!(!map.contains_key("elements"));
}

#[test]
fn keyframed_position_is_serialized_inline() {
    let mut shape = Shape::default();
    shape.base.x = Some(Prop::Keyframes(vec![
        Keyframe::new(0.0, "0%"),
        Keyframe::new(2.0, "100%").easing(Easing::Linear),
    ]));

    let out = Element::from(shape).to_json();
    assert_eq!(
        out["x"],
        json!([
            { "time": 0, "value": "0%" },
            { "time": 2, "value": "100%", "easing": "linear" },
        ])
    );
}

#[test]
fn loop_key_has_no_raw_prefix() {
    let audio = Audio {
        r#loop: Some(false),
        ..Audio::new("a.mp3")
    };
    let map = Element::from(audio).to_map();
    assert_eq!(map["loop"], json!(false));
}

#[test]
fn serde_serialize_matches_to_json() {
    let el = Element::from(Image::new("a.png"));
    assert_eq!(serde_json::to_value(&el).ok(), Some(el.to_json()));
}

#[test]
fn volume_and_trim_accept_keyframes() {
    let video = Video {
        trim_start: Some(2.into()),
        volume: Some(Prop::Keyframes(vec![
            Keyframe::new(0.0, "0%"),
            Keyframe::new(1.5, "100%"),
        ])),
        audio_fade_out: Some(Prop::Keyframes(vec![Keyframe::new(0.0, 1)])),
        ..Video::new("a.mp4")
    };
    let out = Element::from(video).to_json();
    assert_eq!(out["trim_start"], json!(2));
    assert_eq!(
        out["volume"],
        json!([
            { "time": 0, "value": "0%" },
            { "time": 1.5, "value": "100%" },
        ])
    );
    assert_eq!(out["audio_fade_out"], json!([{ "time": 0, "value": 1 }]));

    let audio = Audio {
        volume: Some(Prop::Keyframes(vec![Keyframe::new(0.0, "20%")])),
        ..Audio::new("a.mp3")
    };
    let map = Element::from(audio).to_map();
    assert_eq!(map["volume"], json!([{ "time": 0, "value": "20%" }]));
}

#[test]
fn element_stays_pointer_sized() {
    assert!(std::mem::size_of::<Element>() <= 2 * std::mem::size_of::<usize>());

    let mut el = Element::from(Text::new("hi"));
    el.base_mut().id = Some("title".into());
    assert_eq!(el.base().id.as_deref(), Some("title"));
    assert_eq!(el.type_tag(), "text");
}
