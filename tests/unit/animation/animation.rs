use super::*;
use crate::properties::constants::{Direction, TextSplit};
use serde_json::json;

#[test]
fn type_tag_is_emitted_with_timing() {
    let fade = Animation::from(Fade::new(
        AnimationTiming::new().duration(1).easing(Easing::QuadraticOut),
    ));
    assert_eq!(
        fade.to_json(),
        json!({ "type": "fade", "duration": 1, "easing": "quadratic-out" })
    );
}

#[test]
fn false_flags_are_omitted() {
    let slide = Animation::from(Slide {
        direction: Some(Direction::Left),
        ..Slide::default()
    });
    let map = slide.to_map();
    assert!(!map.contains_key("reversed"));
    assert!(!map.contains_key("transition"));
    assert_eq!(map["direction"], json!("left"));
}

#[test]
fn reversed_flag_is_emitted_when_set() {
    let spin = Animation::from(Spin {
        rotations: Some(2.0),
        ..Spin::new(AnimationTiming::new().reversed())
    });
    assert_eq!(
        spin.to_json(),
        json!({ "type": "spin", "rotations": 2, "reversed": true })
    );
}

#[test]
fn text_slide_uses_snake_case_keys() {
    let slide = Animation::from(TextSlide {
        split: Some(TextSplit::Line),
        scope: Some("element".to_string()),
        background_effect: Some("scaling-clip".to_string()),
        ..TextSlide::new(AnimationTiming::new().duration(2).easing(Easing::QuadraticOut))
    });
    assert_eq!(
        slide.to_json(),
        json!({
            "type": "text-slide",
            "duration": 2,
            "easing": "quadratic-out",
            "split": "line",
            "scope": "element",
            "background_effect": "scaling-clip",
        })
    );
}

#[test]
fn every_kind_has_a_distinct_tag() {
    let timing = AnimationTiming::new();
    let tags: Vec<&str> = [
        Animation::from(Fade::new(timing.clone())),
        Animation::from(Slide::new(timing.clone())),
        Animation::from(Scale::new(timing.clone())),
        Animation::from(Spin::new(timing.clone())),
        Animation::from(TextAppear::new(timing.clone())),
        Animation::from(TextSlide::new(timing.clone())),
        Animation::from(TextTypewriter::new(timing)),
    ]
    .iter()
    .map(Animation::type_tag)
    .collect();
    assert_eq!(
        tags,
        [
            "fade",
            "slide",
            "scale",
            "spin",
            "text-appear",
            "text-slide",
            "text-typewriter"
        ]
    );
}
