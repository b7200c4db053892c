use super::*;
use serde_json::json;

#[test]
fn empty_records_serialize_to_empty_objects() {
    assert_eq!(Fill::default().to_json(), json!({}));
    assert_eq!(Shadow::default().to_json(), json!({}));
    assert_eq!(Stroke::default().to_json(), json!({}));
    assert_eq!(Blur::default().to_json(), json!({}));
}

#[test]
fn gradient_fill_nests_color_stops() {
    let fill = Fill {
        mode: Some(FillMode::Linear),
        color: Some(FillColor::from(vec![
            FillColorStop::new(0.0, "#ff0000"),
            FillColorStop::new(1.0, "#0000ff"),
        ])),
        x0: Some("0%".into()),
        x1: Some("100%".into()),
        ..Fill::default()
    };
    assert_eq!(
        fill.to_json(),
        json!({
            "mode": "linear",
            "color": [
                { "offset": 0, "color": "#ff0000" },
                { "offset": 1, "color": "#0000ff" },
            ],
            "x0": "0%",
            "x1": "100%",
        })
    );
}

#[test]
fn stroke_and_shadow_emit_only_set_fields() {
    let stroke = Stroke {
        color: Some("rgba(0,121,255,1)".to_string()),
        cap: Some(StrokeCap::Round),
        ..Stroke::default()
    };
    assert_eq!(
        stroke.to_json(),
        json!({ "color": "rgba(0,121,255,1)", "cap": "round" })
    );

    let shadow = Shadow {
        blur: Some(Scalar::from("2 vmin")),
        offset_y: Some(Scalar::from(4)),
        ..Shadow::default()
    };
    assert_eq!(shadow.to_json(), json!({ "blur": "2 vmin", "offset_y": 4 }));
}

#[test]
fn warp_always_carries_mode() {
    assert_eq!(Warp::new(WarpMode::Arc).to_json(), json!({ "mode": "arc" }));

    let warp = Warp {
        amount: Some(0.5),
        points: vec![WarpPoint::new(0.0, 0.25)],
        ..Warp::new(WarpMode::Wave)
    };
    assert_eq!(
        warp.to_json(),
        json!({ "mode": "wave", "amount": 0.5, "points": [{ "x": 0, "y": 0.25 }] })
    );
}

#[test]
fn font_definition_keeps_both_fields() {
    let font = FontDefinition::new("Brand Sans", "https://example.com/brand.ttf");
    assert_eq!(
        font.to_json(),
        json!({ "name": "Brand Sans", "url": "https://example.com/brand.ttf" })
    );
}
