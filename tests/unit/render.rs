use super::*;
use crate::element::Video;
use serde_json::json;

#[test]
fn in_progress_statuses_are_not_terminal() {
    for status in [
        RenderStatus::Planned,
        RenderStatus::Waiting,
        RenderStatus::Transcribing,
        RenderStatus::Rendering,
    ] {
        assert!(!status.is_terminal(), "{status:?}");
    }
    for status in [
        RenderStatus::Succeeded,
        RenderStatus::Failed,
        RenderStatus::Unknown,
    ] {
        assert!(status.is_terminal(), "{status:?}");
    }
}

#[test]
fn unknown_status_decodes_to_unknown() {
    let render: Render = serde_json::from_value(json!({ "id": "r1", "status": "archived" }))
        .expect("decode render");
    assert_eq!(render.status, RenderStatus::Unknown);
    assert!(render.is_terminal());
}

#[test]
fn explicit_nulls_decode_to_defaults() {
    let render: Render = serde_json::from_value(json!({
        "id": "a",
        "status": "succeeded",
        "template_tags": null,
        "template_id": null,
        "webhook_url": null,
        "metadata": null,
    }))
    .expect("decode render");
    assert_eq!(render.id, "a");
    assert_eq!(render.status, RenderStatus::Succeeded);
    assert!(render.template_tags.is_empty());
    assert_eq!(render.template_id, None);
    assert_eq!(render.metadata, None);

    let render: Render = serde_json::from_value(json!({ "id": null, "status": null }))
        .expect("decode render");
    assert_eq!(render.id, "");
    assert_eq!(render.status, RenderStatus::Unknown);
    assert!(render.is_terminal());
}

#[test]
fn render_decodes_service_payload() {
    let render: Render = serde_json::from_value(json!({
        "id": "a862048b-e48b-4b46-9ad2-d5fab49f6c7b",
        "status": "succeeded",
        "url": "https://cdn.creatomate.com/renders/a862048b.mp4",
        "snapshot_url": "https://cdn.creatomate.com/snapshots/a862048b.jpg",
        "template_id": "c0e7f6a5",
        "template_name": "Promo",
        "template_tags": ["social"],
        "output_format": "mp4",
        "render_scale": 1,
        "width": 1280,
        "height": 720,
        "frame_rate": 25,
        "duration": 12.5,
        "file_size": 1048576,
        "modifications": { "Title": "Hi" },
        "metadata": "order-42",
        "some_new_field": true,
    }))
    .expect("decode render");

    assert_eq!(render.status, RenderStatus::Succeeded);
    assert_eq!(render.width, Some(1280));
    assert_eq!(render.duration, Some(12.5));
    assert_eq!(render.file_size, Some(1_048_576));
    assert_eq!(render.template_tags, vec!["social".to_string()]);
    assert_eq!(render.metadata.as_deref(), Some("order-42"));
    assert_eq!(render.error_message, None);
}

#[test]
fn options_payload_serializes_typed_source() {
    let mut source = Source::new(OutputFormat::Mp4);
    source.push(Video::new("a.mp4"));
    let options = RenderOptions {
        render_scale: Some(0.5),
        ..RenderOptions::from_source(source)
    };

    assert_eq!(
        options.to_json(),
        json!({
            "render_scale": 0.5,
            "source": {
                "output_format": "mp4",
                "elements": [{ "type": "video", "source": "a.mp4" }],
            },
        })
    );
}

#[test]
fn raw_json_source_is_passed_through() {
    let raw = json!({ "outputFormat": "png", "elements": [] });
    let options = RenderOptions::from_source(raw.clone());
    assert_eq!(options.to_json()["source"], raw);
}

#[test]
fn template_payload_with_modifications() {
    let options = RenderOptions {
        tags: vec!["a".into(), "b".into()],
        webhook_url: Some("https://example.com/hook".into()),
        ..RenderOptions::from_template("tpl-1")
            .modification("Title", "Hello")
            .modification("Count", 3)
    };

    assert_eq!(
        options.to_json(),
        json!({
            "template_id": "tpl-1",
            "tags": ["a", "b"],
            "webhook_url": "https://example.com/hook",
            "modifications": { "Title": "Hello", "Count": 3 },
        })
    );
}

#[test]
fn empty_options_serialize_to_empty_object() {
    assert_eq!(RenderOptions::default().to_json(), json!({}));
}
