use super::*;
use serde_json::json;

#[test]
fn literals_pass_through_without_stringification() {
    assert_eq!(Prop::<Scalar>::from(50).to_json(), json!(50));
    assert_eq!(Prop::<Scalar>::from("50%").to_json(), json!("50%"));
    assert_eq!(Prop::<Scalar>::from(true).to_json(), json!(true));
    assert_eq!(Prop::<f64>::from(1.5).to_json(), json!(1.5));
    assert_eq!(Prop::<String>::from("#fff").to_json(), json!("#fff"));
}

#[test]
fn keyframes_keep_input_order_and_omit_unset_easing() {
    let prop: Prop<Scalar> = Prop::Keyframes(vec![
        Keyframe::new(2.0, "100%").easing(Easing::ElasticOut),
        Keyframe::new(0.0, "20%"),
    ]);
    assert_eq!(
        prop.to_json(),
        json!([
            { "time": 2, "value": "100%", "easing": "elastic-out" },
            { "time": 0, "value": "20%" },
        ])
    );
}

#[test]
fn empty_keyframes_serialize_to_empty_array() {
    let prop: Prop<f64> = Prop::Keyframes(Vec::new());
    assert_eq!(prop.to_json(), json!([]));
}

#[test]
fn fractional_times_survive() {
    let prop: Prop<String> = Prop::Keyframes(vec![Keyframe::new(0.94, "#0079ff")]);
    assert_eq!(prop.to_json(), json!([{ "time": 0.94, "value": "#0079ff" }]));
}

#[test]
fn as_value_only_for_constants() {
    assert_eq!(Prop::<i64>::from(3).as_value(), Some(&3));
    let keyed: Prop<i64> = Prop::Keyframes(vec![Keyframe::new(0.0, 1)]);
    assert!(keyed.as_value().is_none());
}
