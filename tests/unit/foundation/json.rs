use super::*;
use serde_json::json;

#[test]
fn integral_numbers_have_no_fraction() {
    assert_eq!(serde_json::to_string(&number(700.0)).unwrap(), "700");
    assert_eq!(serde_json::to_string(&number(-90.0)).unwrap(), "-90");
    assert_eq!(serde_json::to_string(&number(0.94)).unwrap(), "0.94");
    assert_eq!(serde_json::to_string(&number(2.5)).unwrap(), "2.5");
}

#[test]
fn non_finite_numbers_become_null() {
    assert!(number(f64::NAN).is_null());
    assert!(number(f64::INFINITY).is_null());
}

#[test]
fn object_skips_unset_and_strips_nulls() {
    let mut obj = JsonObject::new();
    obj.set("a", &1.0)
        .opt::<String>("b", &None)
        .opt("c", &Some("x".to_string()))
        .flag("d", false)
        .flag("e", true)
        .list::<f64>("f", &[])
        .set("g", &f64::NAN);
    assert_eq!(
        Value::Object(obj.finish()),
        json!({ "a": 1, "c": "x", "e": true })
    );
}

#[test]
fn extend_overwrites_existing_keys() {
    let mut obj = JsonObject::new();
    obj.set("font_family", &"Arial".to_string());
    let mut hoisted = Map::new();
    hoisted.insert("font_family".to_string(), json!("Open Sans"));
    obj.extend(hoisted);
    assert_eq!(obj.finish()["font_family"], json!("Open Sans"));
}
