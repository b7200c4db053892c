use serde_json::{Map, Number, Value};

/// Conversion into the canonical JSON tree sent to the API.
///
/// Every model type has exactly one hand-written implementation; there is no reflection or
/// serde round-trip in the request path. Implementations never fail: values that have no JSON
/// representation become `null` and are dropped by the enclosing [`JsonObject`].
pub trait ToJson {
    /// Convert `self` into a JSON value.
    fn to_json(&self) -> Value;
}

/// Encode a number the way a JavaScript producer would: integral values without a fraction.
pub(crate) fn number(v: f64) -> Value {
    if !v.is_finite() {
        return Value::Null;
    }
    // 2^53: beyond this an f64 no longer represents every integer.
    if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
        return Value::Number(Number::from(v as i64));
    }
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}

impl ToJson for f64 {
    fn to_json(&self) -> Value {
        number(*self)
    }
}

impl ToJson for i64 {
    fn to_json(&self) -> Value {
        Value::Number(Number::from(*self))
    }
}

impl ToJson for u32 {
    fn to_json(&self) -> Value {
        Value::Number(Number::from(*self))
    }
}

impl ToJson for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToJson for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

/// Builder for one output object.
///
/// Unset (`None`) fields are skipped at insertion time and `null` values are stripped by
/// [`JsonObject::finish`], so the output never carries null placeholders.
#[derive(Debug, Default)]
pub(crate) struct JsonObject {
    map: Map<String, Value>,
}

impl JsonObject {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a value unconditionally, replacing any previous entry.
    pub(crate) fn set(&mut self, key: &str, value: &impl ToJson) -> &mut Self {
        self.map.insert(key.to_owned(), value.to_json());
        self
    }

    /// Insert a raw JSON value unconditionally.
    pub(crate) fn set_value(&mut self, key: &str, value: Value) -> &mut Self {
        self.map.insert(key.to_owned(), value);
        self
    }

    /// Insert the value only when it is set.
    pub(crate) fn opt<T: ToJson>(&mut self, key: &str, value: &Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.set(key, v);
        }
        self
    }

    /// Insert `true` only; `false` is the service default and stays implicit.
    pub(crate) fn flag(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.map.insert(key.to_owned(), Value::Bool(true));
        }
        self
    }

    /// Insert a list only when it is non-empty.
    pub(crate) fn list<T: ToJson>(&mut self, key: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let items = values.iter().map(ToJson::to_json).collect();
            self.map.insert(key.to_owned(), Value::Array(items));
        }
        self
    }

    /// Hoist every entry of `fields` into this object.
    pub(crate) fn extend(&mut self, fields: Map<String, Value>) -> &mut Self {
        self.map.extend(fields);
        self
    }

    pub(crate) fn finish(mut self) -> Map<String, Value> {
        self.map.retain(|_, v| !v.is_null());
        self.map
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/json.rs"]
mod tests;
