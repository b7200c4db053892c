use crate::foundation::json::{JsonObject, ToJson, number};
use crate::properties::constants::Easing;
use serde_json::Value;

/// A literal property value: a number, a string (`"50%"`, `"5 vmin"`, `"media"`) or a bool.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Numeric literal.
    Number(f64),
    /// String literal, including unit strings such as `"50%"`.
    Text(String),
    /// Boolean literal.
    Bool(bool),
}

impl ToJson for Scalar {
    fn to_json(&self) -> Value {
        match self {
            Self::Number(n) => number(*n),
            Self::Text(s) => Value::String(s.clone()),
            Self::Bool(b) => Value::Bool(*b),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// One point of a time-varying property.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe<T> {
    /// Time in seconds, relative to the owning element.
    pub time: f64,
    /// Value reached at `time`.
    pub value: T,
    /// Easing toward this keyframe. Omitted from the output when unset.
    pub easing: Option<Easing>,
}

impl<T> Keyframe<T> {
    /// Keyframe with the service's default easing.
    pub fn new(time: f64, value: impl Into<T>) -> Self {
        Self {
            time,
            value: value.into(),
            easing: None,
        }
    }

    /// Set the easing toward this keyframe.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

impl<T: ToJson> ToJson for Keyframe<T> {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.set("time", &self.time)
            .set("value", &self.value)
            .opt("easing", &self.easing);
        Value::Object(obj.finish())
    }
}

/// A property that is either a constant or a keyframed sequence.
///
/// Keyframes are emitted in the order given; the service interprets their ordering.
#[derive(Clone, Debug, PartialEq)]
pub enum Prop<T> {
    /// Constant value.
    Value(T),
    /// Time-varying value.
    Keyframes(Vec<Keyframe<T>>),
}

impl<T> Prop<T> {
    /// Borrow the constant value, if this is not keyframed.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Keyframes(_) => None,
        }
    }
}

impl<T: ToJson> ToJson for Prop<T> {
    fn to_json(&self) -> Value {
        match self {
            Self::Value(v) => v.to_json(),
            Self::Keyframes(keys) => Value::Array(keys.iter().map(ToJson::to_json).collect()),
        }
    }
}

impl<T> From<Vec<Keyframe<T>>> for Prop<T> {
    fn from(keys: Vec<Keyframe<T>>) -> Self {
        Self::Keyframes(keys)
    }
}

macro_rules! prop_from {
    ($target:ty: $($src:ty),+ $(,)?) => {
        $(
            impl From<$src> for Prop<$target> {
                fn from(v: $src) -> Self {
                    Self::Value(<$target>::from(v))
                }
            }
        )+
    };
}

prop_from!(Scalar: Scalar, f64, i32, i64, &str, String, bool);
prop_from!(f64: f64, i32, u32, f32);
prop_from!(i64: i64, i32, u32);
prop_from!(bool: bool);
prop_from!(String: String, &str);

#[cfg(test)]
#[path = "../../tests/unit/properties/value.rs"]
mod tests;
