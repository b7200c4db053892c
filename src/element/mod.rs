//! Timeline elements and the element serializer.

mod composition;
mod media;
mod props;
mod shape;
mod text;

pub use composition::Composition;
pub use media::{Audio, Image, Video};
pub use props::{ElementProps, FillProps, StrokeProps};
pub use shape::{Ellipse, Rectangle, Shape, ShapeProps};
pub use text::Text;

use crate::foundation::json::{JsonObject, ToJson};
use serde_json::{Map, Value};
use std::collections::VecDeque;

/// A visual or audio entity on the timeline.
///
/// Payloads are boxed; every kind embeds the full [`ElementProps`] set.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// `type: "video"`.
    Video(Box<Video>),
    /// `type: "image"`.
    Image(Box<Image>),
    /// `type: "audio"`.
    Audio(Box<Audio>),
    /// `type: "text"`.
    Text(Box<Text>),
    /// `type: "shape"`.
    Shape(Box<Shape>),
    /// `type: "rectangle"`.
    Rectangle(Box<Rectangle>),
    /// `type: "ellipse"`.
    Ellipse(Box<Ellipse>),
    /// `type: "composition"`.
    Composition(Box<Composition>),
}

impl Element {
    /// The `type` discriminant sent to the service.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Video(_) => "video",
            Self::Image(_) => "image",
            Self::Audio(_) => "audio",
            Self::Text(_) => "text",
            Self::Shape(_) => "shape",
            Self::Rectangle(_) => "rectangle",
            Self::Ellipse(_) => "ellipse",
            Self::Composition(_) => "composition",
        }
    }

    /// Properties shared by every kind.
    pub fn base(&self) -> &ElementProps {
        match self {
            Self::Video(e) => &e.base,
            Self::Image(e) => &e.base,
            Self::Audio(e) => &e.base,
            Self::Text(e) => &e.base,
            Self::Shape(e) => &e.base,
            Self::Rectangle(e) => &e.base,
            Self::Ellipse(e) => &e.base,
            Self::Composition(e) => &e.base,
        }
    }

    /// Mutable access to the shared properties.
    pub fn base_mut(&mut self) -> &mut ElementProps {
        match self {
            Self::Video(e) => &mut e.base,
            Self::Image(e) => &mut e.base,
            Self::Audio(e) => &mut e.base,
            Self::Text(e) => &mut e.base,
            Self::Shape(e) => &mut e.base,
            Self::Rectangle(e) => &mut e.base,
            Self::Ellipse(e) => &mut e.base,
            Self::Composition(e) => &mut e.base,
        }
    }

    /// Serialize into the flat object the service expects.
    ///
    /// Composition children are serialized recursively with the same rules.
    pub fn to_map(&self) -> Map<String, Value> {
        let base = self.base();
        let mut obj = JsonObject::new();
        base.write(&mut obj);
        match self {
            Self::Video(e) => e.write(&mut obj),
            Self::Image(e) => e.write(&mut obj),
            Self::Audio(e) => e.write(&mut obj),
            Self::Text(e) => e.write(&mut obj),
            Self::Shape(e) => e.write(&mut obj),
            Self::Rectangle(e) => e.write(&mut obj),
            Self::Ellipse(e) => e.write(&mut obj),
            Self::Composition(e) => e.write(&mut obj),
        }

        let animations = merge_animation_slots(base);
        if !animations.is_empty() {
            obj.set_value("animations", Value::Array(animations));
        }
        obj.set_value("type", Value::String(self.type_tag().to_owned()));
        obj.finish()
    }
}

/// Folds `enter`, `exit` and `transition` into the explicit animation list.
///
/// Resulting order: `[transition, enter, ...animations, exit]`.
fn merge_animation_slots(base: &ElementProps) -> Vec<Value> {
    let mut list: VecDeque<Value> = base.animations.iter().map(ToJson::to_json).collect();

    if let Some(enter) = &base.enter {
        let mut anim = enter.to_map();
        anim.insert("time".to_owned(), Value::from("start"));
        list.push_front(Value::Object(anim));
    }

    if let Some(exit) = &base.exit {
        let mut anim = exit.to_map();
        anim.insert("time".to_owned(), Value::from("end"));
        anim.insert("reversed".to_owned(), Value::Bool(true));
        list.push_back(Value::Object(anim));
    }

    if let Some(transition) = &base.transition {
        let mut anim = transition.to_map();
        anim.insert("time".to_owned(), Value::from("start"));
        anim.insert("transition".to_owned(), Value::Bool(true));
        list.push_front(Value::Object(anim));
    }

    list.into()
}

impl ToJson for Element {
    fn to_json(&self) -> Value {
        Value::Object(self.to_map())
    }
}

impl serde::Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

macro_rules! element_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(e: $variant) -> Self {
                    Self::$variant(Box::new(e))
                }
            }
        )+
    };
}

element_from!(Video, Image, Audio, Text, Shape, Rectangle, Ellipse, Composition);

#[cfg(test)]
#[path = "../../tests/unit/element/element.rs"]
mod tests;
