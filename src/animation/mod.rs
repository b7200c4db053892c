//! Animation descriptors.
//!
//! An [`Animation`] is either listed in an element's `animations` or placed in one of its
//! reserved slots (`enter`, `exit`, `transition`); the element serializer decides the timing
//! markers for slotted animations.

mod basic;
mod text;

pub use basic::{Fade, Scale, Slide, Spin};
pub use text::{TextAppear, TextSlide, TextTypewriter};

use crate::foundation::json::{JsonObject, ToJson};
use crate::properties::constants::Easing;
use crate::properties::value::Scalar;
use serde_json::{Map, Value};

/// Timing fields shared by every animation kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationTiming {
    /// Start time relative to the element, or `"start"` / `"end"`.
    pub time: Option<Scalar>,
    /// Length of the animation.
    pub duration: Option<Scalar>,
    /// Easing over the whole animation.
    pub easing: Option<Easing>,
    /// Play backwards.
    pub reversed: bool,
    /// Play as a transition between this element and the previous one.
    pub transition: bool,
}

impl AnimationTiming {
    /// Unset timing; the service picks its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start time.
    pub fn time(mut self, time: impl Into<Scalar>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: impl Into<Scalar>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Set the easing.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Play backwards.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    fn write(&self, obj: &mut JsonObject) {
        obj.opt("time", &self.time)
            .opt("duration", &self.duration)
            .opt("easing", &self.easing)
            .flag("reversed", self.reversed)
            .flag("transition", self.transition);
    }
}

/// An animation of one kind. Each variant only carries the fields valid for that kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Animation {
    /// `fade`
    Fade(Fade),
    /// `slide`
    Slide(Slide),
    /// `scale`
    Scale(Scale),
    /// `spin`
    Spin(Spin),
    /// `text-appear`
    TextAppear(TextAppear),
    /// `text-slide`
    TextSlide(TextSlide),
    /// `text-typewriter`
    TextTypewriter(TextTypewriter),
}

impl Animation {
    /// The `type` discriminant sent to the service.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Fade(_) => "fade",
            Self::Slide(_) => "slide",
            Self::Scale(_) => "scale",
            Self::Spin(_) => "spin",
            Self::TextAppear(_) => "text-appear",
            Self::TextSlide(_) => "text-slide",
            Self::TextTypewriter(_) => "text-typewriter",
        }
    }

    /// Shared timing fields.
    pub fn timing(&self) -> &AnimationTiming {
        match self {
            Self::Fade(a) => &a.timing,
            Self::Slide(a) => &a.timing,
            Self::Scale(a) => &a.timing,
            Self::Spin(a) => &a.timing,
            Self::TextAppear(a) => &a.timing,
            Self::TextSlide(a) => &a.timing,
            Self::TextTypewriter(a) => &a.timing,
        }
    }

    /// Serialize into a flat JSON object.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut obj = JsonObject::new();
        self.timing().write(&mut obj);
        match self {
            Self::Fade(a) => a.write(&mut obj),
            Self::Slide(a) => a.write(&mut obj),
            Self::Scale(a) => a.write(&mut obj),
            Self::Spin(a) => a.write(&mut obj),
            Self::TextAppear(a) => a.write(&mut obj),
            Self::TextSlide(a) => a.write(&mut obj),
            Self::TextTypewriter(a) => a.write(&mut obj),
        }
        obj.set_value("type", Value::String(self.type_tag().to_owned()));
        obj.finish()
    }
}

impl ToJson for Animation {
    fn to_json(&self) -> Value {
        Value::Object(self.to_map())
    }
}

macro_rules! animation_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Animation {
                fn from(a: $variant) -> Self {
                    Self::$variant(a)
                }
            }
        )+
    };
}

animation_from!(
    Fade,
    Slide,
    Scale,
    Spin,
    TextAppear,
    TextSlide,
    TextTypewriter
);

#[cfg(test)]
#[path = "../../tests/unit/animation/animation.rs"]
mod tests;
