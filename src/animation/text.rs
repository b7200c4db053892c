use super::AnimationTiming;
use crate::foundation::json::JsonObject;
use crate::properties::constants::{Direction, TextSplit};
use crate::properties::value::Scalar;

/// Reveals text piece by piece.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAppear {
    /// Duration, delay and easing.
    pub timing: AnimationTiming,
    /// Unit the text is split into.
    pub split: Option<TextSplit>,
    /// Delay between consecutive pieces.
    pub stagger: Option<Scalar>,
    /// Animate pieces in random order.
    pub random: bool,
    /// Highlight pieces as they appear.
    pub highlighting: bool,
}

impl TextAppear {
    /// Text appear animation with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.opt("split", &self.split)
            .opt("stagger", &self.stagger)
            .flag("random", self.random)
            .flag("highlighting", self.highlighting);
    }
}

/// Slides text in piece by piece.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextSlide {
    /// Duration, delay and easing.
    pub timing: AnimationTiming,
    /// Unit the text is split into.
    pub split: Option<TextSplit>,
    /// What the animation is scoped to, e.g. `"element"` or `"split-clip"`.
    pub scope: Option<String>,
    /// Delay between consecutive pieces.
    pub stagger: Option<Scalar>,
    /// Animate pieces in random order.
    pub random: bool,
    /// Side the text slides in from.
    pub direction: Option<Direction>,
    /// Travel distance of each piece.
    pub distance: Option<Scalar>,
    /// Clip pieces to their line box while moving.
    pub clipped: bool,
    /// Effect applied to the text background, e.g. `"scaling-clip"`.
    pub background_effect: Option<String>,
}

impl TextSlide {
    /// Text slide animation with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.opt("split", &self.split)
            .opt("scope", &self.scope)
            .opt("stagger", &self.stagger)
            .flag("random", self.random)
            .opt("direction", &self.direction)
            .opt("distance", &self.distance)
            .flag("clipped", self.clipped)
            .opt("background_effect", &self.background_effect);
    }
}

/// Types text out one character at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextTypewriter {
    /// Duration, delay and easing.
    pub timing: AnimationTiming,
    /// Characters per second.
    pub speed: Option<f64>,
}

impl TextTypewriter {
    /// Typewriter animation with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.opt("speed", &self.speed);
    }
}
