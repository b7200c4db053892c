use super::AnimationTiming;
use crate::foundation::json::JsonObject;
use crate::properties::constants::{Direction, SpinDirection};
use crate::properties::value::Scalar;

/// Opacity fade.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fade {
    /// Duration, delay and easing.
    pub timing: AnimationTiming,
    /// Starting opacity.
    pub from: Option<Scalar>,
    /// Ending opacity.
    pub to: Option<Scalar>,
}

impl Fade {
    /// Fade with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.opt("from", &self.from).opt("to", &self.to);
    }
}

/// Moves the element in from (or out to) one side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slide {
    /// Duration, delay and easing.
    pub timing: AnimationTiming,
    /// Side the element slides in from.
    pub direction: Option<Direction>,
    /// Travel distance.
    pub distance: Option<Scalar>,
}

impl Slide {
    /// Slide with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.opt("direction", &self.direction)
            .opt("distance", &self.distance);
    }
}

/// Scale from one factor to another.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scale {
    /// Duration, delay and easing.
    pub timing: AnimationTiming,
    /// Starting scale.
    pub from: Option<Scalar>,
    /// Ending scale.
    pub to: Option<Scalar>,
}

impl Scale {
    /// Scale with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.opt("from", &self.from).opt("to", &self.to);
    }
}

/// Rotation around the element's anchor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spin {
    /// Duration, delay and easing.
    pub timing: AnimationTiming,
    /// Number of full turns.
    pub rotations: Option<f64>,
    /// Clockwise or counter-clockwise.
    pub direction: Option<SpinDirection>,
}

impl Spin {
    /// Spin with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.opt("rotations", &self.rotations)
            .opt("direction", &self.direction);
    }
}
