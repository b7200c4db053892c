use super::props::{ElementProps, FillProps, StrokeProps};
use crate::foundation::json::JsonObject;
use crate::properties::value::{Prop, Scalar};

/// Fields shared by the vector shape kinds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeProps {
    /// Fill color and mode.
    pub fill: FillProps,
    /// Outline.
    pub stroke: StrokeProps,
    /// Where along the path the stroke begins.
    pub stroke_start: Option<Prop<Scalar>>,
    /// Offset of the stroked section along the path.
    pub stroke_offset: Option<Prop<Scalar>>,
    /// SVG path data.
    pub path: Option<Prop<String>>,
}

impl ShapeProps {
    fn write(&self, obj: &mut JsonObject) {
        self.fill.write(obj);
        self.stroke.write(obj);
        obj.opt("stroke_start", &self.stroke_start)
            .opt("stroke_offset", &self.stroke_offset)
            .opt("path", &self.path);
    }
}

/// Free-form vector shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// Fill and stroke.
    pub shape: ShapeProps,
}

impl Shape {
    pub(super) fn write(&self, obj: &mut JsonObject) {
        self.shape.write(obj);
    }
}

/// Rectangle, optionally with rounded corners.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// Fill and stroke.
    pub shape: ShapeProps,
    /// Corner rounding.
    pub border_radius: Option<Prop<Scalar>>,
}

impl Rectangle {
    pub(super) fn write(&self, obj: &mut JsonObject) {
        self.shape.write(obj);
        obj.opt("border_radius", &self.border_radius);
    }
}

/// Ellipse filling the element's bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ellipse {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// Fill and stroke.
    pub shape: ShapeProps,
}

impl Ellipse {
    pub(super) fn write(&self, obj: &mut JsonObject) {
        self.shape.write(obj);
    }
}
