use crate::animation::Animation;
use crate::foundation::json::JsonObject;
use crate::properties::constants::{
    BlendMode, BlurMode, ColorFilter, FillMode, MaskMode, StrokeCap, StrokeJoin, WarpMode,
};
use crate::properties::structures::{Blur, Fill, FillColor, Shadow, Stroke, Warp, WarpPoint};
use crate::properties::value::{Prop, Scalar};

/// Properties shared by every element kind.
///
/// Positional and visual fields accept either a constant or keyframes. The animation slots
/// (`enter`, `exit`, `transition`) are folded into `animations` when the element is serialized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementProps {
    /// Unique identifier, used by template modifications.
    pub id: Option<String>,
    /// Track the element is placed on.
    pub track: Option<u32>,
    /// Start time within the parent composition.
    pub time: Option<Scalar>,
    /// Visible duration. Media elements accept `"media"`, compositions `"composition"`.
    pub duration: Option<Scalar>,

    /// Horizontal position.
    pub x: Option<Prop<Scalar>>,
    /// Vertical position.
    pub y: Option<Prop<Scalar>>,
    /// Width, in pixels or percent of the parent.
    pub width: Option<Prop<Scalar>>,
    /// Height, in pixels or percent of the parent.
    pub height: Option<Prop<Scalar>>,
    /// Constrains the element to a fixed aspect ratio.
    pub aspect_ratio: Option<Prop<f64>>,
    /// Inner spacing on the left and right.
    pub x_padding: Option<Prop<Scalar>>,
    /// Inner spacing on the top and bottom.
    pub y_padding: Option<Prop<Scalar>>,
    /// Render order.
    pub z_index: Option<Prop<i64>>,
    /// Origin of position, scale, rotation and skew on the x axis.
    pub x_anchor: Option<Prop<Scalar>>,
    /// Origin of position, scale, rotation and skew on the y axis.
    pub y_anchor: Option<Prop<Scalar>>,
    /// Horizontal scale, for example `150%`.
    pub x_scale: Option<Prop<Scalar>>,
    /// Vertical scale.
    pub y_scale: Option<Prop<Scalar>>,
    /// Skew along the x axis, in degrees.
    pub x_skew: Option<Prop<Scalar>>,
    /// Skew along the y axis, in degrees.
    pub y_skew: Option<Prop<Scalar>>,
    /// Rotation around the x axis, in degrees.
    pub x_rotation: Option<Prop<Scalar>>,
    /// Rotation around the y axis, in degrees.
    pub y_rotation: Option<Prop<Scalar>>,
    /// Rotation in the image plane, in degrees.
    pub z_rotation: Option<Prop<Scalar>>,
    /// Distance between the z=0 plane and the camera.
    pub perspective: Option<Prop<Scalar>>,
    /// Show the element when rotated away from the camera.
    pub backface_visible: Option<Prop<bool>>,
    /// Position of the content inside the element, x axis.
    pub x_alignment: Option<Prop<Scalar>>,
    /// Position of the content inside the element, y axis.
    pub y_alignment: Option<Prop<Scalar>>,

    /// Drop shadow as one structured value.
    pub shadow: Option<Prop<Shadow>>,
    /// Drop shadow color.
    pub shadow_color: Option<Prop<String>>,
    /// Drop shadow blur radius.
    pub shadow_blur: Option<Prop<Scalar>>,
    /// Drop shadow offset on the x axis.
    pub shadow_x: Option<Prop<Scalar>>,
    /// Drop shadow offset on the y axis.
    pub shadow_y: Option<Prop<Scalar>>,
    /// Clip the content to the element's bounds.
    pub clip: Option<Prop<bool>>,
    /// `0%` to `100%`.
    pub opacity: Option<Prop<Scalar>>,
    /// How the element is composited onto what is below it.
    pub blend_mode: Option<Prop<BlendMode>>,
    /// Color effect applied to the element.
    pub color_filter: Option<Prop<ColorFilter>>,
    /// Intensity of `color_filter`.
    pub color_filter_value: Option<Prop<f64>>,
    /// Color painted over the element.
    pub color_overlay: Option<Prop<String>>,
    /// Blur as one structured value.
    pub blur: Option<Prop<Blur>>,
    /// Blur radius in pixels.
    pub blur_radius: Option<Prop<f64>>,
    /// Blur algorithm.
    pub blur_mode: Option<Prop<BlurMode>>,
    /// Use the element as a mask.
    pub mask_mode: Option<Prop<MaskMode>>,
    /// Repeat the element across its composition.
    pub repeat: Option<Prop<bool>>,
    /// Warp as one structured value.
    pub warp: Option<Prop<Warp>>,
    /// How `warp_matrix` deforms the element.
    pub warp_mode: Option<Prop<WarpMode>>,
    /// Grid of control points used with `warp_mode`.
    pub warp_matrix: Option<Prop<Vec<Vec<WarpPoint>>>>,

    /// Transition between this element and the previous one on the same track.
    pub transition: Option<Animation>,
    /// Played when the element appears.
    pub enter: Option<Animation>,
    /// Played, reversed, when the element disappears.
    pub exit: Option<Animation>,
    /// Additional animations, in order.
    pub animations: Vec<Animation>,
}

impl ElementProps {
    /// Writes everything except the animation slots.
    pub(crate) fn write(&self, obj: &mut JsonObject) {
        obj.opt("id", &self.id)
            .opt("track", &self.track)
            .opt("time", &self.time)
            .opt("duration", &self.duration)
            .opt("x", &self.x)
            .opt("y", &self.y)
            .opt("width", &self.width)
            .opt("height", &self.height)
            .opt("aspect_ratio", &self.aspect_ratio)
            .opt("x_padding", &self.x_padding)
            .opt("y_padding", &self.y_padding)
            .opt("z_index", &self.z_index)
            .opt("x_anchor", &self.x_anchor)
            .opt("y_anchor", &self.y_anchor)
            .opt("x_scale", &self.x_scale)
            .opt("y_scale", &self.y_scale)
            .opt("x_skew", &self.x_skew)
            .opt("y_skew", &self.y_skew)
            .opt("x_rotation", &self.x_rotation)
            .opt("y_rotation", &self.y_rotation)
            .opt("z_rotation", &self.z_rotation)
            .opt("perspective", &self.perspective)
            .opt("backface_visible", &self.backface_visible)
            .opt("x_alignment", &self.x_alignment)
            .opt("y_alignment", &self.y_alignment)
            .opt("shadow", &self.shadow)
            .opt("shadow_color", &self.shadow_color)
            .opt("shadow_blur", &self.shadow_blur)
            .opt("shadow_x", &self.shadow_x)
            .opt("shadow_y", &self.shadow_y)
            .opt("clip", &self.clip)
            .opt("opacity", &self.opacity)
            .opt("blend_mode", &self.blend_mode)
            .opt("color_filter", &self.color_filter)
            .opt("color_filter_value", &self.color_filter_value)
            .opt("color_overlay", &self.color_overlay)
            .opt("blur", &self.blur)
            .opt("blur_radius", &self.blur_radius)
            .opt("blur_mode", &self.blur_mode)
            .opt("mask_mode", &self.mask_mode)
            .opt("repeat", &self.repeat)
            .opt("warp", &self.warp)
            .opt("warp_mode", &self.warp_mode)
            .opt("warp_matrix", &self.warp_matrix);
    }
}

/// Fill fields of shapes and text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillProps {
    /// Fill color and mode.
    pub fill: Option<Prop<Fill>>,
    /// Solid color or gradient stops.
    pub fill_color: Option<Prop<FillColor>>,
    /// Solid or gradient fill.
    pub fill_mode: Option<Prop<FillMode>>,
}

impl FillProps {
    pub(crate) fn write(&self, obj: &mut JsonObject) {
        obj.opt("fill", &self.fill)
            .opt("fill_color", &self.fill_color)
            .opt("fill_mode", &self.fill_mode);
    }
}

/// Stroke fields of shapes, text and visual media.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeProps {
    /// Outline.
    pub stroke: Option<Prop<Stroke>>,
    /// Outline color.
    pub stroke_color: Option<Prop<String>>,
    /// Outline width.
    pub stroke_width: Option<Prop<Scalar>>,
    /// Shape of open path ends.
    pub stroke_cap: Option<Prop<StrokeCap>>,
    /// Shape of path corners.
    pub stroke_join: Option<Prop<StrokeJoin>>,
}

impl StrokeProps {
    pub(crate) fn write(&self, obj: &mut JsonObject) {
        obj.opt("stroke", &self.stroke)
            .opt("stroke_color", &self.stroke_color)
            .opt("stroke_width", &self.stroke_width)
            .opt("stroke_cap", &self.stroke_cap)
            .opt("stroke_join", &self.stroke_join);
    }
}
