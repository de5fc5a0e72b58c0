// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graphics property records.
//!
//! Every field is optional and named after its CZML key. Validation happens
//! when the field values are built, so the records themselves are plain data.

use crate::{
    Color, Directions, HorizontalOrigin, LabelStyle, Material, Number, Positions, Vector2,
    Vector3, VerticalOrigin,
};

/// Offset from which the camera views an object, `{"cartesian": [x, y, z]}`.
pub type ViewFrom = Vector3;

/// Radii of an ellipsoid along its principal axes, `{"cartesian": [x, y, z]}`.
pub type Radii = Vector3;

/// A viewport-aligned image positioned by the packet's position.
/// Sometimes called a marker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Billboard {
    /// `show`
    pub show: Option<bool>,
    /// `image`: URI of the image.
    pub image: Option<String>,
    /// `scale`: multiplier on the image size.
    pub scale: Option<Number>,
    /// `pixelOffset`: screen-space offset in pixels.
    pub pixel_offset: Option<Vector2>,
    /// `eyeOffset`: eye-space offset in meters.
    pub eye_offset: Option<Vector3>,
    /// `horizontalOrigin`
    pub horizontal_origin: Option<HorizontalOrigin>,
    /// `verticalOrigin`
    pub vertical_origin: Option<VerticalOrigin>,
    /// `color`: tint multiplied with the image.
    pub color: Option<Color>,
    /// `rotation`: radians, counter-clockwise.
    pub rotation: Option<Number>,
}

/// A string of text positioned by the packet's position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Label {
    /// `show`
    pub show: Option<bool>,
    /// `text`
    pub text: Option<String>,
    /// `font`: CSS font string.
    pub font: Option<String>,
    /// `style`
    pub style: Option<LabelStyle>,
    /// `scale`
    pub scale: Option<Number>,
    /// `pixelOffset`
    pub pixel_offset: Option<Vector2>,
    /// `eyeOffset`
    pub eye_offset: Option<Vector3>,
    /// `horizontalOrigin`
    pub horizontal_origin: Option<HorizontalOrigin>,
    /// `verticalOrigin`
    pub vertical_origin: Option<VerticalOrigin>,
    /// `fillColor`
    pub fill_color: Option<Color>,
    /// `outlineColor`
    pub outline_color: Option<Color>,
    /// `outlineWidth`
    pub outline_width: Option<Number>,
}

/// A viewport-aligned circle positioned by the packet's position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// `show`
    pub show: Option<bool>,
    /// `color`
    pub color: Option<Color>,
    /// `pixelSize`: diameter in pixels.
    pub pixel_size: Option<Number>,
    /// `outlineColor`
    pub outline_color: Option<Color>,
    /// `outlineWidth`
    pub outline_width: Option<Number>,
}

/// A polyline traced by the motion of the object over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    /// `show`
    pub show: Option<bool>,
    /// `width`: in pixels.
    pub width: Option<Number>,
    /// `resolution`: maximum seconds between sampled vertices.
    pub resolution: Option<Number>,
    /// `leadTime`: seconds ahead of the current time to draw.
    pub lead_time: Option<Number>,
    /// `trailTime`: seconds behind the current time to draw.
    pub trail_time: Option<Number>,
    /// `material`
    pub material: Option<Material>,
}

/// A line composed of segments through the given vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    /// `show`
    pub show: Option<bool>,
    /// `positions`
    pub positions: Option<Positions>,
    /// `width`: in pixels.
    pub width: Option<Number>,
    /// `followSurface`: whether segments follow the ellipsoid surface.
    pub follow_surface: Option<bool>,
    /// `material`
    pub material: Option<Material>,
}

/// A closed figure on the surface of the Earth.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    /// `show`
    pub show: Option<bool>,
    /// `positions`
    pub positions: Option<Positions>,
    /// `height`: above the ellipsoid, in meters.
    pub height: Option<Number>,
    /// `extrudedHeight`: top of the extruded volume, in meters.
    pub extruded_height: Option<Number>,
    /// `perPositionHeight`: use each vertex's own height.
    pub per_position_height: Option<bool>,
    /// `fill`
    pub fill: Option<bool>,
    /// `material`
    pub material: Option<Material>,
    /// `outline`
    pub outline: Option<bool>,
    /// `outlineColor`
    pub outline_color: Option<Color>,
}

/// An ellipse on the surface, centered at the packet's position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ellipse {
    /// `show`
    pub show: Option<bool>,
    /// `semiMajorAxis`: in meters.
    pub semi_major_axis: Option<Number>,
    /// `semiMinorAxis`: in meters.
    pub semi_minor_axis: Option<Number>,
    /// `rotation`: radians from north.
    pub rotation: Option<Number>,
    /// `material`
    pub material: Option<Material>,
}

/// A closed quadric surface centered at the packet's position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ellipsoid {
    /// `show`
    pub show: Option<bool>,
    /// `radii`
    pub radii: Option<Radii>,
    /// `material`
    pub material: Option<Material>,
}

/// A cone extending from the position along the orientation's Z axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cone {
    /// `show`
    pub show: Option<bool>,
    /// `innerHalfAngle`: radians.
    pub inner_half_angle: Option<Number>,
    /// `outerHalfAngle`: radians.
    pub outer_half_angle: Option<Number>,
    /// `radius`: cap distance, in meters.
    pub radius: Option<Number>,
    /// `minimumClockAngle`: radians.
    pub minimum_clock_angle: Option<Number>,
    /// `maximumClockAngle`: radians.
    pub maximum_clock_angle: Option<Number>,
    /// `showIntersection`: draw where the cone meets the Earth.
    pub show_intersection: Option<bool>,
    /// `intersectionColor`
    pub intersection_color: Option<Color>,
    /// `capMaterial`
    pub cap_material: Option<Material>,
    /// `innerMaterial`
    pub inner_material: Option<Material>,
    /// `outerMaterial`
    pub outer_material: Option<Material>,
    /// `silhouetteMaterial`
    pub silhouette_material: Option<Material>,
}

/// A pyramid extending from the position along a list of directions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pyramid {
    /// `show`
    pub show: Option<bool>,
    /// `directions`
    pub directions: Option<Directions>,
    /// `radius`: cap distance, in meters.
    pub radius: Option<Number>,
    /// `showIntersection`
    pub show_intersection: Option<bool>,
    /// `intersectionColor`
    pub intersection_color: Option<Color>,
    /// `material`
    pub material: Option<Material>,
}
