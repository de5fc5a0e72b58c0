// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON mapping for materials and graphics records.

use czml_types::{
    Billboard, Cone, Ellipse, Ellipsoid, Grid, ImageMaterial, Label, Material, Path, Point,
    Polygon, Polyline, PolylineGlow, PolylineOutline, Pyramid, SolidColor, Stripe,
};
use serde_json::Value;

use crate::json::{Context, CzmlJson, Object};
use crate::values::one_of;
use crate::CodecError;

/// Records whose fields are all optional `CzmlJson` values, one key each.
macro_rules! record_json {
    ($name:ident { $($field:ident => $key:literal),+ $(,)? }) => {
        impl CzmlJson for $name {
            fn data(&self) -> Value {
                let mut out = Object::new();
                $(out.put($key, self.$field.as_ref());)+
                out.into_value()
            }

            fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
                let mut fields = cx.object(value)?;
                let record = Self {
                    $($field: fields.take($key)?,)+
                };
                fields.finish()?;
                Ok(record)
            }
        }
    };
}

record_json!(SolidColor { color => "color" });

record_json!(ImageMaterial {
    image => "image",
    repeat => "repeat",
});

record_json!(Grid {
    color => "color",
    cell_alpha => "cellAlpha",
    line_count => "lineCount",
    line_thickness => "lineThickness",
});

record_json!(Stripe {
    orientation => "orientation",
    even_color => "evenColor",
    odd_color => "oddColor",
    offset => "offset",
    repeat => "repeat",
});

record_json!(PolylineGlow {
    color => "color",
    glow_power => "glowPower",
});

record_json!(PolylineOutline {
    color => "color",
    outline_color => "outlineColor",
    outline_width => "outlineWidth",
});

impl CzmlJson for Material {
    fn data(&self) -> Value {
        let inner = match self {
            Self::SolidColor(m) => m.data(),
            Self::Image(m) => m.data(),
            Self::Grid(m) => m.data(),
            Self::Stripe(m) => m.data(),
            Self::PolylineGlow(m) => m.data(),
            Self::PolylineOutline(m) => m.data(),
        };
        let mut out = Object::new();
        out.put_value(self.key(), inner);
        out.into_value()
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let mut fields = cx.object(value)?;
        let candidates = [
            fields.take("solidColor")?.map(Self::SolidColor),
            fields.take("image")?.map(Self::Image),
            fields.take("grid")?.map(Self::Grid),
            fields.take("stripe")?.map(Self::Stripe),
            fields.take("polylineGlow")?.map(Self::PolylineGlow),
            fields.take("polylineOutline")?.map(Self::PolylineOutline),
        ];
        let cx = fields.cx().clone();
        fields.finish()?;
        one_of(&cx, candidates, Self::key)?.ok_or_else(|| {
            cx.missing("solidColor, image, grid, stripe, polylineGlow or polylineOutline")
        })
    }
}

record_json!(Billboard {
    show => "show",
    image => "image",
    scale => "scale",
    pixel_offset => "pixelOffset",
    eye_offset => "eyeOffset",
    horizontal_origin => "horizontalOrigin",
    vertical_origin => "verticalOrigin",
    color => "color",
    rotation => "rotation",
});

record_json!(Label {
    show => "show",
    text => "text",
    font => "font",
    style => "style",
    scale => "scale",
    pixel_offset => "pixelOffset",
    eye_offset => "eyeOffset",
    horizontal_origin => "horizontalOrigin",
    vertical_origin => "verticalOrigin",
    fill_color => "fillColor",
    outline_color => "outlineColor",
    outline_width => "outlineWidth",
});

record_json!(Point {
    show => "show",
    color => "color",
    pixel_size => "pixelSize",
    outline_color => "outlineColor",
    outline_width => "outlineWidth",
});

record_json!(Path {
    show => "show",
    width => "width",
    resolution => "resolution",
    lead_time => "leadTime",
    trail_time => "trailTime",
    material => "material",
});

record_json!(Polyline {
    show => "show",
    positions => "positions",
    width => "width",
    follow_surface => "followSurface",
    material => "material",
});

record_json!(Polygon {
    show => "show",
    positions => "positions",
    height => "height",
    extruded_height => "extrudedHeight",
    per_position_height => "perPositionHeight",
    fill => "fill",
    material => "material",
    outline => "outline",
    outline_color => "outlineColor",
});

record_json!(Ellipse {
    show => "show",
    semi_major_axis => "semiMajorAxis",
    semi_minor_axis => "semiMinorAxis",
    rotation => "rotation",
    material => "material",
});

record_json!(Ellipsoid {
    show => "show",
    radii => "radii",
    material => "material",
});

record_json!(Cone {
    show => "show",
    inner_half_angle => "innerHalfAngle",
    outer_half_angle => "outerHalfAngle",
    radius => "radius",
    minimum_clock_angle => "minimumClockAngle",
    maximum_clock_angle => "maximumClockAngle",
    show_intersection => "showIntersection",
    intersection_color => "intersectionColor",
    cap_material => "capMaterial",
    inner_material => "innerMaterial",
    outer_material => "outerMaterial",
    silhouette_material => "silhouetteMaterial",
});

record_json!(Pyramid {
    show => "show",
    directions => "directions",
    radius => "radius",
    show_intersection => "showIntersection",
    intersection_color => "intersectionColor",
    material => "material",
});
