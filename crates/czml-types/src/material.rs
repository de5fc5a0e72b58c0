// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Surface materials.
//!
//! A material object carries exactly one of the keys below, e.g.
//! `{"solidColor": {"color": {"rgba": [255, 0, 0, 255]}}}`.

use crate::{Color, Number, StripeOrientation, Vector2};

/// A material used to fill a surface or line.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// `solidColor`: a single color.
    SolidColor(SolidColor),
    /// `image`: a tiled image.
    Image(ImageMaterial),
    /// `grid`: a two-dimensional grid of lines.
    Grid(Grid),
    /// `stripe`: alternating stripes.
    Stripe(Stripe),
    /// `polylineGlow`: glowing line, polylines only.
    PolylineGlow(PolylineGlow),
    /// `polylineOutline`: outlined line, polylines only.
    PolylineOutline(PolylineOutline),
}

impl Material {
    /// The CZML key of this material kind.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::SolidColor(_) => "solidColor",
            Self::Image(_) => "image",
            Self::Grid(_) => "grid",
            Self::Stripe(_) => "stripe",
            Self::PolylineGlow(_) => "polylineGlow",
            Self::PolylineOutline(_) => "polylineOutline",
        }
    }

    /// Solid color material.
    pub fn solid(color: Color) -> Self {
        Self::SolidColor(SolidColor { color: Some(color) })
    }
}

/// A material filled with one color.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolidColor {
    /// `color`
    pub color: Option<Color>,
}

/// A material filled with an image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageMaterial {
    /// `image`: URI of the image.
    pub image: Option<String>,
    /// `repeat`: repetitions in each direction.
    pub repeat: Option<Vector2>,
}

/// A material drawn as a grid of lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    /// `color`
    pub color: Option<Color>,
    /// `cellAlpha`: alpha of the space between lines.
    pub cell_alpha: Option<Number>,
    /// `lineCount`: lines per direction.
    pub line_count: Option<Vector2>,
    /// `lineThickness`: line width in pixels per direction.
    pub line_thickness: Option<Vector2>,
}

/// A material drawn as alternating stripes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stripe {
    /// `orientation`
    pub orientation: Option<StripeOrientation>,
    /// `evenColor`
    pub even_color: Option<Color>,
    /// `oddColor`
    pub odd_color: Option<Color>,
    /// `offset`: starting point in the pattern.
    pub offset: Option<Number>,
    /// `repeat`: number of stripe pairs.
    pub repeat: Option<Number>,
}

/// A glowing polyline material.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolylineGlow {
    /// `color`
    pub color: Option<Color>,
    /// `glowPower`: glow strength as a fraction of line width.
    pub glow_power: Option<Number>,
}

/// An outlined polyline material.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolylineOutline {
    /// `color`
    pub color: Option<Color>,
    /// `outlineColor`
    pub outline_color: Option<Color>,
    /// `outlineWidth`: in pixels.
    pub outline_width: Option<Number>,
}
