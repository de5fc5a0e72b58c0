// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed CZML packets and properties.
//!
//! This crate defines the domain model for CZML documents: packets, the
//! property records they carry, and the validated value types those records
//! are built from. It contains NO JSON mapping, which lives in czml-codec.
//!
//! # Design Principles
//!
//! - **Fail at construction**: value types only exist in a valid state.
//!   Out-of-range colors, non-finite numbers and malformed sample arrays are
//!   rejected by their constructors, never at serialization time.
//! - **Sparse records**: every property field is an `Option`. Unset fields
//!   are absent from the encoded form.
//! - **One slot per property**: a [`Packet`] has one field per property
//!   type, so a packet can never carry two billboards.

use thiserror::Error;

/// Error raised when a value violates a CZML type or range constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric component fell outside its allowed range.
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        /// Name of the offending component.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// A number was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending component.
        field: &'static str,
    },
    /// An array had a length the layout cannot describe.
    #[error("{field} has {len} values, expected {expected}")]
    BadLength {
        /// Name of the offending array.
        field: &'static str,
        /// Length that was supplied.
        len: usize,
        /// Human-readable description of the accepted lengths.
        expected: String,
    },
    /// A string was not one of the literals of a CZML enumeration.
    #[error("unknown {kind} literal {value:?}")]
    UnknownLiteral {
        /// Name of the enumeration.
        kind: &'static str,
        /// The rejected literal.
        value: String,
    },
    /// A web color was not in `#RGB[A]` or `#RRGGBB[AA]` form.
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
    /// An availability interval was not `start/stop`.
    #[error("invalid time interval {0:?}")]
    InvalidInterval(String),
    /// An extension key collides with a modeled packet key.
    #[error("extension key {0:?} is a packet property")]
    ReservedKey(String),
    /// Two fields that exclude each other were both present.
    #[error("{first} and {second} cannot both be set")]
    ConflictingFields {
        /// First field name.
        first: &'static str,
        /// Second field name.
        second: &'static str,
    },
}

mod color;
mod document;
mod graphics;
mod literal;
mod material;
mod packet;
mod position;
mod sampled;
mod time;

pub use color::{Color, ColorValue, Rgba, Rgbaf, DEFAULT_HEX_ALPHA};
pub use document::Document;
pub use graphics::{
    Billboard, Cone, Ellipse, Ellipsoid, Label, Path, Point, Polygon, Polyline, Pyramid, Radii,
    ViewFrom,
};
pub use literal::{
    HorizontalOrigin, InterpolationAlgorithm, LabelStyle, ReferenceFrame, StripeOrientation,
    VerticalOrigin,
};
pub use material::{Grid, ImageMaterial, Material, PolylineGlow, PolylineOutline, SolidColor, Stripe};
pub use packet::{Availability, Extensions, Packet};
pub use position::{Position, PositionKind, PositionValue, Positions};
pub use sampled::{Directions, Number, Orientation, Sampled, Vector2, Vector3};
pub use time::{FiniteSeconds, Iso8601, TimeTags, TimeValue};

/// Reject NaN and infinities for the named component.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

/// Reject values outside `min..=max` for the named component.
pub(crate) fn ensure_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    ensure_finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
