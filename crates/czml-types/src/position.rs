// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Positions of objects and vertex lists.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::{ensure_finite, ensure_range, ReferenceFrame, Sampled, TimeTags, ValidationError};

/// Coordinate system of a position or vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionKind {
    /// Earth-centered cartesian meters, `[x, y, z]`.
    Cartesian,
    /// `[longitude, latitude, height]` with angles in degrees.
    CartographicDegrees,
    /// `[longitude, latitude, height]` with angles in radians.
    CartographicRadians,
}

impl PositionKind {
    /// Every kind, in the order keys are tried during decoding.
    pub const ALL: [Self; 3] = [
        Self::Cartesian,
        Self::CartographicDegrees,
        Self::CartographicRadians,
    ];

    /// The CZML key carrying coordinates of this kind.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::CartographicDegrees => "cartographicDegrees",
            Self::CartographicRadians => "cartographicRadians",
        }
    }

    fn check_point(self, [a, b, c]: [f64; 3]) -> Result<(), ValidationError> {
        match self {
            Self::Cartesian => {
                ensure_finite("x", a)?;
                ensure_finite("y", b)?;
                ensure_finite("z", c)?;
            }
            Self::CartographicDegrees => {
                ensure_range("longitude", a, -180.0, 180.0)?;
                ensure_range("latitude", b, -90.0, 90.0)?;
                ensure_finite("height", c)?;
            }
            Self::CartographicRadians => {
                ensure_range("longitude", a, -PI, PI)?;
                ensure_range("latitude", b, -FRAC_PI_2, FRAC_PI_2)?;
                ensure_finite("height", c)?;
            }
        }
        Ok(())
    }
}

/// The coordinates of a [`Position`].
#[derive(Clone, Debug, PartialEq)]
pub enum PositionValue {
    /// `cartesian`: `[x, y, z]` or samples.
    Cartesian(Sampled<3>),
    /// `cartographicDegrees`: `[lon, lat, height]` or samples.
    CartographicDegrees(Sampled<3>),
    /// `cartographicRadians`: `[lon, lat, height]` or samples.
    CartographicRadians(Sampled<3>),
    /// `cartesianVelocity`: `[x, y, z, dx, dy, dz]` or samples.
    CartesianVelocity(Sampled<6>),
}

impl PositionValue {
    /// Every key a position can be written under.
    pub const KEYS: [&'static str; 4] = [
        "cartesian",
        "cartographicDegrees",
        "cartographicRadians",
        "cartesianVelocity",
    ];

    /// The CZML key this value is written under.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Cartesian(_) => Self::KEYS[0],
            Self::CartographicDegrees(_) => Self::KEYS[1],
            Self::CartographicRadians(_) => Self::KEYS[2],
            Self::CartesianVelocity(_) => Self::KEYS[3],
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let (kind, tuples) = match self {
            Self::Cartesian(v) => (PositionKind::Cartesian, v),
            Self::CartographicDegrees(v) => (PositionKind::CartographicDegrees, v),
            Self::CartographicRadians(v) => (PositionKind::CartographicRadians, v),
            // Sampled already guarantees finite components.
            Self::CartesianVelocity(_) => return Ok(()),
        };
        tuples.tuples().try_for_each(|p| kind.check_point(*p))
    }
}

/// The position of an object in the world.
///
/// Has no visual representation of its own but locates the billboards,
/// labels and other graphics of its packet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Position {
    tags: TimeTags,
    reference_frame: Option<ReferenceFrame>,
    value: Option<PositionValue>,
}

impl Position {
    /// Position with coordinates, validating cartographic angle ranges.
    pub fn new(value: PositionValue) -> Result<Self, ValidationError> {
        let mut position = Self::default();
        position.set_value(value)?;
        Ok(position)
    }

    /// Constant cartesian position.
    pub fn cartesian(x: f64, y: f64, z: f64) -> Result<Self, ValidationError> {
        Self::new(PositionValue::Cartesian(Sampled::constant([x, y, z])?))
    }

    /// Constant position in degrees.
    pub fn cartographic_degrees(
        longitude: f64,
        latitude: f64,
        height: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(PositionValue::CartographicDegrees(Sampled::constant([
            longitude, latitude, height,
        ])?))
    }

    /// Replace the coordinates.
    pub fn set_value(&mut self, value: PositionValue) -> Result<(), ValidationError> {
        value.validate()?;
        self.value = Some(value);
        Ok(())
    }

    /// Remove the coordinates.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Set the reference frame.
    #[must_use]
    pub fn with_reference_frame(mut self, frame: ReferenceFrame) -> Self {
        self.reference_frame = Some(frame);
        self
    }

    /// Attach epoch and interpolation tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TimeTags) -> Self {
        self.tags = tags;
        self
    }

    /// Epoch and interpolation tags.
    pub const fn tags(&self) -> &TimeTags {
        &self.tags
    }

    /// Mutable access to the tags.
    pub fn tags_mut(&mut self) -> &mut TimeTags {
        &mut self.tags
    }

    /// The reference frame, if set.
    pub const fn reference_frame(&self) -> Option<ReferenceFrame> {
        self.reference_frame
    }

    /// The coordinates, if set.
    pub const fn value(&self) -> Option<&PositionValue> {
        self.value.as_ref()
    }
}

/// A list of world-space vertices, as used by polylines and polygons.
///
/// Encoded as `{"cartesian": [x, y, z, x, y, z, ...]}` or one of the
/// cartographic keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Positions {
    kind: PositionKind,
    points: Vec<[f64; 3]>,
}

impl Positions {
    /// Vertex list of the given kind.
    pub fn new(kind: PositionKind, points: Vec<[f64; 3]>) -> Result<Self, ValidationError> {
        for p in &points {
            kind.check_point(*p)?;
        }
        Ok(Self { kind, points })
    }

    /// Cartesian vertex list.
    pub fn cartesian(points: Vec<[f64; 3]>) -> Result<Self, ValidationError> {
        Self::new(PositionKind::Cartesian, points)
    }

    /// Vertex list in degrees.
    pub fn cartographic_degrees(points: Vec<[f64; 3]>) -> Result<Self, ValidationError> {
        Self::new(PositionKind::CartographicDegrees, points)
    }

    /// Vertex list in radians.
    pub fn cartographic_radians(points: Vec<[f64; 3]>) -> Result<Self, ValidationError> {
        Self::new(PositionKind::CartographicRadians, points)
    }

    /// Decode a flat coordinate array whose length is a multiple of three.
    pub fn from_flat(kind: PositionKind, values: &[f64]) -> Result<Self, ValidationError> {
        if values.len() % 3 != 0 {
            return Err(ValidationError::BadLength {
                field: kind.key(),
                len: values.len(),
                expected: "a multiple of 3".to_owned(),
            });
        }
        let points = values
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect();
        Self::new(kind, points)
    }

    /// Encode to the flat layout.
    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flatten().copied().collect()
    }

    /// Coordinate system of the vertices.
    pub const fn kind(&self) -> PositionKind {
        self.kind
    }

    /// The vertices.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_ranges() {
        assert!(Position::cartographic_degrees(-75.0, 40.0, 0.0).is_ok());
        assert!(Position::cartographic_degrees(180.0, -90.0, 1e6).is_ok());
        let err = Position::cartographic_degrees(-75.0, 91.0, 0.0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "latitude", .. }));
        assert!(Position::cartographic_degrees(181.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_radian_ranges_apply_to_every_sample() {
        let ok = Sampled::from_flat(&[0.0, 1.0, 0.5, 0.0, 60.0, -1.0, -0.5, 10.0]).unwrap();
        assert!(Position::new(PositionValue::CartographicRadians(ok)).is_ok());

        let bad = Sampled::from_flat(&[0.0, 1.0, 0.5, 0.0, 60.0, 4.0, -0.5, 10.0]).unwrap();
        let err = Position::new(PositionValue::CartographicRadians(bad)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "longitude", .. }));
    }

    #[test]
    fn test_cartesian_has_no_range() {
        let p = Position::cartesian(6_378_137.0, -1.0e7, 0.0)
            .unwrap()
            .with_reference_frame(ReferenceFrame::Inertial);
        assert_eq!(p.reference_frame(), Some(ReferenceFrame::Inertial));
        assert_eq!(p.value().map(PositionValue::key), Some("cartesian"));
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut p = Position::cartographic_degrees(10.0, 10.0, 0.0).unwrap();
        let before = p.clone();
        let bad = Sampled::constant([200.0, 0.0, 0.0]).unwrap();
        assert!(p.set_value(PositionValue::CartographicDegrees(bad)).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn test_positions_flat() {
        let flat = [-75.0, 40.0, 0.0, -80.0, 35.0, 0.0];
        let list = Positions::from_flat(PositionKind::CartographicDegrees, &flat).unwrap();
        assert_eq!(list.points().len(), 2);
        assert_eq!(list.to_flat(), flat.to_vec());
        assert!(Positions::from_flat(PositionKind::Cartesian, &[1.0, 2.0]).is_err());
        assert!(Positions::cartographic_degrees(vec![[0.0, 95.0, 0.0]]).is_err());
    }
}
