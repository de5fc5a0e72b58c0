// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Constant-or-sampled numeric values.
//!
//! CZML writes a constant N-tuple as `[v0, .., vN-1]` and a time series as a
//! flat array of `[t, v0, .., vN-1, t, ...]` records. [`Sampled`] holds
//! either form with every number checked finite.

use crate::{ensure_finite, TimeTags, ValidationError};

#[derive(Clone, Debug, PartialEq)]
enum Repr<const N: usize> {
    Constant([f64; N]),
    Samples(Vec<(f64, [f64; N])>),
}

/// An N-tuple that is either constant or sampled over time.
#[derive(Clone, Debug, PartialEq)]
pub struct Sampled<const N: usize> {
    repr: Repr<N>,
}

impl<const N: usize> Sampled<N> {
    /// Constant tuple.
    pub fn constant(values: [f64; N]) -> Result<Self, ValidationError> {
        for v in values {
            ensure_finite("value", v)?;
        }
        Ok(Self {
            repr: Repr::Constant(values),
        })
    }

    /// Time series of `(seconds since epoch, tuple)` records.
    pub fn samples(samples: Vec<(f64, [f64; N])>) -> Result<Self, ValidationError> {
        if samples.is_empty() {
            return Err(ValidationError::BadLength {
                field: "samples",
                len: 0,
                expected: "at least one sample".to_owned(),
            });
        }
        for (t, values) in &samples {
            ensure_finite("time", *t)?;
            for v in values {
                ensure_finite("value", *v)?;
            }
        }
        Ok(Self {
            repr: Repr::Samples(samples),
        })
    }

    /// Decode the flat CZML layout: `N` values for a constant, or a
    /// non-empty multiple of `N + 1` values for samples.
    pub fn from_flat(values: &[f64]) -> Result<Self, ValidationError> {
        if values.len() == N {
            let mut out = [0.0; N];
            out.copy_from_slice(values);
            return Self::constant(out);
        }
        let stride = N + 1;
        if values.is_empty() || values.len() % stride != 0 {
            return Err(ValidationError::BadLength {
                field: "values",
                len: values.len(),
                expected: format!("{N} or a multiple of {stride}"),
            });
        }
        let samples = values
            .chunks_exact(stride)
            .map(|record| {
                let mut tuple = [0.0; N];
                tuple.copy_from_slice(&record[1..]);
                (record[0], tuple)
            })
            .collect();
        Self::samples(samples)
    }

    /// Encode back to the flat CZML layout.
    pub fn to_flat(&self) -> Vec<f64> {
        match &self.repr {
            Repr::Constant(values) => values.to_vec(),
            Repr::Samples(samples) => {
                let mut out = Vec::with_capacity(samples.len() * (N + 1));
                for (t, values) in samples {
                    out.push(*t);
                    out.extend_from_slice(values);
                }
                out
            }
        }
    }

    /// The constant tuple, if not sampled.
    pub const fn as_constant(&self) -> Option<&[f64; N]> {
        match &self.repr {
            Repr::Constant(values) => Some(values),
            Repr::Samples(_) => None,
        }
    }

    /// The samples, if not constant.
    pub fn as_samples(&self) -> Option<&[(f64, [f64; N])]> {
        match &self.repr {
            Repr::Constant(_) => None,
            Repr::Samples(samples) => Some(samples),
        }
    }

    /// True for a time series.
    pub const fn is_sampled(&self) -> bool {
        matches!(self.repr, Repr::Samples(_))
    }

    /// Every tuple, constant or sampled, without its time.
    pub fn tuples(&self) -> impl Iterator<Item = &[f64; N]> + '_ {
        let (constant, samples) = match &self.repr {
            Repr::Constant(values) => (Some(values), None),
            Repr::Samples(samples) => (None, Some(samples.iter().map(|(_, v)| v))),
        };
        constant.into_iter().chain(samples.into_iter().flatten())
    }
}

/// A CZML number: a bare JSON number, or `{"number": ...}` with time tags.
#[derive(Clone, Debug, PartialEq)]
pub struct Number {
    tags: TimeTags,
    value: Sampled<1>,
}

impl Number {
    /// Constant number.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            tags: TimeTags::default(),
            value: Sampled::constant([value])?,
        })
    }

    /// Number sampled over time as `(seconds since epoch, value)` pairs.
    pub fn samples(samples: Vec<(f64, f64)>) -> Result<Self, ValidationError> {
        Ok(Self {
            tags: TimeTags::default(),
            value: Sampled::samples(samples.into_iter().map(|(t, v)| (t, [v])).collect())?,
        })
    }

    /// Wrap an already validated sampled value.
    pub fn from_sampled(value: Sampled<1>) -> Self {
        Self {
            tags: TimeTags::default(),
            value,
        }
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

    /// The underlying sampled value.
    pub const fn sampled(&self) -> &Sampled<1> {
        &self.value
    }

    /// The constant value, if not sampled.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_constant().map(|[v]| *v)
    }

    /// True when this encodes as a bare JSON number.
    pub fn is_plain(&self) -> bool {
        self.tags.is_empty() && !self.value.is_sampled()
    }
}

impl TryFrom<f64> for Number {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Two-component cartesian value, encoded as `{"cartesian2": [x, y]}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector2 {
    /// Epoch and interpolation tags.
    pub tags: TimeTags,
    /// The `[x, y]` tuple or its samples.
    pub value: Sampled<2>,
}

/// Three-component cartesian value, encoded as `{"cartesian": [x, y, z]}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector3 {
    /// Epoch and interpolation tags.
    pub tags: TimeTags,
    /// The `[x, y, z]` tuple or its samples.
    pub value: Sampled<3>,
}

/// Orientation as a unit quaternion, encoded as
/// `{"unitQuaternion": [x, y, z, w]}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    /// Epoch and interpolation tags.
    pub tags: TimeTags,
    /// The `[x, y, z, w]` quaternion or its samples.
    pub unit_quaternion: Sampled<4>,
}

impl Vector2 {
    /// Untagged constant vector.
    pub fn new(x: f64, y: f64) -> Result<Self, ValidationError> {
        Ok(Sampled::constant([x, y])?.into())
    }
}

impl Vector3 {
    /// Untagged constant vector.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, ValidationError> {
        Ok(Sampled::constant([x, y, z])?.into())
    }
}

impl Orientation {
    /// Untagged constant quaternion.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Result<Self, ValidationError> {
        Ok(Sampled::constant([x, y, z, w])?.into())
    }
}

impl From<Sampled<2>> for Vector2 {
    fn from(value: Sampled<2>) -> Self {
        Self {
            tags: TimeTags::default(),
            value,
        }
    }
}

impl From<Sampled<3>> for Vector3 {
    fn from(value: Sampled<3>) -> Self {
        Self {
            tags: TimeTags::default(),
            value,
        }
    }
}

impl From<Sampled<4>> for Orientation {
    fn from(unit_quaternion: Sampled<4>) -> Self {
        Self {
            tags: TimeTags::default(),
            unit_quaternion,
        }
    }
}

/// Pyramid face directions, encoded as `{"unitSpherical": [clock, cone, ...]}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directions {
    unit_spherical: Vec<[f64; 2]>,
}

impl Directions {
    /// Directions from `[clock, cone]` angle pairs in radians.
    pub fn unit_spherical(pairs: Vec<[f64; 2]>) -> Result<Self, ValidationError> {
        for [clock, cone] in &pairs {
            ensure_finite("clock", *clock)?;
            ensure_finite("cone", *cone)?;
        }
        Ok(Self {
            unit_spherical: pairs,
        })
    }

    /// Decode the flat `[clock, cone, clock, cone, ...]` layout.
    pub fn from_flat(values: &[f64]) -> Result<Self, ValidationError> {
        if values.len() % 2 != 0 {
            return Err(ValidationError::BadLength {
                field: "unitSpherical",
                len: values.len(),
                expected: "an even count".to_owned(),
            });
        }
        Self::unit_spherical(values.chunks_exact(2).map(|p| [p[0], p[1]]).collect())
    }

    /// Encode to the flat layout.
    pub fn to_flat(&self) -> Vec<f64> {
        self.unit_spherical.iter().flatten().copied().collect()
    }

    /// The `[clock, cone]` pairs.
    pub fn as_slice(&self) -> &[[f64; 2]] {
        &self.unit_spherical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_constant() {
        let v = Sampled::<3>::from_flat(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.as_constant(), Some(&[1.0, 2.0, 3.0]));
        assert!(!v.is_sampled());
        assert_eq!(v.to_flat(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_flat_samples() {
        let flat = [0.0, 1.0, 2.0, 3.0, 60.0, 4.0, 5.0, 6.0];
        let v = Sampled::<3>::from_flat(&flat).unwrap();
        assert_eq!(
            v.as_samples().unwrap(),
            &[(0.0, [1.0, 2.0, 3.0]), (60.0, [4.0, 5.0, 6.0])]
        );
        assert_eq!(v.tuples().count(), 2);
        assert_eq!(v.to_flat(), flat.to_vec());
    }

    #[test]
    fn test_flat_bad_lengths() {
        assert!(matches!(
            Sampled::<3>::from_flat(&[1.0, 2.0]),
            Err(ValidationError::BadLength { len: 2, .. })
        ));
        assert!(Sampled::<3>::from_flat(&[]).is_err());
        assert!(Sampled::<3>::from_flat(&[0.0; 5]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Sampled::constant([0.0, f64::NAN]).is_err());
        assert!(Sampled::samples(vec![(f64::INFINITY, [0.0])]).is_err());
        assert!(Number::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_number_plainness() {
        let n = Number::try_from(0.7).unwrap();
        assert!(n.is_plain());
        assert_eq!(n.as_f64(), Some(0.7));

        let tagged = n.with_tags(TimeTags::at("2013-02-18T00:00:00"));
        assert!(!tagged.is_plain());

        let series = Number::samples(vec![(0.0, 1.0), (5.0, 2.0)]).unwrap();
        assert!(!series.is_plain());
        assert_eq!(series.as_f64(), None);
        assert_eq!(series.sampled().to_flat(), vec![0.0, 1.0, 5.0, 2.0]);
    }

    #[test]
    fn test_directions_flat() {
        let d = Directions::from_flat(&[0.0, 0.5, 1.5, 0.5]).unwrap();
        assert_eq!(d.as_slice(), &[[0.0, 0.5], [1.5, 0.5]]);
        assert_eq!(d.to_flat(), vec![0.0, 0.5, 1.5, 0.5]);
        assert!(Directions::from_flat(&[0.0, 0.5, 1.0]).is_err());
    }
}
