// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Color values.

use crate::{ensure_finite, ensure_range, TimeTags, ValidationError};

/// Alpha assumed for hex colors written without one (`#RRGGBB`).
pub const DEFAULT_HEX_ALPHA: u8 = 0x3c;

/// RGBA color with 8-bit components, in `[r, g, b, a]` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

impl Rgba {
    /// Build from wide integers, rejecting any component outside `0..=255`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(r: i64, g: i64, b: i64, a: i64) -> Result<Self, ValidationError> {
        let mut out = [0u8; 4];
        for ((slot, value), field) in out.iter_mut().zip([r, g, b, a]).zip(CHANNELS) {
            *slot = u8::try_from(value).map_err(|_| ValidationError::OutOfRange {
                field,
                value: value as f64,
                min: 0.0,
                max: 255.0,
            })?;
        }
        Ok(Self(out))
    }

    /// Parse a web color: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The leading `#` is optional. Forms without alpha get
    /// [`DEFAULT_HEX_ALPHA`]. Short forms double each digit.
    pub fn from_hex(text: &str) -> Result<Self, ValidationError> {
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let invalid = || ValidationError::InvalidHex(text.to_owned());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let nibble = |c: u8| -> u8 {
            // Only reached for ASCII hex digits.
            match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                _ => c - b'A' + 10,
            }
        };
        let b = digits.as_bytes();
        let pair = |i: usize| (nibble(b[i]) << 4) | nibble(b[i + 1]);
        let short = |i: usize| nibble(b[i]) * 0x11;
        let rgba = match b.len() {
            3 => [short(0), short(1), short(2), DEFAULT_HEX_ALPHA],
            4 => [short(0), short(1), short(2), short(3)],
            6 => [pair(0), pair(2), pair(4), DEFAULT_HEX_ALPHA],
            8 => [pair(0), pair(2), pair(4), pair(6)],
            _ => return Err(invalid()),
        };
        Ok(Self(rgba))
    }

    /// The alpha component.
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }
}

/// RGBA color with floating-point components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgbaf([f64; 4]);

impl Rgbaf {
    /// Build from components, rejecting anything outside `0.0..=1.0`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self, ValidationError> {
        let mut out = [0.0; 4];
        for ((slot, value), field) in out.iter_mut().zip([r, g, b, a]).zip(CHANNELS) {
            *slot = ensure_range(field, value, 0.0, 1.0)?;
        }
        Ok(Self(out))
    }

    /// Components in `[r, g, b, a]` order.
    pub const fn components(self) -> [f64; 4] {
        self.0
    }
}

/// The color payload, constant or sampled over time.
///
/// Sample times are seconds relative to the owning [`Color`]'s epoch.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// Constant `rgba`.
    Rgba(Rgba),
    /// Constant `rgbaf`.
    Rgbaf(Rgbaf),
    /// Sampled `rgba`: `[t, r, g, b, a, t, ...]`.
    RgbaSamples(Vec<(f64, Rgba)>),
    /// Sampled `rgbaf`: `[t, r, g, b, a, t, ...]`.
    RgbafSamples(Vec<(f64, Rgbaf)>),
}

/// A CZML color property: `{"rgba": [r, g, b, a]}` and friends.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    tags: TimeTags,
    value: ColorValue,
}

impl Color {
    /// Constant 8-bit color. Fails if any component is outside `0..=255`.
    pub fn rgba(r: i64, g: i64, b: i64, a: i64) -> Result<Self, ValidationError> {
        Ok(Rgba::new(r, g, b, a)?.into())
    }

    /// Constant floating-point color. Fails outside `0.0..=1.0`.
    pub fn rgbaf(r: f64, g: f64, b: f64, a: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            tags: TimeTags::default(),
            value: ColorValue::Rgbaf(Rgbaf::new(r, g, b, a)?),
        })
    }

    /// Constant color from a web hex string; see [`Rgba::from_hex`].
    pub fn from_hex(text: &str) -> Result<Self, ValidationError> {
        Ok(Rgba::from_hex(text)?.into())
    }

    /// Time-sampled 8-bit color.
    pub fn rgba_samples(samples: Vec<(f64, Rgba)>) -> Result<Self, ValidationError> {
        check_sample_times(samples.iter().map(|(t, _)| *t), samples.len())?;
        Ok(Self {
            tags: TimeTags::default(),
            value: ColorValue::RgbaSamples(samples),
        })
    }

    /// Time-sampled floating-point color.
    pub fn rgbaf_samples(samples: Vec<(f64, Rgbaf)>) -> Result<Self, ValidationError> {
        check_sample_times(samples.iter().map(|(t, _)| *t), samples.len())?;
        Ok(Self {
            tags: TimeTags::default(),
            value: ColorValue::RgbafSamples(samples),
        })
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

    /// The color payload.
    pub const fn value(&self) -> &ColorValue {
        &self.value
    }

    /// The constant 8-bit color, if that is what this holds.
    pub const fn as_rgba(&self) -> Option<Rgba> {
        match self.value {
            ColorValue::Rgba(rgba) => Some(rgba),
            _ => None,
        }
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self {
            tags: TimeTags::default(),
            value: ColorValue::Rgba(rgba),
        }
    }
}

fn check_sample_times(
    times: impl Iterator<Item = f64>,
    len: usize,
) -> Result<(), ValidationError> {
    if len == 0 {
        return Err(ValidationError::BadLength {
            field: "color",
            len,
            expected: "at least one sample".to_owned(),
        });
    }
    for t in times {
        ensure_finite("time", t)?;
    }
    Ok(())
}
