// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON mapping for the shared value types.

use core::iter::once;

use czml_types::{
    Availability, Color, ColorValue, Directions, HorizontalOrigin, InterpolationAlgorithm,
    LabelStyle, Number, Orientation, Position, PositionKind, PositionValue, Positions,
    ReferenceFrame, Rgba, Rgbaf, Sampled, StripeOrientation, TimeTags, ValidationError, Vector2,
    Vector3, VerticalOrigin,
};
use serde_json::Value;

use crate::json::{number, numbers, Context, CzmlJson, Object};
use crate::CodecError;

macro_rules! literal_json {
    ($($name:ty),+ $(,)?) => {
        $(
            impl CzmlJson for $name {
                fn data(&self) -> Value {
                    Value::String(self.as_str().to_owned())
                }

                fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
                    cx.str(value)?.parse().map_err(|e| cx.invalid(e))
                }
            }
        )+
    };
}

literal_json!(
    HorizontalOrigin,
    VerticalOrigin,
    LabelStyle,
    ReferenceFrame,
    InterpolationAlgorithm,
    StripeOrientation,
);

/// Decode a flat numeric array into a constant or sampled tuple.
pub(crate) fn sampled<const N: usize>(
    value: &Value,
    cx: &Context<'_>,
) -> Result<Sampled<N>, CodecError> {
    Sampled::from_flat(&cx.f64_array(value)?).map_err(|e| cx.invalid(e))
}

/// At most one of several mutually exclusive keys may be present.
pub(crate) fn one_of<T>(
    cx: &Context<'_>,
    candidates: impl IntoIterator<Item = Option<T>>,
    key: impl Fn(&T) -> &'static str,
) -> Result<Option<T>, CodecError> {
    let mut present = candidates.into_iter().flatten();
    let first = present.next();
    if let (Some(first), Some(second)) = (&first, present.next()) {
        return Err(cx.invalid(ValidationError::ConflictingFields {
            first: key(first),
            second: key(&second),
        }));
    }
    Ok(first)
}

fn tagged(tags: &TimeTags, key: &str, flat: Vec<f64>) -> Value {
    let mut out = Object::new();
    out.put_tags(tags);
    out.put_value(key, numbers(flat));
    out.into_value()
}

fn decode_tagged<const N: usize>(
    value: &Value,
    cx: &Context<'_>,
    key: &'static str,
) -> Result<(TimeTags, Sampled<N>), CodecError> {
    let mut fields = cx.object(value)?;
    let tags = fields.tags()?;
    let values = fields.with(key, sampled)?;
    let missing = fields.cx().missing(key);
    fields.finish()?;
    Ok((tags, values.ok_or(missing)?))
}

impl CzmlJson for Number {
    fn data(&self) -> Value {
        match self.as_f64() {
            Some(value) if self.is_plain() => number(value),
            constant => {
                let mut out = Object::new();
                out.put_tags(self.tags());
                let value = constant.map_or_else(|| numbers(self.sampled().to_flat()), number);
                out.put_value("number", value);
                out.into_value()
            }
        }
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        match value {
            Value::Number(_) => Self::new(cx.f64(value)?).map_err(|e| cx.invalid(e)),
            Value::Object(_) => {
                let mut fields = cx.object(value)?;
                let tags = fields.tags()?;
                let series = fields.with("number", |v, cx| match v {
                    Value::Number(_) => Sampled::constant([cx.f64(v)?]).map_err(|e| cx.invalid(e)),
                    _ => sampled(v, cx),
                })?;
                let missing = fields.cx().missing("number");
                fields.finish()?;
                Ok(Self::from_sampled(series.ok_or(missing)?).with_tags(tags))
            }
            _ => Err(cx.wrong_type("a number or an object")),
        }
    }
}

fn rgba_flat(rgba: &Rgba) -> impl Iterator<Item = f64> + '_ {
    rgba.0.iter().map(|c| f64::from(*c))
}

#[allow(clippy::cast_possible_truncation)]
fn decode_rgba(components: &[f64], cx: &Context<'_>) -> Result<Rgba, CodecError> {
    let mut ints = [0i64; 4];
    for (slot, c) in ints.iter_mut().zip(components) {
        if c.fract() != 0.0 {
            return Err(cx.wrong_type("integer color components"));
        }
        *slot = *c as i64;
    }
    let [r, g, b, a] = ints;
    Rgba::new(r, g, b, a).map_err(|e| cx.invalid(e))
}

fn decode_rgbaf(c: &[f64], cx: &Context<'_>) -> Result<Rgbaf, CodecError> {
    Rgbaf::new(c[0], c[1], c[2], c[3]).map_err(|e| cx.invalid(e))
}

/// `[r, g, b, a]` or `[t, r, g, b, a, ...]` into either color form.
fn decode_color_array<C>(
    value: &Value,
    cx: &Context<'_>,
    component: impl Fn(&[f64], &Context<'_>) -> Result<C, CodecError>,
    constant: impl FnOnce(C) -> Result<Color, ValidationError>,
    series: impl FnOnce(Vec<(f64, C)>) -> Result<Color, ValidationError>,
) -> Result<Color, CodecError> {
    let flat = cx.f64_array(value)?;
    let color = match flat.len() {
        4 => constant(component(&flat, cx)?),
        len if len > 0 && len % 5 == 0 => {
            let samples = flat
                .chunks_exact(5)
                .map(|record| -> Result<_, CodecError> {
                    Ok((record[0], component(&record[1..], cx)?))
                })
                .collect::<Result<Vec<_>, _>>()?;
            series(samples)
        }
        len => Err(ValidationError::BadLength {
            field: "color",
            len,
            expected: "4 or a multiple of 5".to_owned(),
        }),
    };
    color.map_err(|e| cx.invalid(e))
}

impl CzmlJson for Color {
    fn data(&self) -> Value {
        let mut out = Object::new();
        out.put_tags(self.tags());
        let (key, flat) = match self.value() {
            ColorValue::Rgba(rgba) => ("rgba", numbers(rgba_flat(rgba))),
            ColorValue::Rgbaf(rgbaf) => ("rgbaf", numbers(rgbaf.components())),
            ColorValue::RgbaSamples(samples) => (
                "rgba",
                numbers(samples.iter().flat_map(|(t, c)| once(*t).chain(rgba_flat(c)))),
            ),
            ColorValue::RgbafSamples(samples) => (
                "rgbaf",
                numbers(
                    samples
                        .iter()
                        .flat_map(|(t, c)| once(*t).chain(c.components())),
                ),
            ),
        };
        out.put_value(key, flat);
        out.into_value()
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let mut fields = cx.object(value)?;
        let tags = fields.tags()?;
        let rgba = fields.with("rgba", |v, cx| {
            decode_color_array(v, cx, decode_rgba, |c: Rgba| Ok(c.into()), Self::rgba_samples)
        })?;
        let rgbaf = fields.with("rgbaf", |v, cx| {
            decode_color_array(
                v,
                cx,
                decode_rgbaf,
                |c: Rgbaf| {
                    let [r, g, b, a] = c.components();
                    Self::rgbaf(r, g, b, a)
                },
                Self::rgbaf_samples,
            )
        })?;
        let cx = fields.cx().clone();
        fields.finish()?;
        let color = one_of(&cx, [rgba.map(|c| ("rgba", c)), rgbaf.map(|c| ("rgbaf", c))], |c| c.0)?;
        let (_, color) = color.ok_or_else(|| cx.missing("rgba or rgbaf"))?;
        Ok(color.with_tags(tags))
    }
}

impl CzmlJson for Vector2 {
    fn data(&self) -> Value {
        tagged(&self.tags, "cartesian2", self.value.to_flat())
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let (tags, value) = decode_tagged(value, cx, "cartesian2")?;
        Ok(Self { tags, value })
    }
}

impl CzmlJson for Vector3 {
    fn data(&self) -> Value {
        tagged(&self.tags, "cartesian", self.value.to_flat())
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let (tags, value) = decode_tagged(value, cx, "cartesian")?;
        Ok(Self { tags, value })
    }
}

impl CzmlJson for Orientation {
    fn data(&self) -> Value {
        tagged(&self.tags, "unitQuaternion", self.unit_quaternion.to_flat())
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let (tags, unit_quaternion) = decode_tagged(value, cx, "unitQuaternion")?;
        Ok(Self {
            tags,
            unit_quaternion,
        })
    }
}

impl CzmlJson for Position {
    fn data(&self) -> Value {
        let mut out = Object::new();
        out.put_tags(self.tags());
        out.put("referenceFrame", self.reference_frame().as_ref());
        if let Some(value) = self.value() {
            let flat = match value {
                PositionValue::Cartesian(v)
                | PositionValue::CartographicDegrees(v)
                | PositionValue::CartographicRadians(v) => v.to_flat(),
                PositionValue::CartesianVelocity(v) => v.to_flat(),
            };
            out.put_value(value.key(), numbers(flat));
        }
        out.into_value()
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let mut fields = cx.object(value)?;
        let tags = fields.tags()?;
        let reference_frame: Option<ReferenceFrame> = fields.take("referenceFrame")?;
        let candidates = [
            fields.with("cartesian", |v, cx| sampled(v, cx).map(PositionValue::Cartesian))?,
            fields.with("cartographicDegrees", |v, cx| {
                sampled(v, cx).map(PositionValue::CartographicDegrees)
            })?,
            fields.with("cartographicRadians", |v, cx| {
                sampled(v, cx).map(PositionValue::CartographicRadians)
            })?,
            fields.with("cartesianVelocity", |v, cx| {
                sampled(v, cx).map(PositionValue::CartesianVelocity)
            })?,
        ];
        let cx = fields.cx().clone();
        fields.finish()?;

        let mut position = Self::default().with_tags(tags);
        if let Some(frame) = reference_frame {
            position = position.with_reference_frame(frame);
        }
        if let Some(value) = one_of(&cx, candidates, PositionValue::key)? {
            let value_cx = cx.field(value.key());
            position.set_value(value).map_err(|e| value_cx.invalid(e))?;
        }
        Ok(position)
    }
}

impl CzmlJson for Positions {
    fn data(&self) -> Value {
        let mut out = Object::new();
        out.put_value(self.kind().key(), numbers(self.to_flat()));
        out.into_value()
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let mut fields = cx.object(value)?;
        let candidates = PositionKind::ALL
            .into_iter()
            .map(|kind| {
                fields.with(kind.key(), |v, cx| {
                    Self::from_flat(kind, &cx.f64_array(v)?).map_err(|e| cx.invalid(e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let cx = fields.cx().clone();
        fields.finish()?;
        one_of(&cx, candidates, |p| p.kind().key())?
            .ok_or_else(|| cx.missing("cartesian, cartographicDegrees or cartographicRadians"))
    }
}

impl CzmlJson for Directions {
    fn data(&self) -> Value {
        let mut out = Object::new();
        out.put_value("unitSpherical", numbers(self.to_flat()));
        out.into_value()
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let mut fields = cx.object(value)?;
        let directions = fields.with("unitSpherical", |v, cx| {
            Self::from_flat(&cx.f64_array(v)?).map_err(|e| cx.invalid(e))
        })?;
        let missing = fields.cx().missing("unitSpherical");
        fields.finish()?;
        directions.ok_or(missing)
    }
}

impl CzmlJson for Availability {
    fn data(&self) -> Value {
        match self.as_slice() {
            [single] if self.is_single() => Value::String(single.clone()),
            intervals => Value::Array(intervals.iter().cloned().map(Value::String).collect()),
        }
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let availability = match value {
            Value::String(interval) => Self::interval(interval.as_str()),
            Value::Array(items) => {
                let intervals = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| cx.index(i).str(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::intervals(intervals)
            }
            _ => return Err(cx.wrong_type("an interval string or an array of them")),
        };
        availability.map_err(|e| cx.invalid(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_color_rgba_shape() {
        let color = Color::rgba(0, 255, 127, 55).unwrap();
        assert_eq!(color.data(), json!({"rgba": [0, 255, 127, 55]}));
        assert_eq!(Color::load(&color.data()).unwrap(), color);
    }

    #[test]
    fn test_color_alpha_out_of_range() {
        let err = Color::load(&json!({"rgba": [0, 0, 0, 256]})).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.path(), Some("$.rgba"));
        assert!(Color::load(&json!({"rgba": [0, 0, 0, 255]})).is_ok());
    }

    #[test]
    fn test_color_requires_integer_rgba() {
        let err = Color::load(&json!({"rgba": [0.5, 0, 0, 255]})).unwrap_err();
        assert!(matches!(err, CodecError::WrongType { .. }));
    }

    #[test]
    fn test_color_conflicting_forms() {
        let err = Color::load(&json!({"rgba": [0, 0, 0, 255], "rgbaf": [0, 0, 0, 1]})).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Validation {
                source: ValidationError::ConflictingFields {
                    first: "rgba",
                    second: "rgbaf",
                },
                ..
            }
        ));
        assert!(matches!(
            Color::load(&json!({})).unwrap_err(),
            CodecError::MissingField { .. }
        ));
    }

    #[test]
    fn test_sampled_color() {
        let value = json!({
            "epoch": "2012-08-04T16:00:00Z",
            "rgba": [0, 255, 0, 0, 255, 60, 0, 0, 255, 255],
        });
        let color = Color::load(&value).unwrap();
        assert!(matches!(color.value(), ColorValue::RgbaSamples(s) if s.len() == 2));
        assert_eq!(color.data(), value);
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(Number::load(&json!(0.7)).unwrap().data(), json!(0.7));

        let tagged = json!({"epoch": "2012-08-04T16:00:00Z", "number": [0, 1.5, 120, 3]});
        let n = Number::load(&tagged).unwrap();
        assert_eq!(n.sampled().to_flat(), vec![0.0, 1.5, 120.0, 3.0]);
        assert_eq!(n.data(), tagged);

        let constant = json!({"epoch": "2012-08-04T16:00:00Z", "number": 2});
        assert_eq!(Number::load(&constant).unwrap().data(), constant);

        assert!(Number::load(&json!("1")).is_err());
        assert!(matches!(
            Number::load(&json!({"epoch": "2012"})).unwrap_err(),
            CodecError::MissingField { .. }
        ));
    }

    #[test]
    fn test_position_conflicts_and_ranges() {
        let both = json!({"cartesian": [1, 2, 3], "cartographicDegrees": [0, 0, 0]});
        assert!(Position::load(&both).is_err());

        let err = Position::load(&json!({"cartographicDegrees": [0, 100, 0]})).unwrap_err();
        assert_eq!(err.path(), Some("$.cartographicDegrees"));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_position_frame_only_is_sparse() {
        let value = json!({"referenceFrame": "INERTIAL"});
        let position = Position::load(&value).unwrap();
        assert!(position.value().is_none());
        assert_eq!(position.data(), value);
    }

    #[test]
    fn test_availability_shapes() {
        let single = json!("2012-08-04T16:00:00Z/2012-08-04T17:04:54Z");
        assert_eq!(Availability::load(&single).unwrap().data(), single);

        let many = json!(["a/b", "c/d"]);
        assert_eq!(Availability::load(&many).unwrap().data(), many);

        assert!(Availability::load(&json!(["a/b", 3])).is_err());
        assert!(Availability::load(&json!("open")).is_err());
    }

    #[test]
    fn test_literal_spelling() {
        assert_eq!(LabelStyle::FillAndOutline.data(), json!("FILL_AND_OUTLINE"));
        assert!(HorizontalOrigin::load(&json!("left")).is_err());
    }
}
