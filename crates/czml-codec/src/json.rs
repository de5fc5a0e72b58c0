// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The `CzmlJson` trait and the object reading/writing helpers behind it.

use czml_types::{Extensions, TimeTags, TimeValue, ValidationError};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{CodecError, CodecOptions, UnknownFields};

/// JSON mapping for a CZML model type.
///
/// `data()` renders the exact CZML wire shape with unset fields omitted.
/// `load` and `loads` build a validated value back from it.
pub trait CzmlJson: Sized {
    /// Render as a CZML JSON value.
    fn data(&self) -> Value;

    /// Decode from a JSON value at the location described by `cx`.
    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError>;

    /// Decode from a JSON value with default (strict) options.
    fn load(value: &Value) -> Result<Self, CodecError> {
        Self::load_with(value, &CodecOptions::default())
    }

    /// Decode from a JSON value.
    fn load_with(value: &Value, options: &CodecOptions) -> Result<Self, CodecError> {
        Self::decode(value, &Context::root(options))
    }

    /// Decode from JSON text with default (strict) options.
    fn loads(text: &str) -> Result<Self, CodecError> {
        Self::loads_with(text, &CodecOptions::default())
    }

    /// Decode from JSON text.
    fn loads_with(text: &str, options: &CodecOptions) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_str(text)?;
        Self::load_with(&value, options)
    }

    /// Render as compact JSON text.
    fn dumps(&self) -> String {
        self.data().to_string()
    }
}

/// Decoding state: the options in force and the path being decoded.
#[derive(Clone, Debug)]
pub struct Context<'a> {
    options: &'a CodecOptions,
    path: String,
}

impl<'a> Context<'a> {
    /// Context for the root value, `$`.
    pub fn root(options: &'a CodecOptions) -> Self {
        Self {
            options,
            path: "$".to_owned(),
        }
    }

    /// Context for `key` inside the current object.
    pub fn field(&self, key: &str) -> Self {
        Self {
            options: self.options,
            path: format!("{}.{key}", self.path),
        }
    }

    /// Context for element `index` of the current array.
    pub fn index(&self, index: usize) -> Self {
        Self {
            options: self.options,
            path: format!("{}[{index}]", self.path),
        }
    }

    /// The current path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The options in force.
    pub const fn options(&self) -> &'a CodecOptions {
        self.options
    }

    /// Error for a value of the wrong JSON type at this path.
    pub fn wrong_type(&self, expected: &'static str) -> CodecError {
        CodecError::WrongType {
            path: self.path.clone(),
            expected,
        }
    }

    /// Error for a missing key in the object at this path.
    pub fn missing(&self, expected: &'static str) -> CodecError {
        CodecError::MissingField {
            path: self.path.clone(),
            expected,
        }
    }

    /// Error for a constraint violated at this path.
    pub fn invalid(&self, source: ValidationError) -> CodecError {
        CodecError::Validation {
            path: self.path.clone(),
            source,
        }
    }

    pub(crate) fn f64(&self, value: &Value) -> Result<f64, CodecError> {
        value.as_f64().ok_or_else(|| self.wrong_type("a number"))
    }

    pub(crate) fn f64_array(&self, value: &Value) -> Result<Vec<f64>, CodecError> {
        let items = value
            .as_array()
            .ok_or_else(|| self.wrong_type("an array of numbers"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.index(i).f64(item))
            .collect()
    }

    pub(crate) fn str<'v>(&self, value: &'v Value) -> Result<&'v str, CodecError> {
        value.as_str().ok_or_else(|| self.wrong_type("a string"))
    }

    pub(crate) fn object<'v>(&self, value: &'v Value) -> Result<Fields<'v, 'a>, CodecError> {
        let map = value
            .as_object()
            .ok_or_else(|| self.wrong_type("an object"))?;
        Ok(Fields {
            map,
            cx: self.clone(),
            seen: Vec::with_capacity(map.len()),
        })
    }
}

/// Reader over a JSON object that records which keys were consumed, so
/// the rest can be handled by the unknown-field policy.
pub(crate) struct Fields<'v, 'a> {
    map: &'v Map<String, Value>,
    cx: Context<'a>,
    seen: Vec<&'static str>,
}

impl<'v, 'a> Fields<'v, 'a> {
    pub(crate) const fn cx(&self) -> &Context<'a> {
        &self.cx
    }

    /// The value under `key`, marking it consumed. `null` reads as absent.
    pub(crate) fn raw(&mut self, key: &'static str) -> Option<&'v Value> {
        self.seen.push(key);
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn with<T>(
        &mut self,
        key: &'static str,
        decode: impl FnOnce(&'v Value, &Context<'a>) -> Result<T, CodecError>,
    ) -> Result<Option<T>, CodecError> {
        match self.raw(key) {
            Some(value) => decode(value, &self.cx.field(key)).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn take<T: CzmlJson>(&mut self, key: &'static str) -> Result<Option<T>, CodecError> {
        self.with(key, |value, cx| T::decode(value, cx))
    }

    /// Read the `epoch`/`nextTime`/`previousTime`/interpolation keys.
    pub(crate) fn tags(&mut self) -> Result<TimeTags, CodecError> {
        Ok(TimeTags {
            epoch: self.with("epoch", |v, cx| cx.str(v).map(str::to_owned))?,
            next_time: self.with("nextTime", decode_time)?,
            previous_time: self.with("previousTime", decode_time)?,
            interpolation_algorithm: self.take("interpolationAlgorithm")?,
            interpolation_degree: self.with("interpolationDegree", |v, cx| {
                v.as_u64()
                    .and_then(|d| u32::try_from(d).ok())
                    .and_then(core::num::NonZeroU32::new)
                    .ok_or_else(|| cx.wrong_type("a positive integer"))
            })?,
        })
    }

    /// Apply the unknown-field policy to a property object. Nothing is kept.
    pub(crate) fn finish(self) -> Result<(), CodecError> {
        for (key, _) in self.leftovers() {
            match self.cx.options().unknown_fields {
                UnknownFields::Reject => return Err(self.unknown(key)),
                UnknownFields::Ignore => {
                    debug!(path = self.cx.path(), field = %key, "ignoring unknown CZML field");
                }
                UnknownFields::Preserve => {
                    warn!(path = self.cx.path(), field = %key, "dropping unknown nested CZML field");
                }
            }
        }
        Ok(())
    }

    /// Apply the unknown-field policy to a packet, returning the keys to keep.
    pub(crate) fn finish_packet(self) -> Result<Extensions, CodecError> {
        let mut kept = Extensions::new();
        for (key, value) in self.leftovers() {
            match self.cx.options().unknown_fields {
                UnknownFields::Reject => return Err(self.unknown(key)),
                UnknownFields::Ignore => {
                    debug!(path = self.cx.path(), field = %key, "ignoring unknown CZML field");
                }
                UnknownFields::Preserve => {
                    kept.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(kept)
    }

    fn leftovers(&self) -> impl Iterator<Item = (&'v String, &'v Value)> + '_ {
        self.map
            .iter()
            .filter(|(key, _)| !self.seen.iter().any(|seen| *seen == key.as_str()))
    }

    fn unknown(&self, key: &str) -> CodecError {
        CodecError::UnknownField {
            path: self.cx.path().to_owned(),
            field: key.to_owned(),
        }
    }
}

fn decode_time(value: &Value, cx: &Context<'_>) -> Result<TimeValue, CodecError> {
    match value {
        Value::String(text) => Ok(TimeValue::parse(text)),
        Value::Number(_) => TimeValue::seconds(cx.f64(value)?).map_err(|e| cx.invalid(e)),
        _ => Err(cx.wrong_type("an ISO 8601 string or a number of seconds")),
    }
}

/// Object under construction, in key insertion order.
#[derive(Default)]
pub(crate) struct Object(Map<String, Value>);

impl Object {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn put<T: CzmlJson>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.0.insert(key.to_owned(), value.data());
        }
    }

    pub(crate) fn put_value(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_owned(), value);
    }

    pub(crate) fn put_tags(&mut self, tags: &TimeTags) {
        if let Some(epoch) = &tags.epoch {
            self.put_value("epoch", Value::String(epoch.clone()));
        }
        self.put("nextTime", tags.next_time.as_ref());
        self.put("previousTime", tags.previous_time.as_ref());
        self.put("interpolationAlgorithm", tags.interpolation_algorithm.as_ref());
        if let Some(degree) = tags.interpolation_degree {
            self.put_value("interpolationDegree", Value::from(degree.get()));
        }
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Integral values are written as JSON integers (`[0, 255, 127, 55]`),
/// everything else as floats.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn number(value: f64) -> Value {
    const EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.fract() == 0.0 && value.abs() < EXACT {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

pub(crate) fn numbers(values: impl IntoIterator<Item = f64>) -> Value {
    Value::Array(values.into_iter().map(number).collect())
}

impl CzmlJson for TimeValue {
    fn data(&self) -> Value {
        match self {
            Self::Iso8601(text) => Value::String(text.clone()),
            Self::Seconds(seconds) => number(seconds.get()),
        }
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        decode_time(value, cx)
    }
}

impl CzmlJson for bool {
    fn data(&self) -> Value {
        Value::Bool(*self)
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        value.as_bool().ok_or_else(|| cx.wrong_type("a boolean"))
    }
}

impl CzmlJson for String {
    fn data(&self) -> Value {
        Value::String(self.clone())
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        cx.str(value).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_numbers_are_integers() {
        assert_eq!(number(255.0), json!(255));
        assert_eq!(number(-3.0), json!(-3));
        assert_eq!(number(0.7), json!(0.7));
        assert_eq!(number(1e300), json!(1e300));
    }

    #[test]
    fn test_paths() {
        let options = CodecOptions::default();
        let cx = Context::root(&options).index(1).field("billboard");
        assert_eq!(cx.path(), "$[1].billboard");
    }

    #[test]
    fn test_tags_roundtrip() {
        let value = json!({
            "nextTime": 2,
            "previousTime": 1,
            "epoch": "2013-02-18T00:00:00",
        });
        let options = CodecOptions::default();
        let cx = Context::root(&options);
        let mut fields = cx.object(&value).unwrap();
        let tags = fields.tags().unwrap();
        fields.finish().unwrap();
        assert_eq!(tags.next_time.as_ref().and_then(TimeValue::as_seconds), Some(2.0));
        assert_eq!(tags.previous_time.as_ref().and_then(TimeValue::as_seconds), Some(1.0));

        let mut out = Object::new();
        out.put_tags(&tags);
        assert_eq!(out.into_value(), value);
    }

    #[test]
    fn test_numeric_string_time_becomes_seconds() {
        let options = CodecOptions::default();
        let cx = Context::root(&options);
        assert_eq!(
            TimeValue::decode(&json!("2"), &cx).unwrap().as_seconds(),
            Some(2.0)
        );
        assert!(TimeValue::decode(&json!(true), &cx).is_err());
    }

    #[test]
    fn test_unknown_nested_key_policy() {
        let value = json!({"epoch": "2013-02-18", "future": 1});
        for (policy, ok) in [
            (UnknownFields::Reject, false),
            (UnknownFields::Ignore, true),
            (UnknownFields::Preserve, true),
        ] {
            let options = CodecOptions {
                unknown_fields: policy,
                pretty: false,
            };
            let cx = Context::root(&options);
            let mut fields = cx.object(&value).unwrap();
            fields.tags().unwrap();
            assert_eq!(fields.finish().is_ok(), ok, "{policy:?}");
        }
    }
}
