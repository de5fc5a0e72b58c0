// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Time tagging shared by sampled properties.

use core::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::{ensure_finite, InterpolationAlgorithm, ValidationError};

/// Types that render as an ISO 8601 date or date-time string.
pub trait Iso8601 {
    /// ISO 8601 rendering of `self`.
    fn to_iso8601(&self) -> String;
}

impl Iso8601 for NaiveDateTime {
    fn to_iso8601(&self) -> String {
        // `%.f` prints nothing when the fraction is zero.
        self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

impl Iso8601 for NaiveDate {
    fn to_iso8601(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl<Tz: TimeZone> Iso8601 for DateTime<Tz>
where
    Tz::Offset: core::fmt::Display,
{
    fn to_iso8601(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl Iso8601 for str {
    fn to_iso8601(&self) -> String {
        self.to_owned()
    }
}

impl Iso8601 for String {
    fn to_iso8601(&self) -> String {
        self.clone()
    }
}

/// A finite number of seconds. Only built through [`FiniteSeconds::new`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FiniteSeconds(f64);

impl FiniteSeconds {
    /// Rejects NaN and infinities.
    pub fn new(seconds: f64) -> Result<Self, ValidationError> {
        ensure_finite("time", seconds).map(Self)
    }

    /// The seconds.
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// A point in time: either an ISO 8601 string or seconds relative to an epoch.
#[derive(Clone, Debug, PartialEq)]
pub enum TimeValue {
    /// ISO 8601 date or date-time.
    Iso8601(String),
    /// Seconds.
    Seconds(FiniteSeconds),
}

impl TimeValue {
    /// Seconds value, rejecting NaN and infinities.
    pub fn seconds(seconds: f64) -> Result<Self, ValidationError> {
        FiniteSeconds::new(seconds).map(Self::Seconds)
    }

    /// Time from any ISO 8601 renderable value.
    pub fn iso<T: Iso8601 + ?Sized>(time: &T) -> Self {
        Self::Iso8601(time.to_iso8601())
    }

    /// Interpret a string: numeric text becomes seconds, anything else is
    /// kept as an ISO 8601 string.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(seconds) if seconds.is_finite() => Self::Seconds(FiniteSeconds(seconds)),
            _ => Self::Iso8601(text.to_owned()),
        }
    }

    /// The seconds value, if this is not a date.
    pub const fn as_seconds(&self) -> Option<f64> {
        match self {
            Self::Seconds(s) => Some(s.get()),
            Self::Iso8601(_) => None,
        }
    }
}

impl From<&str> for TimeValue {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<i32> for TimeValue {
    fn from(seconds: i32) -> Self {
        Self::Seconds(FiniteSeconds(f64::from(seconds)))
    }
}

impl From<NaiveDateTime> for TimeValue {
    fn from(time: NaiveDateTime) -> Self {
        Self::iso(&time)
    }
}

impl From<NaiveDate> for TimeValue {
    fn from(date: NaiveDate) -> Self {
        Self::iso(&date)
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(time: DateTime<Utc>) -> Self {
        Self::iso(&time)
    }
}

/// Epoch and interpolation metadata merged into a sampled property's object.
///
/// Encoded as the `epoch`, `nextTime`, `previousTime`,
/// `interpolationAlgorithm` and `interpolationDegree` keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeTags {
    /// Reference time for sample offsets, ISO 8601.
    pub epoch: Option<String>,
    /// Time of the next sample, for streaming clients.
    pub next_time: Option<TimeValue>,
    /// Time of the previous sample, for streaming clients.
    pub previous_time: Option<TimeValue>,
    /// Interpolation algorithm between samples.
    pub interpolation_algorithm: Option<InterpolationAlgorithm>,
    /// Interpolation polynomial degree.
    pub interpolation_degree: Option<NonZeroU32>,
}

impl TimeTags {
    /// Tags carrying only an epoch.
    pub fn at<T: Iso8601 + ?Sized>(epoch: &T) -> Self {
        Self {
            epoch: Some(epoch.to_iso8601()),
            ..Self::default()
        }
    }

    /// Replace the epoch.
    pub fn set_epoch<T: Iso8601 + ?Sized>(&mut self, epoch: &T) {
        self.epoch = Some(epoch.to_iso8601());
    }

    /// True when no tag is set.
    pub const fn is_empty(&self) -> bool {
        self.epoch.is_none()
            && self.next_time.is_none()
            && self.previous_time.is_none()
            && self.interpolation_algorithm.is_none()
            && self.interpolation_degree.is_none()
    }
}
