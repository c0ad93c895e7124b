//! Minute-of-day codec: `"HH:MM"` strings ⇄ minutes since midnight.
//!
//! The schedule model stores every bound as a plain minute offset in
//! `[0, 1439]`. The string form exists only at the edges: form fields and the
//! canonical submission payload. Conversion is lossless in both directions.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeParseError;

/// Minutes in one day; valid offsets are strictly below this.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A time of day as minutes since midnight, in `[0, 1439]`.
///
/// Ordering is the plain minute ordering, so interval comparisons work
/// directly on values of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    /// 23:59, the last representable minute.
    pub const LAST_MINUTE: TimeOfDay = TimeOfDay(MINUTES_PER_DAY - 1);

    /// Construct from a raw minute offset. Rejects offsets past 23:59.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeParseError> {
        if minutes >= u32::from(MINUTES_PER_DAY) {
            return Err(TimeParseError::OutOfRange(minutes.into()));
        }
        Ok(TimeOfDay(minutes as u16))
    }

    /// Construct from an hour/minute pair.
    pub fn from_hm(hours: u32, minutes: u32) -> Result<Self, TimeParseError> {
        // Widen before multiplying; "100000000:00" must error, not overflow.
        let total = u64::from(hours) * 60 + u64::from(minutes);
        if total >= u64::from(MINUTES_PER_DAY) {
            return Err(TimeParseError::OutOfRange(total));
        }
        Ok(TimeOfDay(total as u16))
    }

    /// The raw minute offset.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Parse an `"HH:MM"` string.
    ///
    /// Empty input (after trimming) is reported as [`TimeParseError::Empty`]
    /// so callers can distinguish an untouched field from a garbled one.
    /// Both parts must be decimal integers; the combined offset must stay
    /// within the day.
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeParseError::Empty);
        }
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::Malformed(s.to_string()))?;
        let hours: u32 = hours
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
        let minutes: u32 = minutes
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
        Self::from_hm(hours, minutes)
    }

    /// Render as zero-padded `"HH:MM"`.
    pub fn to_hhmm(self) -> String {
        format!("{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

/// Deserializes from either a minute integer (`720`) or an `"HH:MM"` string
/// (`"12:00"`). The working model serializes back as the integer form; the
/// submission payload uses strings.
impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeVisitor;

        impl Visitor<'_> for TimeVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a minute offset in 0..=1439 or an \"HH:MM\" string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TimeOfDay, E> {
                match u32::try_from(v) {
                    Ok(minutes) => TimeOfDay::from_minutes(minutes).map_err(E::custom),
                    Err(_) => Err(E::custom(TimeParseError::OutOfRange(v))),
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TimeOfDay, E> {
                let minutes = u32::try_from(v)
                    .map_err(|_| E::custom(format!("negative minute offset: {v}")))?;
                TimeOfDay::from_minutes(minutes).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TimeOfDay, E> {
                TimeOfDay::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(TimeVisitor)
    }
}

/// Parse a raw form-field value into an optional bound.
///
/// Empty input means "the field is blank" and maps to `None`; anything else
/// must parse as a valid `"HH:MM"` time.
pub fn parse_field(value: &str) -> Result<Option<TimeOfDay>, TimeParseError> {
    match TimeOfDay::parse(value) {
        Ok(t) => Ok(Some(t)),
        Err(TimeParseError::Empty) => Ok(None),
        Err(e) => Err(e),
    }
}
