//! The week-schedule value object: intervals, days, and the seven-day map.
//!
//! The schedule is plain serializable data with no validation of its own.
//! Storage tolerates malformed intervals (reversed or blank bounds); the
//! [`validate`](crate::validate) module decides what is acceptable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// One scheduled period within a day.
///
/// Bounds are optional: `None` models a time field the user has blanked out.
/// An interval is *well-formed* when both bounds are present and
/// `start <= end`; anything else sits in storage untouched but never counts
/// as an overlap neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default)]
    pub start: Option<TimeOfDay>,
    #[serde(default)]
    pub end: Option<TimeOfDay>,
}

impl Interval {
    /// An interval with both bounds present.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Interval {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The interval appended by the "add" control: 00:00–23:59.
    pub fn full_day() -> Self {
        Interval::new(TimeOfDay::MIDNIGHT, TimeOfDay::LAST_MINUTE)
    }

    /// Both bounds present and `start <= end`.
    pub fn is_well_formed(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s <= e)
    }
}

/// The seven fixed day names, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days in schedule order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// The capitalized English day name used as the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown day name: '{s}'"))
    }
}

/// The full editing-session value: one ordered interval list per day.
///
/// Created empty; mutated only through [`apply`](crate::editor::apply).
/// Serializes with capitalized day-name keys, Sunday first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(rename = "Sunday", default)]
    pub sunday: Vec<Interval>,
    #[serde(rename = "Monday", default)]
    pub monday: Vec<Interval>,
    #[serde(rename = "Tuesday", default)]
    pub tuesday: Vec<Interval>,
    #[serde(rename = "Wednesday", default)]
    pub wednesday: Vec<Interval>,
    #[serde(rename = "Thursday", default)]
    pub thursday: Vec<Interval>,
    #[serde(rename = "Friday", default)]
    pub friday: Vec<Interval>,
    #[serde(rename = "Saturday", default)]
    pub saturday: Vec<Interval>,
}

impl WeekSchedule {
    /// An empty week (every day maps to an empty sequence).
    pub fn new() -> Self {
        Self::default()
    }

    /// The interval list for one day.
    pub fn day(&self, day: Weekday) -> &[Interval] {
        match day {
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
        }
    }

    /// Mutable access to one day's interval list.
    pub fn day_mut(&mut self, day: Weekday) -> &mut Vec<Interval> {
        match day {
            Weekday::Sunday => &mut self.sunday,
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
        }
    }

    /// Iterate all days in schedule order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[Interval])> {
        Weekday::ALL.into_iter().map(move |d| (d, self.day(d)))
    }
}
