//! Detect overlapping intervals within a single day's schedule.
//!
//! Performs pairwise comparison between a candidate interval and every other
//! interval on the same day. Adjacent intervals (where one ends exactly when
//! another starts) do NOT overlap — the test is half-open.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schedule::{Interval, WeekSchedule, Weekday};
use crate::time::TimeOfDay;

/// Why an interval failed validation.
///
/// The original boolean contract collapsed these into a single "invalid"
/// flag; they are kept distinct here so a caller can word its messaging,
/// with [`is_valid`] as the collapsed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Invalidity {
    /// A bound is blank.
    MissingBound,
    /// The interval ends before it starts.
    ReversedBounds,
    /// The interval shares time with the well-formed interval at `other`.
    Overlap { other: usize },
}

impl fmt::Display for Invalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalidity::MissingBound => f.write_str("bound is empty"),
            Invalidity::ReversedBounds => f.write_str("ends before it starts"),
            Invalidity::Overlap { other } => write!(f, "overlaps row {other}"),
        }
    }
}

/// Check a candidate interval's proposed bounds against its day.
///
/// `self_index` is the candidate's position in `day`, so the interval never
/// compares against itself. Neighbors with blank or reversed bounds are
/// skipped — a malformed sibling never blocks a well-formed candidate.
///
/// Two intervals overlap iff `a.start < b.end && b.start < a.end`; touching
/// at a boundary is not overlap. Pure, never panics.
pub fn check_bounds(
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    self_index: usize,
    day: &[Interval],
) -> Result<(), Invalidity> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return Err(Invalidity::MissingBound),
    };
    if start > end {
        return Err(Invalidity::ReversedBounds);
    }
    // A lone interval has nothing to overlap with.
    if day.len() <= 1 {
        return Ok(());
    }
    for (i, other) in day.iter().enumerate() {
        if i == self_index {
            continue;
        }
        // Blank or reversed neighbors never block a candidate.
        let (other_start, other_end) = match (other.start, other.end) {
            (Some(s), Some(e)) if s <= e => (s, e),
            _ => continue,
        };
        if start < other_end && other_start < end {
            return Err(Invalidity::Overlap { other: i });
        }
    }
    Ok(())
}

/// The collapsed boolean form of [`check_bounds`].
pub fn is_valid(
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    self_index: usize,
    day: &[Interval],
) -> bool {
    check_bounds(start, end, self_index, day).is_ok()
}

/// Per-field validity for one interval row.
///
/// A blank bound marks only the blank field; reversed bounds and overlaps
/// mark both fields, matching a form that highlights both inputs of an
/// offending row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowValidity {
    pub start: Option<Invalidity>,
    pub end: Option<Invalidity>,
}

impl RowValidity {
    /// Neither field carries an invalidity.
    pub fn is_valid(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Validate one row of a day schedule into its per-field verdict.
pub fn validate_row(interval: &Interval, self_index: usize, day: &[Interval]) -> RowValidity {
    match check_bounds(interval.start, interval.end, self_index, day) {
        Ok(()) => RowValidity::default(),
        Err(Invalidity::MissingBound) => RowValidity {
            start: interval.start.is_none().then_some(Invalidity::MissingBound),
            end: interval.end.is_none().then_some(Invalidity::MissingBound),
        },
        Err(v) => RowValidity {
            start: Some(v),
            end: Some(v),
        },
    }
}

/// Re-validate a whole day, one verdict per row.
///
/// Every row is checked against the full list, so editing one interval can
/// retroactively invalidate or revalidate its siblings.
pub fn validate_day(day: &[Interval]) -> Vec<RowValidity> {
    day.iter()
        .enumerate()
        .map(|(i, interval)| validate_row(interval, i, day))
        .collect()
}

/// The per-field validity map for a full week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekValidity {
    #[serde(rename = "Sunday")]
    pub sunday: Vec<RowValidity>,
    #[serde(rename = "Monday")]
    pub monday: Vec<RowValidity>,
    #[serde(rename = "Tuesday")]
    pub tuesday: Vec<RowValidity>,
    #[serde(rename = "Wednesday")]
    pub wednesday: Vec<RowValidity>,
    #[serde(rename = "Thursday")]
    pub thursday: Vec<RowValidity>,
    #[serde(rename = "Friday")]
    pub friday: Vec<RowValidity>,
    #[serde(rename = "Saturday")]
    pub saturday: Vec<RowValidity>,
}

impl WeekValidity {
    /// The row verdicts for one day.
    pub fn day(&self, day: Weekday) -> &[RowValidity] {
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

    fn day_mut(&mut self, day: Weekday) -> &mut Vec<RowValidity> {
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

    /// True when no field anywhere in the week carries an invalidity.
    pub fn is_clean(&self) -> bool {
        Weekday::ALL
            .into_iter()
            .all(|d| self.day(d).iter().all(RowValidity::is_valid))
    }
}

/// Validate every day of the week into a full validity map.
pub fn validate_week(week: &WeekSchedule) -> WeekValidity {
    let mut validity = WeekValidity::default();
    for (day, intervals) in week.days() {
        *validity.day_mut(day) = validate_day(intervals);
    }
    validity
}
