//! The edit session: an update function over the week-schedule value.
//!
//! Every mutation goes through [`apply`], which performs the change and then
//! re-validates, returning the full validity map so the caller sees every
//! row that the edit invalidated or revalidated. Submission never blocks on
//! invalid rows; [`Submission::clean`] reports the state and the caller
//! decides how to present it.

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::schedule::{Interval, WeekSchedule, Weekday};
use crate::time::parse_field;
use crate::validate::{validate_week, WeekValidity};

/// One user edit to the week schedule.
///
/// Bound values arrive as raw field strings: `"HH:MM"`, or empty for a
/// blanked-out field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Append the default full-day interval (00:00–23:59) to a day.
    Add { day: Weekday },
    /// Delete the interval at `index`.
    Remove { day: Weekday, index: usize },
    /// Replace the start bound of the interval at `index`.
    SetStart {
        day: Weekday,
        index: usize,
        value: String,
    },
    /// Replace the end bound of the interval at `index`.
    SetEnd {
        day: Weekday,
        index: usize,
        value: String,
    },
}

/// Apply one edit in place and re-validate.
///
/// Structural problems (row index out of range, unparseable time string)
/// are errors and leave the schedule untouched. Edits that merely produce
/// invalid intervals succeed; the returned validity map carries the verdicts.
pub fn apply(week: &mut WeekSchedule, op: &EditOp) -> Result<WeekValidity, EditError> {
    match op {
        EditOp::Add { day } => {
            week.day_mut(*day).push(Interval::full_day());
        }
        EditOp::Remove { day, index } => {
            let rows = week.day_mut(*day);
            if *index >= rows.len() {
                return Err(EditError::RowOutOfRange {
                    day: *day,
                    index: *index,
                    len: rows.len(),
                });
            }
            rows.remove(*index);
        }
        EditOp::SetStart { day, index, value } => {
            let bound = parse_field(value)?;
            row_mut(week, *day, *index)?.start = bound;
        }
        EditOp::SetEnd { day, index, value } => {
            let bound = parse_field(value)?;
            row_mut(week, *day, *index)?.end = bound;
        }
    }
    Ok(validate_week(week))
}

/// Apply a sequence of edits, stopping at the first structural error.
///
/// Returns the validity map after the last applied op (or the initial
/// validity for an empty sequence).
pub fn apply_all(week: &mut WeekSchedule, ops: &[EditOp]) -> Result<WeekValidity, EditError> {
    let mut validity = validate_week(week);
    for op in ops {
        validity = apply(week, op)?;
    }
    Ok(validity)
}

fn row_mut(
    week: &mut WeekSchedule,
    day: Weekday,
    index: usize,
) -> Result<&mut Interval, EditError> {
    let rows = week.day_mut(day);
    let len = rows.len();
    rows.get_mut(index)
        .ok_or(EditError::RowOutOfRange { day, index, len })
}

/// One interval in the canonical submission payload: `"HH:MM"` strings,
/// `null` for blank bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadInterval {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl From<&Interval> for PayloadInterval {
    fn from(interval: &Interval) -> Self {
        PayloadInterval {
            start: interval.start.map(|t| t.to_hhmm()),
            end: interval.end.map(|t| t.to_hhmm()),
        }
    }
}

/// The canonical week payload read out on submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekPayload {
    #[serde(rename = "Sunday")]
    pub sunday: Vec<PayloadInterval>,
    #[serde(rename = "Monday")]
    pub monday: Vec<PayloadInterval>,
    #[serde(rename = "Tuesday")]
    pub tuesday: Vec<PayloadInterval>,
    #[serde(rename = "Wednesday")]
    pub wednesday: Vec<PayloadInterval>,
    #[serde(rename = "Thursday")]
    pub thursday: Vec<PayloadInterval>,
    #[serde(rename = "Friday")]
    pub friday: Vec<PayloadInterval>,
    #[serde(rename = "Saturday")]
    pub saturday: Vec<PayloadInterval>,
}

/// The result of the submit action.
///
/// Submission always completes; `clean` is what a presentation layer turns
/// into its success or warning notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub payload: WeekPayload,
    pub validity: WeekValidity,
    pub clean: bool,
}

/// Read the week out as its canonical payload plus final validity.
pub fn submit(week: &WeekSchedule) -> Submission {
    let mut payload = WeekPayload::default();
    for (day, intervals) in week.days() {
        let rows: Vec<PayloadInterval> = intervals.iter().map(PayloadInterval::from).collect();
        match day {
            Weekday::Sunday => payload.sunday = rows,
            Weekday::Monday => payload.monday = rows,
            Weekday::Tuesday => payload.tuesday = rows,
            Weekday::Wednesday => payload.wednesday = rows,
            Weekday::Thursday => payload.thursday = rows,
            Weekday::Friday => payload.friday = rows,
            Weekday::Saturday => payload.saturday = rows,
        }
    }
    let validity = validate_week(week);
    let clean = validity.is_clean();
    Submission {
        payload,
        validity,
        clean,
    }
}
