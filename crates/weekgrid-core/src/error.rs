//! Error types for weekgrid-core operations.

use thiserror::Error;

use crate::schedule::Weekday;

/// Errors from converting "HH:MM" strings or raw minute offsets into a
/// time-of-day value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input string was empty (an untouched form field).
    #[error("empty time field")]
    Empty,

    /// The input did not match the `HH:MM` shape or contained non-numeric parts.
    #[error("malformed time '{0}': expected HH:MM")]
    Malformed(String),

    /// The minute offset fell outside `[0, 1439]`.
    #[error("minute offset out of range: {0} (max 1439)")]
    OutOfRange(u64),
}

/// Structural errors from applying an edit operation to a week schedule.
///
/// These are distinct from validity: an op that *targets* a row that does not
/// exist is an error, while an op that *produces* an overlapping interval
/// succeeds and reports the overlap through the validity map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The op addressed a row index past the end of the day's schedule.
    #[error("{day} has no interval at index {index} (len {len})")]
    RowOutOfRange {
        day: Weekday,
        index: usize,
        len: usize,
    },

    /// The op carried a time string the codec could not parse.
    #[error("bad time value: {0}")]
    BadTime(#[from] TimeParseError),
}
