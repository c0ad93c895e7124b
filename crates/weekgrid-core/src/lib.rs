//! # weekgrid-core
//!
//! The validated core of a weekly schedule editor: per-day time intervals,
//! overlap detection, and the minute-offset/"HH:MM" codec, wrapped in an
//! explicit serializable week-schedule value driven by an update function
//! that returns a per-field validity map.
//!
//! Two intervals overlap under the half-open convention: touching endpoints
//! (one ends exactly when the next starts) do not count. Blank or reversed
//! intervals are tolerated in storage, flagged in the validity map, and
//! skipped as comparison neighbors.
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` minute offset and the `"HH:MM"` codec
//! - [`schedule`] — `Interval`, `Weekday`, `WeekSchedule` value objects
//! - [`validate`] — the overlap validator and validity maps
//! - [`editor`] — edit ops, the `apply` update function, submission
//! - [`error`] — error types
//!
//! ## Quick start
//!
//! ```rust
//! use weekgrid_core::{apply, submit, EditOp, WeekSchedule, Weekday};
//!
//! let mut week = WeekSchedule::new();
//! apply(&mut week, &EditOp::Add { day: Weekday::Monday }).unwrap();
//! let validity = apply(
//!     &mut week,
//!     &EditOp::SetEnd { day: Weekday::Monday, index: 0, value: "12:00".into() },
//! )
//! .unwrap();
//! assert!(validity.is_clean());
//!
//! let submission = submit(&week);
//! assert!(submission.clean);
//! assert_eq!(submission.payload.monday[0].end.as_deref(), Some("12:00"));
//! ```

pub mod editor;
pub mod error;
pub mod schedule;
pub mod time;
pub mod validate;

pub use editor::{apply, apply_all, submit, EditOp, Submission, WeekPayload};
pub use error::{EditError, TimeParseError};
pub use schedule::{Interval, WeekSchedule, Weekday};
pub use time::TimeOfDay;
pub use validate::{check_bounds, is_valid, validate_day, validate_week, Invalidity, WeekValidity};
