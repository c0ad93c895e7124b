//! Property-based tests for the codec and the overlap validator.
//!
//! These verify invariants that should hold for *any* generated input, not
//! just the hand-picked cases in the example-based test files.

use proptest::prelude::*;
use weekgrid_core::validate::{check_bounds, is_valid, validate_day, Invalidity};
use weekgrid_core::{Interval, TimeOfDay};

fn arb_minute() -> impl Strategy<Value = u32> {
    0u32..1440
}

/// A well-formed interval: both bounds present, start <= end.
fn arb_well_formed() -> impl Strategy<Value = Interval> {
    (arb_minute(), arb_minute()).prop_map(|(a, b)| {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Interval::new(
            TimeOfDay::from_minutes(start).unwrap(),
            TimeOfDay::from_minutes(end).unwrap(),
        )
    })
}

/// Any storable interval: bounds may be blank or reversed.
fn arb_any_interval() -> impl Strategy<Value = Interval> {
    (
        proptest::option::of(arb_minute()),
        proptest::option::of(arb_minute()),
    )
        .prop_map(|(s, e)| Interval {
            start: s.map(|m| TimeOfDay::from_minutes(m).unwrap()),
            end: e.map(|m| TimeOfDay::from_minutes(m).unwrap()),
        })
}

proptest! {
    #[test]
    fn codec_roundtrip(m in arb_minute()) {
        let t = TimeOfDay::from_minutes(m).unwrap();
        prop_assert_eq!(TimeOfDay::parse(&t.to_hhmm()).unwrap(), t);
    }

    #[test]
    fn hhmm_shape(m in arb_minute()) {
        let s = TimeOfDay::from_minutes(m).unwrap().to_hhmm();
        prop_assert_eq!(s.len(), 5);
        prop_assert_eq!(s.as_bytes()[2], b':');
    }

    #[test]
    fn reversed_bounds_always_invalid(a in arb_minute(), b in arb_minute(),
                                      day in prop::collection::vec(arb_any_interval(), 0..6)) {
        prop_assume!(a > b);
        let start = Some(TimeOfDay::from_minutes(a).unwrap());
        let end = Some(TimeOfDay::from_minutes(b).unwrap());
        prop_assert_eq!(check_bounds(start, end, 0, &day), Err(Invalidity::ReversedBounds));
    }

    #[test]
    fn singleton_day_always_valid(interval in arb_well_formed()) {
        let day = vec![interval];
        prop_assert!(is_valid(interval.start, interval.end, 0, &day));
    }

    /// Overlap is symmetric: in a two-row day of well-formed intervals, either
    /// both rows are valid or both report an overlap.
    #[test]
    fn overlap_is_symmetric(a in arb_well_formed(), b in arb_well_formed()) {
        let day = vec![a, b];
        let a_ok = is_valid(a.start, a.end, 0, &day);
        let b_ok = is_valid(b.start, b.end, 1, &day);
        prop_assert_eq!(a_ok, b_ok);
    }

    /// Malformed rows never influence their siblings' verdicts.
    #[test]
    fn malformed_rows_are_inert(day in prop::collection::vec(arb_well_formed(), 1..5),
                                junk in arb_any_interval()) {
        prop_assume!(!junk.is_well_formed());
        let before = validate_day(&day);

        let mut with_junk = day.clone();
        with_junk.push(junk);
        let after = validate_day(&with_junk);

        // Existing rows keep their verdicts; indices are unchanged.
        prop_assert_eq!(&after[..day.len()], &before[..]);
    }

    /// The validator never panics, whatever the day holds.
    #[test]
    fn never_panics(day in prop::collection::vec(arb_any_interval(), 0..8),
                    index in 0usize..8) {
        for row in &day {
            let _ = check_bounds(row.start, row.end, index, &day);
        }
    }
}
