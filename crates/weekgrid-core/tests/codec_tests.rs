//! Tests for the minute-offset / "HH:MM" codec.

use weekgrid_core::error::TimeParseError;
use weekgrid_core::time::{parse_field, MINUTES_PER_DAY};
use weekgrid_core::TimeOfDay;

#[test]
fn roundtrip_every_minute_of_the_day() {
    for minutes in 0..u32::from(MINUTES_PER_DAY) {
        let t = TimeOfDay::from_minutes(minutes).unwrap();
        let parsed = TimeOfDay::parse(&t.to_hhmm()).unwrap();
        assert_eq!(parsed.minutes(), minutes as u16);
    }
}

#[test]
fn formats_are_zero_padded() {
    assert_eq!(TimeOfDay::from_minutes(0).unwrap().to_hhmm(), "00:00");
    assert_eq!(TimeOfDay::from_minutes(65).unwrap().to_hhmm(), "01:05");
    assert_eq!(TimeOfDay::from_minutes(720).unwrap().to_hhmm(), "12:00");
    assert_eq!(TimeOfDay::from_minutes(1439).unwrap().to_hhmm(), "23:59");
}

#[test]
fn parses_unpadded_parts() {
    assert_eq!(TimeOfDay::parse("9:5").unwrap().minutes(), 545);
}

#[test]
fn empty_input_is_distinguished() {
    assert_eq!(TimeOfDay::parse(""), Err(TimeParseError::Empty));
    assert_eq!(TimeOfDay::parse("   "), Err(TimeParseError::Empty));
}

#[test]
fn malformed_input_is_an_error() {
    assert!(matches!(
        TimeOfDay::parse("1200"),
        Err(TimeParseError::Malformed(_))
    ));
    assert!(matches!(
        TimeOfDay::parse("ab:cd"),
        Err(TimeParseError::Malformed(_))
    ));
    assert!(matches!(
        TimeOfDay::parse("-1:30"),
        Err(TimeParseError::Malformed(_))
    ));
}

#[test]
fn out_of_range_offsets_rejected() {
    assert_eq!(
        TimeOfDay::from_minutes(1440),
        Err(TimeParseError::OutOfRange(1440))
    );
    assert_eq!(
        TimeOfDay::parse("24:00"),
        Err(TimeParseError::OutOfRange(1440))
    );
}

#[test]
fn overflow_minutes_part_still_normalizes() {
    // "12:99" is 819 minutes; no per-part bounds check, only the day bound.
    assert_eq!(TimeOfDay::parse("12:99").unwrap().minutes(), 819);
}

#[test]
fn parse_field_maps_blank_to_none() {
    assert_eq!(parse_field("").unwrap(), None);
    assert_eq!(
        parse_field("07:45").unwrap().map(|t| t.minutes()),
        Some(465)
    );
    assert!(parse_field("7;45").is_err());
}
