//! Behavior-driven tests for times of day

use timemoney_core::{HourOfDay, Meridiem, MinuteOfHour};
use timemoney_tests::{TimeOfDay, ValidationError};

#[test]
fn when_built_from_a_12_hour_reading_it_maps_onto_24_hours() {
    // Given: Readings around noon and midnight
    let half_past_midnight = TimeOfDay::hour_and_minute_12(12, 30, Meridiem::Am).expect("valid");
    let half_past_noon = TimeOfDay::hour_and_minute_12(12, 30, Meridiem::Pm).expect("valid");
    let evening = TimeOfDay::hour_and_minute_12(7, 15, Meridiem::Pm).expect("valid");

    // Then: They land on the expected 24-hour values
    assert_eq!(half_past_midnight.to_string(), "00:30");
    assert_eq!(half_past_noon.to_string(), "12:30");
    assert_eq!(evening.to_string(), "19:15");
}

#[test]
fn when_components_are_out_of_range_construction_fails() {
    assert!(matches!(
        TimeOfDay::hour_and_minute(24, 0).expect_err("must fail"),
        ValidationError::HourOutOfRange { hour: 24 }
    ));
    assert!(matches!(
        TimeOfDay::hour_and_minute(23, 60).expect_err("must fail"),
        ValidationError::MinuteOutOfRange { minute: 60 }
    ));
    assert!(matches!(
        TimeOfDay::hour_and_minute_12(13, 0, Meridiem::Pm).expect_err("must fail"),
        ValidationError::TwelveHourOutOfRange { hour: 13 }
    ));
}

#[test]
fn when_ordering_hour_dominates_minute() {
    let early = TimeOfDay::hour_and_minute(8, 59).expect("valid");
    let late = TimeOfDay::hour_and_minute(9, 0).expect("valid");

    assert!(early.is_before(late));
    assert!(late.is_after(early));
    assert!(HourOfDay::new(8).expect("valid").is_before(HourOfDay::new(9).expect("valid")));
    assert!(MinuteOfHour::new(59).expect("valid").is_after(MinuteOfHour::new(0).expect("valid")));
}

#[test]
fn when_serialized_time_of_day_is_plain_text() {
    let time = TimeOfDay::hour_and_minute(9, 5).expect("valid");
    let json = serde_json::to_string(&time).expect("serializes");
    assert_eq!(json, r#""09:05""#);

    let parsed: TimeOfDay = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(parsed, time);
    assert!(serde_json::from_str::<TimeOfDay>(r#""25:00""#).is_err());
}
