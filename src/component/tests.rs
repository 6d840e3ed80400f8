use crate::component::{Available, Component, Failure};
use crate::core::types::Timestamp;
use crate::error::Error;
use std::time::{Duration, UNIX_EPOCH};

fn ts(secs: i64) -> Timestamp {
    Timestamp::from_unix(secs)
}

#[test]
fn test_failure_duration() {
    let failure = Failure::new(ts(1_618_639_260), ts(1_618_639_560), "Glitch");

    assert_eq!(failure.duration().as_secs(), 300);
    assert_eq!(failure.cause, "Glitch");
}

#[test]
fn test_available_duration() {
    let window = Available::new(ts(1_618_646_400), ts(1_618_650_000));

    assert_eq!(window.duration().as_secs(), 3600);
    assert_eq!(window.duration().as_hours(), 1.0);
}

#[test]
fn test_component_default_is_empty() {
    let component = Component::default();

    assert!(component.failures.is_empty());
    assert!(component.availability.is_empty());
    assert!(component.validate().is_ok());
}

#[test]
fn test_timestamp_from_system_time() {
    let time = UNIX_EPOCH + Duration::from_secs(1_618_639_260);
    let stamp = Timestamp::from(time);

    assert_eq!(stamp.as_unix(), 1_618_639_260);
}

#[test]
fn test_timestamp_from_system_time_truncates() {
    let time = UNIX_EPOCH + Duration::from_millis(1_618_639_260_750);
    let stamp = Timestamp::from(time);

    // Sub-second precision is dropped, not rounded
    assert_eq!(stamp.as_unix(), 1_618_639_260);
}

#[test]
fn test_timestamp_from_system_time_before_epoch() {
    let time = UNIX_EPOCH - Duration::from_secs(90);
    let stamp = Timestamp::from(time);

    assert_eq!(stamp.as_unix(), -90);
}

#[test]
fn test_validate_accepts_ordered_records() {
    let component = Component::new(
        vec![
            Failure::new(ts(100), ts(200), "Glitch"),
            Failure::new(ts(300), ts(400), "Glitch"),
        ],
        vec![Available::new(ts(200), ts(300)), Available::new(ts(400), ts(500))],
    );

    assert!(component.validate().is_ok());
}

#[test]
fn test_validate_rejects_inverted_interval() {
    let component = Component::new(vec![Failure::new(ts(200), ts(100), "Glitch")], Vec::new());

    let err = component.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_validate_rejects_out_of_order_failures() {
    let component = Component::new(
        vec![
            Failure::new(ts(300), ts(400), "Glitch"),
            Failure::new(ts(100), ts(200), "Glitch"),
        ],
        Vec::new(),
    );

    let err = component.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_validate_rejects_out_of_order_availability() {
    let component = Component::new(
        Vec::new(),
        vec![Available::new(ts(300), ts(400)), Available::new(ts(100), ts(200))],
    );

    let err = component.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_validate_allows_zero_length_interval() {
    let component = Component::new(vec![Failure::new(ts(100), ts(100), "Blip")], Vec::new());

    assert!(component.validate().is_ok());
}
