// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, TimeOfDay, TimeWindow};

#[test]
fn test_default_window_is_nine_to_five() {
    let window: TimeWindow = TimeWindow::default();
    assert_eq!(window.start.to_string(), "09:00");
    assert_eq!(window.end.to_string(), "17:00");
    assert_eq!(window, TimeWindow::DEFAULT);
}

#[test]
fn test_time_of_day_parse() {
    let parsed: TimeOfDay = TimeOfDay::parse("08:30").unwrap();
    assert_eq!(parsed, TimeOfDay::from_hm(8, 30).unwrap());
    assert_eq!(parsed.to_string(), "08:30");
}

#[test]
fn test_time_of_day_parse_rejects_malformed_input() {
    for input in ["", "8:30", "24:00", "12:60", "noon", "12-30"] {
        let result: Result<TimeOfDay, DomainError> = TimeOfDay::parse(input);
        assert!(
            matches!(result, Err(DomainError::InvalidTime { .. })),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn test_window_does_not_enforce_ordering() {
    let inverted: TimeWindow = TimeWindow::parse("17:00", "09:00").unwrap();
    assert_eq!(inverted.start.to_string(), "17:00");
    assert_eq!(inverted.end.to_string(), "09:00");
}

#[test]
fn test_window_serializes_with_persisted_field_names() {
    let window: TimeWindow = TimeWindow::parse("08:00", "16:00").unwrap();
    let json: String = serde_json::to_string(&window).unwrap();
    assert_eq!(json, r#"{"start_time":"08:00","end_time":"16:00"}"#);

    let back: TimeWindow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, window);
}

#[test]
fn test_window_display() {
    assert_eq!(TimeWindow::DEFAULT.to_string(), "09:00 - 17:00");
}
