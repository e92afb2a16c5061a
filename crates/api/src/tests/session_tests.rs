// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{ManualClock, create_stored_session, create_test_session};
use crate::{
    ApiError, ChangeResponse, HolidayView, LoadSummary, ScheduleView, SchedulerSession,
    WindowRequest,
};
use availability::SchedulerConfig;
use availability_domain::HolidayCalendar;
use availability_persistence::PersistedAvailability;
use availability_signals::FormField;
use std::time::Duration;

const STORED: &str = r#"{
    "start_date": "2025-06-02",
    "end_date": "2025-06-04",
    "selected_dates": "[\"2025-06-02\",\"2025-06-03\",\"2025-06-04\"]",
    "time_slots": [
        {"date": "2025-06-02", "start_time": "08:00", "end_time": "16:00"},
        {"date": "2025-06-03", "start_time": "08:00", "end_time": "16:00"},
        {"date": "2025-06-04", "start_time": "08:00", "end_time": "16:00"}
    ]
}"#;

#[test]
fn test_toggle_returns_field_values() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();

    let response: ChangeResponse = session.toggle_date("2025-06-02").unwrap();

    assert_eq!(response.action, "ToggleDate");
    assert_eq!(response.origin, "user");
    assert_eq!(response.values.start_date, "2025-06-02");
    assert_eq!(response.values.selected_dates, r#"["2025-06-02"]"#);
    assert!(
        response
            .updates
            .iter()
            .any(|update| update.field == FormField::EndDate && update.should_validate)
    );
}

#[test]
fn test_malformed_date_is_invalid_input() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();

    let result: Result<ChangeResponse, ApiError> = session.toggle_date("06/02/2025");

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}

#[test]
fn test_unknown_duration_mode_is_invalid_input() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();

    let result: Result<ChangeResponse, ApiError> = session.set_duration_mode("weekly");

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "duration_mode"
    ));
}

#[test]
fn test_date_window_in_uniform_mode_is_invalid_state() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();
    session.toggle_date("2025-06-02").unwrap();
    session.set_duration_mode("uniform").unwrap();

    let result: Result<ChangeResponse, ApiError> =
        session.set_date_window("2025-06-02", &WindowRequest::new("10:00", "12:00"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidState { ref operation, .. }) if operation == "SetDateWindow"
    ));
}

#[test]
fn test_view_groups_ranges_with_labels() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();
    for date in ["2025-06-02", "2025-06-03", "2025-06-05"] {
        session.toggle_date(date).unwrap();
    }

    let view: ScheduleView = session.view();

    assert_eq!(view.selected_count, 3);
    assert_eq!(view.focus_month.as_deref(), Some("2025-06"));
    assert_eq!(view.ranges.len(), 2);
    assert_eq!(view.ranges[0].label, "Jun 2, 2025 → Jun 3, 2025");
    assert_eq!(view.ranges[1].label, "Jun 5, 2025");
    assert!(!view.ranges[0].slots[0].can_copy_previous);
    assert!(view.ranges[0].slots[1].can_copy_previous);
    assert_eq!(view.ranges[0].slots[0].start_time, "09:00");
}

#[test]
fn test_open_stored_restores_uniform_mode_and_hydrates() {
    let (session, _clock): (SchedulerSession<ManualClock>, ManualClock) =
        create_stored_session(STORED);

    let view: ScheduleView = session.view();

    assert!(view.is_hydrating);
    assert_eq!(view.duration_mode, "Uniform");
    assert_eq!(view.master_start_time, "08:00");
    assert_eq!(view.ranges.len(), 1);
}

#[test]
fn test_changes_during_hydration_are_load_caused() {
    let (mut session, clock): (SchedulerSession<ManualClock>, ManualClock) =
        create_stored_session(STORED);

    let during: ChangeResponse = session.toggle_date("2025-06-05").unwrap();
    clock.advance(Duration::from_millis(250));
    let after: ChangeResponse = session.toggle_date("2025-06-06").unwrap();

    assert_eq!(during.origin, "load");
    assert!(during.updates.iter().all(|update| !update.should_dirty));
    assert_eq!(after.origin, "user");
    assert!(after.updates.iter().any(|update| update.should_dirty));
}

#[test]
fn test_open_stored_reports_corrections() {
    let (_session, summary): (SchedulerSession, LoadSummary) = SchedulerSession::open_stored(
        HolidayCalendar::canadian_statutory(),
        SchedulerConfig::default(),
        r#"{"selected_dates":["2025-07-01","2025-07-02","bogus"],"time_slots":[]}"#,
    )
    .unwrap();

    assert_eq!(summary.selected, 1);
    assert!(
        summary
            .corrections
            .iter()
            .any(|note| note.contains("Canada Day"))
    );
    assert!(summary.corrections.iter().any(|note| note.contains("bogus")));
}

const DAMAGED_ARRAYS: &str = r#"{
    "selected_dates": ["2025-06-02", null, 42, "2025-06-03"],
    "time_slots": [
        {"date": "2025-06-02", "start_time": "08:00", "end_time": "12:00"},
        {"date": "2025-06-03", "start_time": "08:00"}
    ]
}"#;

const DAMAGED_WRAPPED: &str = r#"{
    "selected_dates": "[\"2025-06-02\",null,42,\"2025-06-03\"]",
    "time_slots": "[{\"date\":\"2025-06-02\",\"start_time\":\"08:00\",\"end_time\":\"12:00\"},{\"date\":\"2025-06-03\",\"start_time\":\"08:00\"}]"
}"#;

fn assert_damaged_document_recovers(stored_json: &str) {
    let (session, summary): (SchedulerSession, LoadSummary) = SchedulerSession::open_stored(
        HolidayCalendar::canadian_statutory(),
        SchedulerConfig::default(),
        stored_json,
    )
    .unwrap();

    assert_eq!(summary.selected, 2);
    for expected in [
        "'null'",
        "'42'",
        "Dropped time slot for '2025-06-03'",
        "Gave 2025-06-03 the default window",
    ] {
        assert!(
            summary.corrections.iter().any(|note| note.contains(expected)),
            "missing correction {expected}: {:?}",
            summary.corrections
        );
    }

    let view: ScheduleView = session.view();
    assert_eq!(view.duration_mode, "PerDate");
    assert_eq!(view.ranges.len(), 1);
    assert_eq!(view.ranges[0].slots[0].start_time, "08:00");
    assert_eq!(view.ranges[0].slots[0].end_time, "12:00");
    assert_eq!(view.ranges[0].slots[1].start_time, "09:00");
    assert_eq!(view.ranges[0].slots[1].end_time, "17:00");
}

#[test]
fn test_open_stored_recovers_damaged_entries_in_arrays() {
    assert_damaged_document_recovers(DAMAGED_ARRAYS);
}

#[test]
fn test_open_stored_recovers_damaged_entries_in_wrapped_lists() {
    assert_damaged_document_recovers(DAMAGED_WRAPPED);
}

#[test]
fn test_oversized_stored_range_is_ignored() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();

    let summary: LoadSummary = session
        .load_stored(r#"{"start_date":"2025-01-01","end_date":"2027-12-31"}"#)
        .unwrap();

    assert!(!summary.generated_from_range);
    assert_eq!(summary.selected, 0);
    assert!(
        summary
            .corrections
            .iter()
            .any(|note| note.contains("longer than 366 days"))
    );
}

#[test]
fn test_open_stored_rejects_non_document() {
    let result: Result<(SchedulerSession, LoadSummary), ApiError> = SchedulerSession::open_stored(
        HolidayCalendar::canadian_statutory(),
        SchedulerConfig::default(),
        "not json",
    );

    assert!(matches!(result, Err(ApiError::StorageFormat { .. })));
}

#[test]
fn test_stored_document_round_trips_through_session() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();
    session.select_weekdays("2025-11").unwrap();
    session
        .set_date_window("2025-11-03", &WindowRequest::new("07:00", "15:00"))
        .unwrap();
    let stored: String = session.stored().to_json().unwrap();

    let (reopened, _clock): (SchedulerSession<ManualClock>, ManualClock) =
        create_stored_session(&stored);

    assert_eq!(reopened.stored(), session.stored());
    assert!(
        !reopened
            .stored()
            .selected_dates
            .contains(&String::from("2025-11-11"))
    );
}

#[test]
fn test_range_only_document_generates_selection() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();

    let summary: LoadSummary = session
        .load_stored(r#"{"start_date":"2025-12-24","end_date":"2025-12-29"}"#)
        .unwrap();

    assert!(summary.generated_from_range);
    assert_eq!(summary.selected, 4);
    assert!(summary.corrections.is_empty());
    let stored: PersistedAvailability = session.stored();
    assert_eq!(
        stored.selected_dates,
        vec!["2025-12-24", "2025-12-27", "2025-12-28", "2025-12-29"]
    );
}

#[test]
fn test_holidays_in_month() {
    let session: SchedulerSession<ManualClock> = create_test_session();

    let holidays: Vec<HolidayView> = session.holidays_in("2025-12").unwrap();

    assert_eq!(
        holidays,
        vec![
            HolidayView {
                date: String::from("2025-12-25"),
                name: String::from("Christmas Day"),
            },
            HolidayView {
                date: String::from("2025-12-26"),
                name: String::from("Boxing Day"),
            },
        ]
    );
}

#[test]
fn test_clear_selection_blanks_form_values() {
    let mut session: SchedulerSession<ManualClock> = create_test_session();
    session.select_month("2025-06").unwrap();

    let response: ChangeResponse = session.clear_selection().unwrap();

    assert_eq!(response.values.start_date, "");
    assert_eq!(response.values.time_slots, "");
    assert!(response.updates.iter().all(|update| !update.should_validate));
}
