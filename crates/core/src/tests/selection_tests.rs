// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_calendar, date, dates};
use crate::{DateSelectionSet, SelectionDelta};
use availability_domain::{CalendarDate, HolidayCalendar, YearMonth};

#[test]
fn test_toggle_adds_then_removes() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();

    let added: SelectionDelta = selection.toggle(&calendar, date("2025-06-02"));
    assert_eq!(added.added, dates(&["2025-06-02"]));
    assert!(selection.contains(date("2025-06-02")));

    let removed: SelectionDelta = selection.toggle(&calendar, date("2025-06-02"));
    assert_eq!(removed.removed, dates(&["2025-06-02"]));
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_holiday_is_silent_no_op() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();

    let delta: SelectionDelta = selection.toggle(&calendar, date("2025-11-11"));

    assert!(delta.is_empty());
    assert!(selection.is_empty());
}

#[test]
fn test_add_is_idempotent_and_rejects_holidays() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();

    assert!(!selection.add(&calendar, date("2025-06-03")).is_empty());
    assert!(selection.add(&calendar, date("2025-06-03")).is_empty());
    assert!(selection.add(&calendar, date("2025-07-01")).is_empty());
    assert_eq!(selection.sorted_dates(), dates(&["2025-06-03"]));
}

#[test]
fn test_remove_unselected_date_is_no_op() {
    let mut selection: DateSelectionSet = DateSelectionSet::new();

    assert!(selection.remove(date("2025-06-03")).is_empty());
}

#[test]
fn test_weekdays_in_november_2025_exclude_remembrance_day() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();
    let month: YearMonth = YearMonth::parse("2025-11").unwrap();

    let delta: SelectionDelta = selection.select_weekdays_in_month(&calendar, month).unwrap();

    assert_eq!(delta.added.len(), 19);
    assert_eq!(selection.len(), 19);
    assert!(!selection.contains(date("2025-11-11")));
    assert!(selection.contains(date("2025-11-10")));
    assert!(selection.contains(date("2025-11-12")));
    assert!(
        selection
            .sorted_dates()
            .iter()
            .all(CalendarDate::is_weekday)
    );
}

#[test]
fn test_weekday_bulk_select_is_idempotent() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();
    let month: YearMonth = YearMonth::parse("2025-11").unwrap();

    selection.select_weekdays_in_month(&calendar, month).unwrap();
    let second: SelectionDelta = selection.select_weekdays_in_month(&calendar, month).unwrap();

    assert!(second.is_empty());
    assert_eq!(selection.len(), 19);
}

#[test]
fn test_entire_month_includes_weekends_but_not_holidays() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();
    let month: YearMonth = YearMonth::parse("2025-07").unwrap();

    selection.select_entire_month(&calendar, month).unwrap();

    assert_eq!(selection.len(), 30);
    assert!(!selection.contains(date("2025-07-01")));
    assert!(selection.contains(date("2025-07-05")));
}

#[test]
fn test_clear_reports_every_removed_date() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();
    selection.add(&calendar, date("2025-06-05"));
    selection.add(&calendar, date("2025-06-02"));

    let delta: SelectionDelta = selection.clear();

    assert_eq!(delta.removed, dates(&["2025-06-02", "2025-06-05"]));
    assert!(selection.is_empty());
}

#[test]
fn test_replace_drops_holidays_and_reports_difference() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();
    selection.add(&calendar, date("2025-06-02"));
    selection.add(&calendar, date("2025-06-03"));

    let delta: SelectionDelta = selection.replace(
        &calendar,
        dates(&["2025-06-03", "2025-07-01", "2025-06-04", "2025-06-04"]),
    );

    assert_eq!(delta.added, dates(&["2025-06-04"]));
    assert_eq!(delta.removed, dates(&["2025-06-02"]));
    assert_eq!(selection.sorted_dates(), dates(&["2025-06-03", "2025-06-04"]));
}

#[test]
fn test_sorted_dates_are_strictly_ascending() {
    let calendar: HolidayCalendar = create_test_calendar();
    let mut selection: DateSelectionSet = DateSelectionSet::new();
    for value in ["2025-06-20", "2025-06-02", "2025-06-11", "2025-06-02"] {
        selection.add(&calendar, date(value));
    }

    let sorted: Vec<CalendarDate> = selection.sorted_dates();

    assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(selection.first(), Some(date("2025-06-02")));
    assert_eq!(selection.last(), Some(date("2025-06-20")));
}
