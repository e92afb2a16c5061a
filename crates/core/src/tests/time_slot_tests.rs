// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{date, dates, window};
use crate::{CoreError, DurationMode, SelectionDelta, TimeSlotManager};
use availability_domain::{DateRange, TimeWindow, group_consecutive};

fn manager_with(selected: &[&str]) -> TimeSlotManager {
    let mut manager: TimeSlotManager = TimeSlotManager::new(TimeWindow::DEFAULT);
    manager.sync(&SelectionDelta {
        added: dates(selected),
        removed: Vec::new(),
    });
    manager
}

#[test]
fn test_new_dates_get_default_window_in_per_date_mode() {
    let manager: TimeSlotManager = manager_with(&["2025-06-02"]);

    assert_eq!(manager.mode(), DurationMode::PerDate);
    assert_eq!(
        manager.window_for(date("2025-06-02")),
        Some(TimeWindow::DEFAULT)
    );
}

#[test]
fn test_new_dates_get_master_window_in_uniform_mode() {
    let mut manager: TimeSlotManager = manager_with(&[]);
    manager.set_master_window(window("07:30", "15:30"));
    manager.set_duration_mode(DurationMode::Uniform);

    manager.sync(&SelectionDelta {
        added: dates(&["2025-06-02"]),
        removed: Vec::new(),
    });

    assert_eq!(
        manager.window_for(date("2025-06-02")),
        Some(window("07:30", "15:30"))
    );
}

#[test]
fn test_removed_dates_lose_their_slot() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02", "2025-06-03"]);

    manager.sync(&SelectionDelta {
        added: Vec::new(),
        removed: dates(&["2025-06-02"]),
    });

    assert_eq!(manager.dates(), dates(&["2025-06-03"]));
}

#[test]
fn test_switch_to_uniform_overwrites_custom_windows() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02", "2025-06-03"]);
    manager
        .set_window_for_date(date("2025-06-02"), window("06:00", "12:00"))
        .unwrap();

    manager.set_duration_mode(DurationMode::Uniform);
    manager.set_duration_mode(DurationMode::PerDate);

    assert!(manager.slots().all(|(_, slot)| slot == TimeWindow::DEFAULT));
}

#[test]
fn test_master_window_broadcasts_only_in_uniform_mode() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02"]);

    manager.set_master_window(window("08:00", "16:00"));
    assert_eq!(
        manager.window_for(date("2025-06-02")),
        Some(TimeWindow::DEFAULT)
    );

    manager.set_duration_mode(DurationMode::Uniform);
    assert_eq!(
        manager.window_for(date("2025-06-02")),
        Some(window("08:00", "16:00"))
    );
}

#[test]
fn test_set_window_for_date_rejected_in_uniform_mode() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02"]);
    manager.set_duration_mode(DurationMode::Uniform);

    let result: Result<(), CoreError> =
        manager.set_window_for_date(date("2025-06-02"), window("10:00", "14:00"));

    assert!(matches!(
        result,
        Err(CoreError::InvalidState {
            operation: "SetDateWindow",
            ..
        })
    ));
    assert_eq!(
        manager.window_for(date("2025-06-02")),
        Some(TimeWindow::DEFAULT)
    );
}

#[test]
fn test_set_window_for_unselected_date_rejected() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02"]);

    let result: Result<(), CoreError> =
        manager.set_window_for_date(date("2025-06-09"), window("10:00", "14:00"));

    assert!(result.is_err());
    assert_eq!(manager.dates(), dates(&["2025-06-02"]));
}

#[test]
fn test_copy_from_previous_within_range() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02", "2025-06-03", "2025-06-05"]);
    manager
        .set_window_for_date(date("2025-06-02"), window("07:00", "15:00"))
        .unwrap();
    let ranges: Vec<DateRange> = group_consecutive(&manager.dates());

    let changed: bool = manager
        .copy_window_from_previous(date("2025-06-03"), &ranges)
        .unwrap();

    assert!(changed);
    assert_eq!(
        manager.window_for(date("2025-06-03")),
        Some(window("07:00", "15:00"))
    );
}

#[test]
fn test_copy_from_previous_is_no_op_for_first_in_range() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02", "2025-06-03", "2025-06-05"]);
    manager
        .set_window_for_date(date("2025-06-03"), window("07:00", "15:00"))
        .unwrap();
    let ranges: Vec<DateRange> = group_consecutive(&manager.dates());

    let changed: bool = manager
        .copy_window_from_previous(date("2025-06-05"), &ranges)
        .unwrap();

    assert!(!changed);
    assert_eq!(
        manager.window_for(date("2025-06-05")),
        Some(TimeWindow::DEFAULT)
    );
}

#[test]
fn test_copy_from_previous_rejects_unselected_date() {
    let mut manager: TimeSlotManager = manager_with(&["2025-06-02"]);
    let ranges: Vec<DateRange> = group_consecutive(&manager.dates());

    let result: Result<bool, CoreError> =
        manager.copy_window_from_previous(date("2025-06-03"), &ranges);

    assert!(matches!(
        result,
        Err(CoreError::InvalidState {
            operation: "CopyFromPrevious",
            ..
        })
    ));
}

#[test]
fn test_duration_mode_parse_accepts_known_spellings() {
    assert_eq!(DurationMode::parse("uniform"), Some(DurationMode::Uniform));
    assert_eq!(DurationMode::parse("PerDate"), Some(DurationMode::PerDate));
    assert_eq!(DurationMode::parse("per-date"), Some(DurationMode::PerDate));
    assert_eq!(DurationMode::parse("weekly"), None);
}
