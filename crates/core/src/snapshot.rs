// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The serializable projection of scheduler state.
//!
//! `AvailabilitySnapshot` is what the scheduler produces: typed, sorted and
//! consistent. `SnapshotInput` is what it accepts when hydrating: plain
//! strings exactly as they were persisted, which may be stale or partially
//! corrupt and are filtered during the load.

use availability_domain::{CalendarDate, TimeOfDay, TimeWindow};
use serde::{Deserialize, Serialize};

/// One date's time window, as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The selected date.
    pub date: CalendarDate,
    /// When work starts.
    pub start_time: TimeOfDay,
    /// When work ends.
    pub end_time: TimeOfDay,
}

impl TimeSlot {
    /// Creates a slot for `date` covering `window`.
    #[must_use]
    pub const fn new(date: CalendarDate, window: TimeWindow) -> Self {
        Self {
            date,
            start_time: window.start,
            end_time: window.end,
        }
    }

    /// Returns the slot's window.
    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// The derived, persistable view of the scheduler.
///
/// `start_date`/`end_date` are the first and last selected dates, or `None`
/// for an empty selection. `time_slots` holds one entry per selected date in
/// ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    /// Earliest selected date.
    pub start_date: Option<CalendarDate>,
    /// Latest selected date.
    pub end_date: Option<CalendarDate>,
    /// Every selected date, ascending.
    pub selected_dates: Vec<CalendarDate>,
    /// One window per selected date, ascending by date.
    pub time_slots: Vec<TimeSlot>,
}

impl AvailabilitySnapshot {
    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_dates.is_empty()
    }
}

/// A persisted time slot before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimeSlot {
    /// The slot's date, expected as `YYYY-MM-DD`.
    pub date: String,
    /// Start time, expected as `HH:MM`.
    pub start_time: String,
    /// End time, expected as `HH:MM`.
    pub end_time: String,
}

/// Persisted scheduler data before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInput {
    /// Persisted start date, used only when `selected_dates` is empty.
    pub start_date: Option<String>,
    /// Persisted end date, used only when `selected_dates` is empty.
    pub end_date: Option<String>,
    /// Persisted selection.
    pub selected_dates: Vec<String>,
    /// Persisted time slots.
    pub time_slots: Vec<RawTimeSlot>,
}

impl From<&AvailabilitySnapshot> for SnapshotInput {
    fn from(snapshot: &AvailabilitySnapshot) -> Self {
        Self {
            start_date: snapshot.start_date.map(|date| date.to_string()),
            end_date: snapshot.end_date.map(|date| date.to_string()),
            selected_dates: snapshot
                .selected_dates
                .iter()
                .map(ToString::to_string)
                .collect(),
            time_slots: snapshot
                .time_slots
                .iter()
                .map(|slot| RawTimeSlot {
                    date: slot.date.to_string(),
                    start_time: slot.start_time.to_string(),
                    end_time: slot.end_time.to_string(),
                })
                .collect(),
        }
    }
}
