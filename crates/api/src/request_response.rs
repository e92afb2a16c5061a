// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use availability_persistence::FormFieldValues;
use availability_signals::FieldUpdate;
use serde::{Deserialize, Serialize};

/// API request carrying a time window as entered in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRequest {
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
}

impl WindowRequest {
    /// Creates a request from two `HH:MM` strings.
    #[must_use]
    pub fn new(start_time: &str, end_time: &str) -> Self {
        Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

/// API response for a successful scheduler change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeResponse {
    /// The action that was applied.
    pub action: String,
    /// `user` or `load`.
    pub origin: String,
    /// The derived fields the host must write, with their flags.
    pub updates: Vec<FieldUpdate>,
    /// The current value of every derived field.
    pub values: FormFieldValues,
}

/// API response summarising a load of stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Number of dates selected after the load.
    pub selected: usize,
    /// The duration mode restored from the data.
    pub duration_mode: String,
    /// Whether the selection was generated from the stored start/end dates.
    pub generated_from_range: bool,
    /// Human-readable notes for every correction made while loading.
    pub corrections: Vec<String>,
}

/// One selected date as the schedule table shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `Jun 2, 2025`.
    pub label: String,
    /// `HH:MM`.
    pub start_time: String,
    /// `HH:MM`.
    pub end_time: String,
    /// Whether "copy from previous" applies to this row.
    pub can_copy_previous: bool,
}

/// A contiguous run of selected dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeView {
    /// `Jun 2, 2025` or `Jun 2, 2025 → Jun 4, 2025`.
    pub label: String,
    /// The dates in the run, ascending.
    pub slots: Vec<SlotView>,
}

/// A holiday the calendar shows as disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayView {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Holiday name.
    pub name: String,
}

/// API response describing the whole schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleView {
    /// First selected date.
    pub start_date: Option<String>,
    /// Last selected date.
    pub end_date: Option<String>,
    /// Number of selected dates.
    pub selected_count: usize,
    /// `Uniform` or `PerDate`.
    pub duration_mode: String,
    /// Master window start, `HH:MM`.
    pub master_start_time: String,
    /// Master window end, `HH:MM`.
    pub master_end_time: String,
    /// The month the calendar should open on, `YYYY-MM`.
    pub focus_month: Option<String>,
    /// Whether changes are currently reported as load-caused.
    pub is_hydrating: bool,
    /// Contiguous runs of selected dates.
    pub ranges: Vec<RangeView>,
}
