// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::time_slots::DurationMode;
use availability_domain::{CalendarDate, TimeWindow, YearMonth};
use serde::{Deserialize, Serialize};

/// A command represents a user action as data only.
///
/// Commands are the only way to request scheduler changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Flip one date's membership. Holidays are ignored.
    ToggleDate {
        /// The clicked date.
        date: CalendarDate,
    },
    /// Select one date. Holidays are ignored.
    AddDate {
        /// The date to select.
        date: CalendarDate,
    },
    /// Deselect one date.
    RemoveDate {
        /// The date to deselect.
        date: CalendarDate,
    },
    /// Select every non-holiday weekday of a month.
    SelectWeekdays {
        /// The month to fill.
        month: YearMonth,
    },
    /// Select every non-holiday day of a month.
    SelectMonth {
        /// The month to fill.
        month: YearMonth,
    },
    /// Deselect everything.
    ClearSelection,
    /// Switch between uniform and per-date windows.
    SetDurationMode {
        /// The new mode.
        mode: DurationMode,
    },
    /// Change the master window.
    SetMasterWindow {
        /// The new master window.
        window: TimeWindow,
    },
    /// Change one selected date's window in per-date mode.
    SetDateWindow {
        /// The selected date.
        date: CalendarDate,
        /// The new window.
        window: TimeWindow,
    },
    /// Copy the preceding date's window within the same contiguous range.
    CopyFromPrevious {
        /// The selected date to overwrite.
        date: CalendarDate,
    },
}

impl Command {
    /// Returns the action name recorded in change signals.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ToggleDate { .. } => "ToggleDate",
            Self::AddDate { .. } => "AddDate",
            Self::RemoveDate { .. } => "RemoveDate",
            Self::SelectWeekdays { .. } => "SelectWeekdays",
            Self::SelectMonth { .. } => "SelectMonth",
            Self::ClearSelection => "ClearSelection",
            Self::SetDurationMode { .. } => "SetDurationMode",
            Self::SetMasterWindow { .. } => "SetMasterWindow",
            Self::SetDateWindow { .. } => "SetDateWindow",
            Self::CopyFromPrevious { .. } => "CopyFromPrevious",
        }
    }

    /// Returns the action details recorded in change signals.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::ToggleDate { date }
            | Self::AddDate { date }
            | Self::RemoveDate { date }
            | Self::CopyFromPrevious { date } => Some(date.to_string()),
            Self::SelectWeekdays { month } | Self::SelectMonth { month } => {
                Some(month.to_string())
            }
            Self::ClearSelection => None,
            Self::SetDurationMode { mode } => Some(mode.to_string()),
            Self::SetMasterWindow { window } => Some(window.to_string()),
            Self::SetDateWindow { date, window } => Some(format!("{date} {window}")),
        }
    }
}
