// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::selection::{DateSelectionSet, SelectionDelta};
use crate::snapshot::{AvailabilitySnapshot, TimeSlot};
use crate::time_slots::TimeSlotManager;
use availability_domain::{CalendarDate, TimeWindow};
use availability_signals::{ChangeSignal, SelectionSummary};

/// The complete scheduler state for one contract-editing session.
///
/// The selection and the slot map are only ever mutated together, through
/// `apply` or `hydrate`, so their keys agree whenever the state is observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityState {
    /// The selected working dates.
    pub selection: DateSelectionSet,
    /// The time window of every selected date.
    pub slots: TimeSlotManager,
}

impl AvailabilityState {
    /// Creates an empty state whose new dates default to `default_window`.
    #[must_use]
    pub const fn new(default_window: TimeWindow) -> Self {
        Self {
            selection: DateSelectionSet::new(),
            slots: TimeSlotManager::new(default_window),
        }
    }

    /// Applies a selection change and re-syncs the slot map.
    pub(crate) fn settle_selection(&mut self, delta: &SelectionDelta) {
        self.slots.sync(delta);
    }

    /// Returns whether the slot map covers exactly the selection.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.selection.sorted_dates() == self.slots.dates()
    }

    /// Builds the persistable snapshot.
    ///
    /// Repeated calls without an intervening mutation return equal values.
    #[must_use]
    pub fn to_snapshot(&self) -> AvailabilitySnapshot {
        let selected_dates: Vec<CalendarDate> = self.selection.sorted_dates();
        let time_slots: Vec<TimeSlot> = selected_dates
            .iter()
            .map(|date| {
                let window: TimeWindow = self
                    .slots
                    .window_for(*date)
                    .unwrap_or_else(|| self.slots.default_window());
                TimeSlot::new(*date, window)
            })
            .collect();

        AvailabilitySnapshot {
            start_date: selected_dates.first().copied(),
            end_date: selected_dates.last().copied(),
            selected_dates,
            time_slots,
        }
    }

    /// Summarises the state for change signals and logs.
    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        let start: String = self
            .selection
            .first()
            .map_or_else(|| String::from("none"), |date| date.to_string());
        let end: String = self
            .selection
            .last()
            .map_or_else(|| String::from("none"), |date| date.to_string());
        SelectionSummary::new(format!(
            "selected={},start={start},end={end},mode={}",
            self.selection.len(),
            self.slots.mode()
        ))
    }
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: AvailabilityState,
    /// The signal describing this transition.
    pub signal: ChangeSignal,
}

/// What a hydration dropped or filled in while loading persisted data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Selected-date entries that did not parse.
    pub malformed_dates: Vec<String>,
    /// Selected dates dropped because they are holidays.
    pub holiday_dates: Vec<CalendarDate>,
    /// Number of repeated selected-date entries collapsed.
    pub duplicate_dates: usize,
    /// Slot entries dropped as malformed or not matching a selected date.
    pub dropped_slots: Vec<String>,
    /// Selected dates that had no usable slot and received the default window.
    pub defaulted_slots: Vec<CalendarDate>,
    /// Whether the selection was generated from `start_date`/`end_date`.
    pub generated_from_range: bool,
    /// A stored start/end range too long to generate a selection from.
    pub oversized_range: Option<(CalendarDate, CalendarDate)>,
}

impl HydrationReport {
    /// Returns whether the persisted data loaded without any correction.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.malformed_dates.is_empty()
            && self.holiday_dates.is_empty()
            && self.duplicate_dates == 0
            && self.dropped_slots.is_empty()
            && self.defaulted_slots.is_empty()
            && self.oversized_range.is_none()
    }
}

/// The result of loading persisted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydrationResult {
    /// The state after the load.
    pub new_state: AvailabilityState,
    /// The signal describing the load.
    pub signal: ChangeSignal,
    /// Corrections made while loading.
    pub report: HydrationReport,
}
