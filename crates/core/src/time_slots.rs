// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-date time windows and the uniform/per-date duration modes.
//!
//! ## Invariants
//!
//! - The slot map's keys equal the selection once a transition settles
//! - In `Uniform` mode every slot equals the master window
//!
//! ## Destructive mode switch
//!
//! Switching to `Uniform` overwrites every slot with the master window.
//! Per-date customisations are lost and are not restored by switching back
//! to `PerDate`.

use crate::error::CoreError;
use crate::selection::SelectionDelta;
use availability_domain::{CalendarDate, DateRange, TimeWindow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How time windows are assigned to selected dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DurationMode {
    /// A single master window applies to every selected date.
    Uniform,
    /// Each selected date has its own editable window.
    #[default]
    PerDate,
}

impl DurationMode {
    /// Converts this mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::PerDate => "PerDate",
        }
    }

    /// Parses a mode name, accepting the display form and snake case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "Uniform" | "uniform" => Some(Self::Uniform),
            "PerDate" | "per_date" | "per-date" => Some(Self::PerDate),
            _ => None,
        }
    }
}

impl std::fmt::Display for DurationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the time window of every selected date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotManager {
    slots: BTreeMap<CalendarDate, TimeWindow>,
    mode: DurationMode,
    master: TimeWindow,
    default_window: TimeWindow,
}

impl TimeSlotManager {
    /// Creates an empty manager in `PerDate` mode.
    ///
    /// `default_window` seeds both the master window and the window given
    /// to dates selected in `PerDate` mode.
    #[must_use]
    pub const fn new(default_window: TimeWindow) -> Self {
        Self {
            slots: BTreeMap::new(),
            mode: DurationMode::PerDate,
            master: default_window,
            default_window,
        }
    }

    /// Brings the slot map back into correspondence with the selection.
    ///
    /// Removed dates lose their slot unconditionally. Added dates receive
    /// the master window in `Uniform` mode and the default window otherwise.
    pub fn sync(&mut self, delta: &SelectionDelta) {
        for date in &delta.removed {
            self.slots.remove(date);
        }
        let window: TimeWindow = self.window_for_new_date();
        for date in &delta.added {
            self.slots.insert(*date, window);
        }
    }

    /// Switches the duration mode.
    ///
    /// Switching to `Uniform` overwrites every slot with the master window,
    /// discarding per-date customisations.
    pub fn set_duration_mode(&mut self, mode: DurationMode) {
        self.mode = mode;
        if mode == DurationMode::Uniform {
            self.broadcast_master();
        }
    }

    /// Updates the master window, re-broadcasting it in `Uniform` mode.
    pub fn set_master_window(&mut self, window: TimeWindow) {
        self.master = window;
        if self.mode == DurationMode::Uniform {
            self.broadcast_master();
        }
    }

    /// Sets the window of one selected date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` in `Uniform` mode or when `date` is
    /// not selected.
    pub fn set_window_for_date(
        &mut self,
        date: CalendarDate,
        window: TimeWindow,
    ) -> Result<(), CoreError> {
        if self.mode == DurationMode::Uniform {
            return Err(CoreError::InvalidState {
                operation: "SetDateWindow",
                reason: String::from("per-date windows cannot be edited in uniform mode"),
            });
        }
        let slot: &mut TimeWindow =
            self.slots
                .get_mut(&date)
                .ok_or_else(|| CoreError::InvalidState {
                    operation: "SetDateWindow",
                    reason: format!("{date} is not selected"),
                })?;
        *slot = window;
        Ok(())
    }

    /// Copies the window of the date immediately preceding `date` in its
    /// contiguous range onto `date`.
    ///
    /// A no-op when `date` starts its range, and in `Uniform` mode where all
    /// windows are already equal. Returns whether the slot changed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` when `date` is not selected.
    pub fn copy_window_from_previous(
        &mut self,
        date: CalendarDate,
        ranges: &[DateRange],
    ) -> Result<bool, CoreError> {
        if !self.slots.contains_key(&date) {
            return Err(CoreError::InvalidState {
                operation: "CopyFromPrevious",
                reason: format!("{date} is not selected"),
            });
        }
        if self.mode == DurationMode::Uniform {
            return Ok(false);
        }

        let previous: Option<CalendarDate> = ranges
            .iter()
            .find(|range| range.contains(date))
            .and_then(|range| range.predecessor_of(date));
        let Some(source) = previous.and_then(|previous| self.slots.get(&previous).copied()) else {
            return Ok(false);
        };

        let changed: bool = self.slots.insert(date, source) != Some(source);
        Ok(changed)
    }

    /// Replaces every slot, the mode and the master window at once.
    pub(crate) fn restore(
        &mut self,
        slots: BTreeMap<CalendarDate, TimeWindow>,
        mode: DurationMode,
        master: TimeWindow,
    ) {
        self.slots = slots;
        self.mode = mode;
        self.master = master;
    }

    /// Returns the window of `date`, if selected.
    #[must_use]
    pub fn window_for(&self, date: CalendarDate) -> Option<TimeWindow> {
        self.slots.get(&date).copied()
    }

    /// Returns every slot in date order.
    pub fn slots(&self) -> impl Iterator<Item = (CalendarDate, TimeWindow)> + '_ {
        self.slots.iter().map(|(date, window)| (*date, *window))
    }

    /// Returns the dates that carry a slot, ascending.
    #[must_use]
    pub fn dates(&self) -> Vec<CalendarDate> {
        self.slots.keys().copied().collect()
    }

    /// Returns the current duration mode.
    #[must_use]
    pub const fn mode(&self) -> DurationMode {
        self.mode
    }

    /// Returns the master window.
    #[must_use]
    pub const fn master_window(&self) -> TimeWindow {
        self.master
    }

    /// Returns the window given to dates selected in `PerDate` mode.
    #[must_use]
    pub const fn default_window(&self) -> TimeWindow {
        self.default_window
    }

    const fn window_for_new_date(&self) -> TimeWindow {
        match self.mode {
            DurationMode::Uniform => self.master,
            DurationMode::PerDate => self.default_window,
        }
    }

    fn broadcast_master(&mut self) {
        let master: TimeWindow = self.master;
        for window in self.slots.values_mut() {
            *window = master;
        }
    }
}
