// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The set of selected working dates.
//!
//! ## Invariants
//!
//! - The selection never contains a holiday
//! - `sorted_dates()` is strictly ascending with no duplicates
//!
//! Every mutation reports the dates it actually added and removed so the
//! time slot map can be brought back into correspondence before the
//! enclosing transition returns.

use availability_domain::{CalendarDate, DomainError, HolidayCalendar, YearMonth};
use std::collections::BTreeSet;

/// The dates a mutation added to and removed from the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    /// Newly selected dates, ascending.
    pub added: Vec<CalendarDate>,
    /// Deselected dates, ascending.
    pub removed: Vec<CalendarDate>,
}

impl SelectionDelta {
    /// Returns whether the mutation changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The selected working dates of one contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSelectionSet {
    dates: BTreeSet<CalendarDate>,
}

impl DateSelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dates: BTreeSet::new(),
        }
    }

    /// Flips membership of `date`.
    ///
    /// Holidays are silently rejected: the selection never gains one.
    pub fn toggle(&mut self, calendar: &HolidayCalendar, date: CalendarDate) -> SelectionDelta {
        if self.dates.remove(&date) {
            return SelectionDelta {
                added: Vec::new(),
                removed: vec![date],
            };
        }
        self.add(calendar, date)
    }

    /// Selects `date`. A no-op for holidays and already selected dates.
    pub fn add(&mut self, calendar: &HolidayCalendar, date: CalendarDate) -> SelectionDelta {
        if calendar.is_holiday(date) || !self.dates.insert(date) {
            return SelectionDelta::default();
        }
        SelectionDelta {
            added: vec![date],
            removed: Vec::new(),
        }
    }

    /// Deselects `date`. A no-op if it was not selected.
    pub fn remove(&mut self, date: CalendarDate) -> SelectionDelta {
        if !self.dates.remove(&date) {
            return SelectionDelta::default();
        }
        SelectionDelta {
            added: Vec::new(),
            removed: vec![date],
        }
    }

    /// Selects every Monday-Friday of `month` that is not a holiday.
    ///
    /// Idempotent: already selected dates are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn select_weekdays_in_month(
        &mut self,
        calendar: &HolidayCalendar,
        month: YearMonth,
    ) -> Result<SelectionDelta, DomainError> {
        let days: Vec<CalendarDate> = month.days()?;
        Ok(self.extend(calendar, days.into_iter().filter(CalendarDate::is_weekday)))
    }

    /// Selects every day of `month` that is not a holiday.
    ///
    /// Idempotent: already selected dates are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn select_entire_month(
        &mut self,
        calendar: &HolidayCalendar,
        month: YearMonth,
    ) -> Result<SelectionDelta, DomainError> {
        let days: Vec<CalendarDate> = month.days()?;
        Ok(self.extend(calendar, days))
    }

    /// Deselects everything.
    pub fn clear(&mut self) -> SelectionDelta {
        let removed: Vec<CalendarDate> = std::mem::take(&mut self.dates).into_iter().collect();
        SelectionDelta {
            added: Vec::new(),
            removed,
        }
    }

    /// Replaces the whole selection, dropping holidays and duplicates.
    pub fn replace(
        &mut self,
        calendar: &HolidayCalendar,
        dates: impl IntoIterator<Item = CalendarDate>,
    ) -> SelectionDelta {
        let next: BTreeSet<CalendarDate> = dates
            .into_iter()
            .filter(|date| !calendar.is_holiday(*date))
            .collect();
        let delta: SelectionDelta = SelectionDelta {
            added: next.difference(&self.dates).copied().collect(),
            removed: self.dates.difference(&next).copied().collect(),
        };
        self.dates = next;
        delta
    }

    /// The canonical read view: every selected date, ascending.
    #[must_use]
    pub fn sorted_dates(&self) -> Vec<CalendarDate> {
        self.dates.iter().copied().collect()
    }

    /// Returns whether `date` is selected.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the earliest selected date.
    #[must_use]
    pub fn first(&self) -> Option<CalendarDate> {
        self.dates.first().copied()
    }

    /// Returns the latest selected date.
    #[must_use]
    pub fn last(&self) -> Option<CalendarDate> {
        self.dates.last().copied()
    }

    /// Returns the number of selected dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    fn extend(
        &mut self,
        calendar: &HolidayCalendar,
        candidates: impl IntoIterator<Item = CalendarDate>,
    ) -> SelectionDelta {
        let added: Vec<CalendarDate> = candidates
            .into_iter()
            .filter(|date| !calendar.is_holiday(*date))
            .filter(|date| self.dates.insert(*date))
            .collect();
        SelectionDelta {
            added,
            removed: Vec::new(),
        }
    }
}
