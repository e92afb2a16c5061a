// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Statutory holiday calendars.
//!
//! A holiday calendar is supplied once when a scheduler is built and never
//! changes afterwards. Dates outside the populated span are simply not
//! holidays; callers are responsible for supplying a calendar wide enough for
//! the contracts they edit.

use crate::calendar_date::{CalendarDate, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::macros::date;

/// A named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The blocked date.
    pub date: CalendarDate,
    /// The holiday's display name.
    pub name: String,
}

impl Holiday {
    /// Creates a new `Holiday`.
    #[must_use]
    pub fn new(date: CalendarDate, name: &str) -> Self {
        Self {
            date,
            name: name.to_string(),
        }
    }
}

/// An immutable lookup set of blocked dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeMap<CalendarDate, String>,
}

impl HolidayCalendar {
    /// Creates a calendar with no holidays.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            holidays: BTreeMap::new(),
        }
    }

    /// Builds a calendar from named holidays.
    ///
    /// When the same date appears more than once, the last name wins.
    #[must_use]
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        Self {
            holidays: holidays
                .into_iter()
                .map(|holiday| (holiday.date, holiday.name))
                .collect(),
        }
    }

    /// The Canadian statutory holidays for 2025 and 2026.
    ///
    /// Includes the Quebec-only Saint-Jean-Baptiste Day and the Civic
    /// Holiday, which Quebec does not observe.
    #[must_use]
    pub fn canadian_statutory() -> Self {
        let table: [(time::Date, &str); 26] = [
            (date!(2025 - 01 - 01), "New Year's Day"),
            (date!(2025 - 04 - 18), "Good Friday"),
            (date!(2025 - 04 - 21), "Easter Monday"),
            (date!(2025 - 05 - 19), "Victoria Day"),
            (date!(2025 - 06 - 24), "Saint-Jean-Baptiste Day"),
            (date!(2025 - 07 - 01), "Canada Day"),
            (date!(2025 - 08 - 04), "Civic Holiday"),
            (date!(2025 - 09 - 01), "Labour Day"),
            (
                date!(2025 - 09 - 30),
                "National Day for Truth and Reconciliation",
            ),
            (date!(2025 - 10 - 13), "Thanksgiving Day"),
            (date!(2025 - 11 - 11), "Remembrance Day"),
            (date!(2025 - 12 - 25), "Christmas Day"),
            (date!(2025 - 12 - 26), "Boxing Day"),
            (date!(2026 - 01 - 01), "New Year's Day"),
            (date!(2026 - 04 - 03), "Good Friday"),
            (date!(2026 - 04 - 06), "Easter Monday"),
            (date!(2026 - 05 - 18), "Victoria Day"),
            (date!(2026 - 06 - 24), "Saint-Jean-Baptiste Day"),
            (date!(2026 - 07 - 01), "Canada Day"),
            (date!(2026 - 08 - 03), "Civic Holiday"),
            (date!(2026 - 09 - 07), "Labour Day"),
            (
                date!(2026 - 09 - 30),
                "National Day for Truth and Reconciliation",
            ),
            (date!(2026 - 10 - 12), "Thanksgiving Day"),
            (date!(2026 - 11 - 11), "Remembrance Day"),
            (date!(2026 - 12 - 25), "Christmas Day"),
            (date!(2026 - 12 - 26), "Boxing Day"),
        ];

        Self::new(
            table
                .into_iter()
                .map(|(day, name)| Holiday::new(CalendarDate::new(day), name)),
        )
    }

    /// Returns whether `date` is a blocked holiday.
    #[must_use]
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday's name, if `date` is a holiday.
    #[must_use]
    pub fn name_of(&self, date: CalendarDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Returns the holidays falling within `month`, in date order.
    #[must_use]
    pub fn holidays_in(&self, month: YearMonth) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter(|(date, _)| month.contains(**date))
            .map(|(date, name)| Holiday::new(*date, name))
            .collect()
    }

    /// Returns the first and last holiday dates, or `None` for an empty calendar.
    #[must_use]
    pub fn span(&self) -> Option<(CalendarDate, CalendarDate)> {
        let first: CalendarDate = *self.holidays.keys().next()?;
        let last: CalendarDate = *self.holidays.keys().next_back()?;
        Some((first, last))
    }

    /// Returns the number of holidays in the calendar.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns whether the calendar has no holidays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
