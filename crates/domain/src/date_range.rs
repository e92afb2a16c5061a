// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouping of selected dates into contiguous display ranges.
//!
//! ## Invariants
//!
//! - Every input date appears in exactly one range
//! - Dates inside a range are ascending and exactly one calendar day apart
//! - Ranges are ordered by their first date
//!
//! Grouping is used only for display and for locating a date's predecessor;
//! it never mutates anything.

use crate::calendar_date::CalendarDate;
use serde::Serialize;

/// A maximal run of calendar-consecutive dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateRange {
    dates: Vec<CalendarDate>,
}

impl DateRange {
    /// Returns the dates in this range, ascending.
    #[must_use]
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Returns the first date of the range.
    #[must_use]
    pub fn first(&self) -> Option<CalendarDate> {
        self.dates.first().copied()
    }

    /// Returns the last date of the range.
    #[must_use]
    pub fn last(&self) -> Option<CalendarDate> {
        self.dates.last().copied()
    }

    /// Returns the number of dates in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the range holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns whether `date` belongs to this range.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Returns the date immediately preceding `date` within this range.
    ///
    /// `None` if `date` is the first of the range or not in it.
    #[must_use]
    pub fn predecessor_of(&self, date: CalendarDate) -> Option<CalendarDate> {
        let index: usize = self.dates.binary_search(&date).ok()?;
        index.checked_sub(1).map(|previous| self.dates[previous])
    }

    /// Renders the range for display: a single date, or `first → last`.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) if first == last => first.display_label(),
            (Some(first), Some(last)) => {
                format!("{} → {}", first.display_label(), last.display_label())
            }
            _ => String::new(),
        }
    }
}

/// Groups dates into maximal runs of consecutive calendar days.
///
/// The input is sorted and de-duplicated first, so any slice is accepted.
/// An empty input yields no ranges.
#[must_use]
pub fn group_consecutive(dates: &[CalendarDate]) -> Vec<DateRange> {
    let mut sorted: Vec<CalendarDate> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges: Vec<DateRange> = Vec::new();
    let mut current: Vec<CalendarDate> = Vec::new();

    for date in sorted {
        let breaks_run: bool = current
            .last()
            .is_some_and(|previous| previous.days_until(date) != 1);
        if breaks_run {
            ranges.push(DateRange {
                dates: std::mem::take(&mut current),
            });
        }
        current.push(date);
    }

    if !current.is_empty() {
        ranges.push(DateRange { dates: current });
    }

    ranges
}
