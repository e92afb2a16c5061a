// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain values for contract availability scheduling.
//!
//! Everything here is immutable and free of scheduling state: calendar dates
//! and months, times of day and their windows, the holiday calendar that
//! blocks dates from selection, and the grouping of dates into contiguous
//! ranges for display.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar_date;
mod date_range;
mod error;
mod holiday;
mod time_window;

#[cfg(test)]
mod tests;

pub use calendar_date::{CalendarDate, YearMonth};
pub use date_range::{DateRange, group_consecutive};
pub use error::DomainError;
pub use holiday::{Holiday, HolidayCalendar};
pub use time_window::{TimeOfDay, TimeWindow};
