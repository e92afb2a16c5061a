// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timezone-naive calendar dates and months.
//!
//! A `CalendarDate` is a plain `(year, month, day)` value. It never passes
//! through a UTC instant, so `2025-06-02` stays `2025-06-02` regardless of the
//! host's local offset. The canonical textual form is ISO `YYYY-MM-DD`.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, Weekday};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar date without time or timezone.
///
/// Equality and ordering are by calendar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Wraps an existing `time::Date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Creates a date from its calendar components.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the components do not name a real day.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let input: String = format!("{year:04}-{month:02}-{day:02}");
        let month: Month = Month::try_from(month).map_err(|err| DomainError::InvalidDate {
            input: input.clone(),
            reason: err.to_string(),
        })?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|err| DomainError::InvalidDate {
                input,
                reason: err.to_string(),
            })
    }

    /// Parses an ISO `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the string is not a valid ISO date.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Date::parse(input.trim(), ISO_DATE)
            .map(Self)
            .map_err(|err| DomainError::InvalidDate {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns the underlying `time::Date`.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.0.month()
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.0.day()
    }

    /// Returns the weekday.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns whether this date falls Monday through Friday.
    #[must_use]
    pub const fn is_weekday(&self) -> bool {
        !matches!(self.0.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns the month this date belongs to.
    #[must_use]
    pub const fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.0.year(),
            month: self.0.month(),
        }
    }

    /// Returns the following calendar day, or `None` at the end of the
    /// representable range.
    #[must_use]
    pub const fn next_day(&self) -> Option<Self> {
        match self.0.next_day() {
            Some(date) => Some(Self(date)),
            None => None,
        }
    }

    /// Returns the signed number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_until(&self, other: Self) -> i64 {
        (other.0 - self.0).whole_days()
    }

    /// Renders the date the way the scheduling forms display it, e.g. `Jun 2, 2025`.
    #[must_use]
    pub fn display_label(&self) -> String {
        let index: usize = usize::from(u8::from(self.0.month())) - 1;
        format!(
            "{} {}, {}",
            MONTH_ABBREVIATIONS[index],
            self.0.day(),
            self.0.year()
        )
    }

    /// Returns every date from `start` through `end`, inclusive.
    ///
    /// A reversed range is empty.
    #[must_use]
    pub fn inclusive_range(start: Self, end: Self) -> Vec<Self> {
        let mut dates: Vec<Self> = Vec::new();
        let mut current: Option<Self> = Some(start);
        while let Some(date) = current {
            if date > end {
                break;
            }
            dates.push(date);
            current = date.next_day();
        }
        dates
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A calendar month, the unit the bulk selection operations work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Parses a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if the string is malformed or the
    /// month number is out of range.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidMonth {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (year_part, month_part) = input
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid("expected YYYY-MM"))?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid("expected YYYY-MM"));
        }
        let year: i32 = year_part
            .parse()
            .map_err(|_| invalid("year is not a number"))?;
        let month_number: u8 = month_part
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        let month: Month =
            Month::try_from(month_number).map_err(|err| invalid(&err.to_string()))?;

        // Rejects years outside the supported date range.
        Date::from_calendar_date(year, month, 1).map_err(|err| invalid(&err.to_string()))?;

        Ok(Self { year, month })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns whether `date` falls within this month.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns every date of the month in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the month lies outside
    /// the supported date range.
    pub fn days(&self) -> Result<Vec<CalendarDate>, DomainError> {
        let first: Date = Date::from_calendar_date(self.year, self.month, 1).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: format!("enumerating the days of {self}"),
            }
        })?;

        let mut days: Vec<CalendarDate> = Vec::with_capacity(31);
        let mut current: Option<Date> = Some(first);
        while let Some(date) = current {
            if date.month() != self.month {
                break;
            }
            days.push(CalendarDate(date));
            current = date.next_day();
        }
        Ok(days)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
