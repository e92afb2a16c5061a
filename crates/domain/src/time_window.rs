// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Times of day and the start/end windows assigned to selected dates.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::{format_description, time};

const HOUR_MINUTE: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// A wall-clock time of day with minute precision, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Time);

impl TimeOfDay {
    /// Wraps an existing `time::Time`, truncating seconds.
    #[must_use]
    pub const fn new(time: Time) -> Self {
        match Time::from_hms(time.hour(), time.minute(), 0) {
            Ok(truncated) => Self(truncated),
            Err(_) => Self(time),
        }
    }

    /// Creates a time of day from hour and minute.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if either component is out of range.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        Time::from_hms(hour, minute, 0)
            .map(Self)
            .map_err(|err| DomainError::InvalidTime {
                input: format!("{hour:02}:{minute:02}"),
                reason: err.to_string(),
            })
    }

    /// Parses an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the string is not a valid `HH:MM` time.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Time::parse(input.trim(), HOUR_MINUTE)
            .map(Self)
            .map_err(|err| DomainError::InvalidTime {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns the underlying `time::Time`.
    #[must_use]
    pub const fn time(&self) -> Time {
        self.0
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A start/end pair of times assigned to one selected date.
///
/// No ordering is enforced between `start` and `end`; rejecting inverted
/// windows is left to the caller's validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// When work starts.
    #[serde(rename = "start_time")]
    pub start: TimeOfDay,
    /// When work ends.
    #[serde(rename = "end_time")]
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// The window given to a newly selected date: 09:00 to 17:00.
    pub const DEFAULT: Self = Self {
        start: TimeOfDay(time!(9:00)),
        end: TimeOfDay(time!(17:00)),
    };

    /// Creates a new `TimeWindow`.
    #[must_use]
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parses a window from two `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if either string is malformed.
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Ok(Self {
            start: TimeOfDay::parse(start)?,
            end: TimeOfDay::parse(end)?,
        })
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
