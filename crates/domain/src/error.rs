// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A calendar date could not be parsed or constructed.
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// A calendar month could not be parsed or constructed.
    InvalidMonth {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// A time of day could not be parsed or constructed.
    InvalidTime {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { input, reason } => {
                write!(f, "Invalid date '{input}': {reason}")
            }
            Self::InvalidMonth { input, reason } => {
                write!(f, "Invalid month '{input}': {reason}")
            }
            Self::InvalidTime { input, reason } => {
                write!(f, "Invalid time '{input}': {reason}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
