// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::address::SuggestionError;
use availability::CoreError;
use availability_domain::DomainError;
use availability_persistence::PersistenceError;

/// Field name used when an error belongs to the command rather than one input.
pub const COMMAND_FIELD: &str = "command";

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request is not permitted in the scheduler's current state.
    InvalidState {
        /// The operation that was attempted.
        operation: String,
        /// A human-readable description of why it was refused.
        message: String,
    },
    /// A stored document could not be read or written.
    StorageFormat {
        /// A human-readable description of the problem.
        message: String,
    },
    /// The address suggestion service failed.
    SuggestionFailed {
        /// A human-readable description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidState { operation, message } => {
                write!(f, "Cannot {operation}: {message}")
            }
            Self::StorageFormat { message } => write!(f, "Storage format error: {message}"),
            Self::SuggestionFailed { message } => {
                write!(f, "Address suggestions unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::StorageFormat {
            message: err.to_string(),
        }
    }
}

impl From<SuggestionError> for ApiError {
    fn from(err: SuggestionError) -> Self {
        Self::SuggestionFailed {
            message: err.to_string(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a domain error into an API error naming the offending field.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(field: &str, err: DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
/// Core errors do not say which request field was at fault, so domain
/// violations are reported against the command as a whole.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(COMMAND_FIELD, domain_err),
        CoreError::InvalidState { operation, reason } => ApiError::InvalidState {
            operation: operation.to_string(),
            message: reason,
        },
    }
}
