// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use availability_domain::DomainError;

/// Errors that can occur during scheduler transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The caller asked for an operation the current state does not permit.
    ///
    /// This is a caller-contract violation, such as editing a per-date
    /// window while the scheduler is in uniform mode.
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// Why the operation is not permitted.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidState { operation, reason } => {
                write!(f, "Invalid state for {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
