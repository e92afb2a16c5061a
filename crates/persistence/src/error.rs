// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while encoding or decoding persisted availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The snapshot could not be serialized.
    SerializationError(String),
    /// The persisted document is not valid JSON or has the wrong shape.
    MalformedDocument(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::MalformedDocument(msg) => write!(f, "Malformed persisted document: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
