// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The JSON document stored for a contract's availability.
//!
//! Writing is strict: dates are `YYYY-MM-DD`, times `HH:MM`, lists are JSON
//! arrays and an empty range is written as empty strings. Reading is lenient
//! because stored documents come from several generations of the form:
//!
//! - `selected_dates` and `time_slots` may be arrays or strings holding arrays
//! - an empty string, `null` or a missing key means "none"
//! - a wrapped string that does not parse is treated as absent and logged
//! - list elements are read one by one, so a bad element never costs its
//!   neighbours: a non-string date keeps its JSON text, and a slot missing a
//!   field keeps that field blank
//!
//! Entry-level validation (malformed dates, holidays, orphaned slots) is the
//! scheduler's job during hydration, not this layer's. Bad elements reach it
//! unchanged and are reported as corrections there.

use crate::error::PersistenceError;
use availability::{AvailabilitySnapshot, RawTimeSlot, SnapshotInput};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A persisted availability document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedAvailability {
    /// First selected date, absent for an empty selection.
    #[serde(
        default,
        deserialize_with = "lenient_date",
        serialize_with = "date_or_empty"
    )]
    pub start_date: Option<String>,
    /// Last selected date, absent for an empty selection.
    #[serde(
        default,
        deserialize_with = "lenient_date",
        serialize_with = "date_or_empty"
    )]
    pub end_date: Option<String>,
    /// Every selected date.
    #[serde(default, deserialize_with = "lenient_list")]
    pub selected_dates: Vec<String>,
    /// One window per selected date.
    #[serde(default, deserialize_with = "lenient_list")]
    pub time_slots: Vec<RawTimeSlot>,
}

impl PersistedAvailability {
    /// Parses a stored document.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::MalformedDocument` if `json` is not a JSON
    /// object of the expected shape.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let document: Self = serde_json::from_str(json)
            .map_err(|err| PersistenceError::MalformedDocument(err.to_string()))?;
        debug!(
            selected = document.selected_dates.len(),
            slots = document.time_slots.len(),
            "Decoded persisted availability"
        );
        Ok(document)
    }

    /// Serializes the document compactly.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the document with indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns whether the document carries no selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_dates.is_empty()
    }
}

impl From<&AvailabilitySnapshot> for PersistedAvailability {
    fn from(snapshot: &AvailabilitySnapshot) -> Self {
        let input: SnapshotInput = SnapshotInput::from(snapshot);
        Self {
            start_date: input.start_date,
            end_date: input.end_date,
            selected_dates: input.selected_dates,
            time_slots: input.time_slots,
        }
    }
}

impl From<PersistedAvailability> for SnapshotInput {
    fn from(document: PersistedAvailability) -> Self {
        Self {
            start_date: document.start_date,
            end_date: document.end_date,
            selected_dates: document.selected_dates,
            time_slots: document.time_slots,
        }
    }
}

/// Serializes a snapshot into its stored JSON form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(snapshot: &AvailabilitySnapshot) -> Result<String, PersistenceError> {
    PersistedAvailability::from(snapshot).to_json()
}

/// Parses a stored JSON document into scheduler input.
///
/// # Errors
///
/// Returns `PersistenceError::MalformedDocument` if `json` is not a JSON
/// object of the expected shape.
pub fn decode(json: &str) -> Result<SnapshotInput, PersistenceError> {
    PersistedAvailability::from_json(json).map(SnapshotInput::from)
}

/// Parses a string holding a JSON array, treating blank or unparseable
/// text as an empty list.
pub(crate) fn decode_wrapped<T: StoredEntry>(text: &str) -> Vec<T> {
    let trimmed: &str = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => entries(items),
        Ok(other) => {
            warn!(found = %other, "Ignoring wrapped list that is not an array");
            Vec::new()
        }
        Err(err) => {
            warn!(error = %err, "Ignoring unparseable wrapped list");
            Vec::new()
        }
    }
}

/// A list element read from a stored document without rejecting it.
pub(crate) trait StoredEntry {
    /// Converts one stored JSON element.
    fn from_stored(value: Value) -> Self;
}

impl StoredEntry for String {
    fn from_stored(value: Value) -> Self {
        match value {
            Value::String(text) => text,
            other => {
                warn!(entry = %other, "Keeping non-string list entry as text");
                other.to_string()
            }
        }
    }
}

impl StoredEntry for RawTimeSlot {
    fn from_stored(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                date: slot_field(&mut fields, "date"),
                start_time: slot_field(&mut fields, "start_time"),
                end_time: slot_field(&mut fields, "end_time"),
            },
            other => {
                warn!(entry = %other, "Keeping non-object time slot as its date");
                Self {
                    date: other.to_string(),
                    ..Self::default()
                }
            }
        }
    }
}

fn slot_field(fields: &mut Map<String, Value>, key: &str) -> String {
    match fields.remove(key) {
        None | Some(Value::Null) => String::new(),
        Some(value) => String::from_stored(value),
    }
}

fn entries<T: StoredEntry>(items: Vec<Value>) -> Vec<T> {
    items.into_iter().map(T::from_stored).collect()
}

/// Treats a blank date string as absent.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: StoredEntry,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => entries(items),
        Value::String(text) => decode_wrapped(&text),
        other => {
            warn!(found = %other, "Ignoring list field that is neither an array nor a string");
            Vec::new()
        }
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => non_blank(&text),
        Value::Null => None,
        other => {
            warn!(found = %other, "Ignoring range bound that is not a string");
            None
        }
    })
}

#[allow(clippy::ref_option)]
fn date_or_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}
