// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::wire::{PersistedAvailability, decode_wrapped, non_blank};
use availability::AvailabilitySnapshot;
use availability_signals::FormField;
use serde::{Deserialize, Serialize};

/// The string values the host form stores for each derived field.
///
/// `start_date` and `end_date` are plain `YYYY-MM-DD` strings.
/// `selected_dates` and `time_slots` hold JSON arrays. Every field is the
/// empty string when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldValues {
    /// First selected date.
    pub start_date: String,
    /// Last selected date.
    pub end_date: String,
    /// JSON array of selected dates.
    pub selected_dates: String,
    /// JSON array of time slots.
    pub time_slots: String,
}

impl FormFieldValues {
    /// Encodes a snapshot into form-field values.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists cannot be serialized.
    pub fn from_snapshot(snapshot: &AvailabilitySnapshot) -> Result<Self, PersistenceError> {
        if snapshot.is_empty() {
            return Ok(Self::default());
        }
        let document: PersistedAvailability = PersistedAvailability::from(snapshot);
        Ok(Self {
            start_date: document.start_date.unwrap_or_default(),
            end_date: document.end_date.unwrap_or_default(),
            selected_dates: serde_json::to_string(&document.selected_dates)?,
            time_slots: serde_json::to_string(&document.time_slots)?,
        })
    }

    /// Returns the stored value of `field`.
    #[must_use]
    pub fn value_of(&self, field: FormField) -> &str {
        match field {
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
            FormField::SelectedDates => &self.selected_dates,
            FormField::TimeSlots => &self.time_slots,
        }
    }

    /// Reads the values back into a persisted document.
    ///
    /// Blank values are absent and unparseable lists are treated as empty.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedAvailability {
        PersistedAvailability {
            start_date: non_blank(&self.start_date),
            end_date: non_blank(&self.end_date),
            selected_dates: decode_wrapped(&self.selected_dates),
            time_slots: decode_wrapped(&self.time_slots),
        }
    }
}
