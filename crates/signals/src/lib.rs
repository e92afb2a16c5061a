// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change signals surfaced to the form that hosts the scheduler.
//!
//! Every successful scheduler mutation produces exactly one `ChangeSignal`.
//! A signal records what was done, whether the user or a snapshot load
//! caused it, a summary of the selection before and after, and which derived
//! form fields changed. Each changed field carries the validate/dirty flags
//! the host should pass along when it writes the new value.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::Serialize;

/// Who caused a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeOrigin {
    /// An interactive edit.
    User,
    /// Hydration from a persisted snapshot, or a cascade it triggered.
    Load,
}

impl ChangeOrigin {
    /// Returns the string representation of this origin.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Load => "load",
        }
    }
}

impl std::fmt::Display for ChangeOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The derived form fields the scheduler keeps up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Earliest selected date.
    StartDate,
    /// Latest selected date.
    EndDate,
    /// The sorted selection.
    SelectedDates,
    /// Per-date time windows.
    TimeSlots,
}

impl FormField {
    /// Every derived field, in the order hosts write them.
    pub const ALL: [Self; 4] = [
        Self::StartDate,
        Self::EndDate,
        Self::SelectedDates,
        Self::TimeSlots,
    ];

    /// Returns the persisted field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::SelectedDates => "selected_dates",
            Self::TimeSlots => "time_slots",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived field whose value changed, and how the host should record it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    /// The field that changed.
    pub field: FormField,
    /// Whether the host should run validation for the field.
    pub should_validate: bool,
    /// Whether the host should mark the form dirty.
    pub should_dirty: bool,
}

impl FieldUpdate {
    /// Derives the flags for a change to `field`.
    ///
    /// Load-caused changes never validate or dirty. For user changes:
    /// - `start_date`/`end_date` validate and dirty unless the selection is empty
    /// - `selected_dates` never validates and dirties unless the selection is empty
    /// - `time_slots` never validates and always dirties
    #[must_use]
    pub const fn for_change(field: FormField, origin: ChangeOrigin, selection_empty: bool) -> Self {
        let interactive: bool = matches!(origin, ChangeOrigin::User);
        let (should_validate, should_dirty) = match field {
            FormField::StartDate | FormField::EndDate => {
                let flag: bool = interactive && !selection_empty;
                (flag, flag)
            }
            FormField::SelectedDates => (false, interactive && !selection_empty),
            FormField::TimeSlots => (false, interactive),
        };
        Self {
            field,
            should_validate,
            should_dirty,
        }
    }
}

/// Describes the mutation that was performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// The name of the action (e.g., "`ToggleDate`", "`SetMasterWindow`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact textual summary of scheduler state, used for before/after
/// comparison in signals and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSummary {
    /// e.g. `selected=2,start=2025-11-10,end=2025-11-12,mode=PerDate`.
    pub data: String,
}

impl SelectionSummary {
    /// Creates a new `SelectionSummary`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// The record of one settled scheduler mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeSignal {
    /// What was done.
    pub action: Action,
    /// Who caused it.
    pub origin: ChangeOrigin,
    /// State before the mutation.
    pub before: SelectionSummary,
    /// State after the mutation.
    pub after: SelectionSummary,
    /// Derived fields whose values changed, in `FormField::ALL` order.
    pub updates: Vec<FieldUpdate>,
}

impl ChangeSignal {
    /// Creates a new `ChangeSignal`.
    #[must_use]
    pub const fn new(
        action: Action,
        origin: ChangeOrigin,
        before: SelectionSummary,
        after: SelectionSummary,
        updates: Vec<FieldUpdate>,
    ) -> Self {
        Self {
            action,
            origin,
            before,
            after,
            updates,
        }
    }

    /// Returns whether any derived field changed.
    #[must_use]
    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }

    /// Returns whether the host should mark the form dirty.
    #[must_use]
    pub fn marks_dirty(&self) -> bool {
        self.updates.iter().any(|update| update.should_dirty)
    }

    /// Returns the fields the host should validate.
    #[must_use]
    pub fn fields_to_validate(&self) -> Vec<FormField> {
        self.updates
            .iter()
            .filter(|update| update.should_validate)
            .map(|update| update.field)
            .collect()
    }

    /// Returns the update for `field`, if it changed.
    #[must_use]
    pub fn update_for(&self, field: FormField) -> Option<&FieldUpdate> {
        self.updates.iter().find(|update| update.field == field)
    }
}
