// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::config::MAX_GENERATED_RANGE_DAYS;
use crate::error::CoreError;
use crate::snapshot::{AvailabilitySnapshot, SnapshotInput};
use crate::state::{AvailabilityState, HydrationReport, HydrationResult, TransitionResult};
use crate::time_slots::DurationMode;
use availability_domain::{CalendarDate, HolidayCalendar, TimeWindow, group_consecutive};
use availability_signals::{
    Action, ChangeOrigin, ChangeSignal, FieldUpdate, FormField, SelectionSummary,
};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Applies a command to the current state, producing a new state and signal.
///
/// The selection change and the slot map re-sync happen inside the same
/// call, so the returned state always satisfies the selection/slot
/// correspondence.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `calendar` - Holidays that may never be selected
/// * `command` - The command to apply
/// * `origin` - Whether the change is interactive or load-caused
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and change signal
/// * `Err(CoreError)` if the command is invalid for the current state
///
/// # Errors
///
/// Returns an error if:
/// - A per-date window is edited in uniform mode
/// - A per-date window or copy targets a date that is not selected
/// - A bulk selection names a month outside the supported date range
pub fn apply(
    state: &AvailabilityState,
    calendar: &HolidayCalendar,
    command: Command,
    origin: ChangeOrigin,
) -> Result<TransitionResult, CoreError> {
    let mut new_state: AvailabilityState = state.clone();

    match command {
        Command::ToggleDate { date } => {
            if calendar.is_holiday(date) {
                debug!(%date, "Ignoring toggle of holiday");
            }
            let delta = new_state.selection.toggle(calendar, date);
            new_state.settle_selection(&delta);
        }
        Command::AddDate { date } => {
            if calendar.is_holiday(date) {
                debug!(%date, "Ignoring selection of holiday");
            }
            let delta = new_state.selection.add(calendar, date);
            new_state.settle_selection(&delta);
        }
        Command::RemoveDate { date } => {
            let delta = new_state.selection.remove(date);
            new_state.settle_selection(&delta);
        }
        Command::SelectWeekdays { month } => {
            let delta = new_state
                .selection
                .select_weekdays_in_month(calendar, month)?;
            debug!(%month, added = delta.added.len(), "Selected weekdays in month");
            new_state.settle_selection(&delta);
        }
        Command::SelectMonth { month } => {
            let delta = new_state.selection.select_entire_month(calendar, month)?;
            debug!(%month, added = delta.added.len(), "Selected entire month");
            new_state.settle_selection(&delta);
        }
        Command::ClearSelection => {
            let delta = new_state.selection.clear();
            new_state.settle_selection(&delta);
        }
        Command::SetDurationMode { mode } => {
            new_state.slots.set_duration_mode(mode);
        }
        Command::SetMasterWindow { window } => {
            new_state.slots.set_master_window(window);
        }
        Command::SetDateWindow { date, window } => {
            new_state.slots.set_window_for_date(date, window)?;
        }
        Command::CopyFromPrevious { date } => {
            let ranges = group_consecutive(&new_state.selection.sorted_dates());
            new_state.slots.copy_window_from_previous(date, &ranges)?;
        }
    }

    let action: Action = Action::new(command.name().to_string(), command.details());
    let signal: ChangeSignal = build_signal(state, &new_state, action, origin);

    debug!(
        action = command.name(),
        %origin,
        before = %signal.before.data,
        after = %signal.after.data,
        changed_fields = signal.updates.len(),
        "Applied scheduler command"
    );

    Ok(TransitionResult { new_state, signal })
}

/// Replaces the state with persisted data.
///
/// Never fails: malformed dates, holidays, duplicates and slots that do not
/// match a selected date are dropped and recorded in the report. Selected
/// dates without a usable slot receive the default window.
///
/// When the input carries no selected dates but both `start_date` and
/// `end_date` parse, the selection becomes every non-holiday date in that
/// inclusive range.
///
/// After loading, if two or more dates are selected and every window is
/// equal, the scheduler switches to `Uniform` with that window as master.
/// Otherwise it is `PerDate` with the default master window. This restores
/// the mode the user most likely intended; persisted data carries no mode.
#[must_use]
pub fn hydrate(
    state: &AvailabilityState,
    calendar: &HolidayCalendar,
    input: &SnapshotInput,
) -> HydrationResult {
    let mut report: HydrationReport = HydrationReport::default();
    let default_window: TimeWindow = state.slots.default_window();

    let mut dates: BTreeSet<CalendarDate> = parse_selected_dates(calendar, input, &mut report);
    if input.selected_dates.is_empty() {
        if let Some(generated) = dates_from_range(calendar, input, &mut report) {
            report.generated_from_range = true;
            dates = generated;
        }
    }

    let mut new_state: AvailabilityState = state.clone();
    new_state.selection.replace(calendar, dates);

    let mut slots: BTreeMap<CalendarDate, TimeWindow> = BTreeMap::new();
    for raw in &input.time_slots {
        let date: CalendarDate = match CalendarDate::parse(&raw.date) {
            Ok(date) => date,
            Err(err) => {
                warn!(entry = raw.date.as_str(), error = %err, "Dropping time slot with malformed date");
                report.dropped_slots.push(raw.date.clone());
                continue;
            }
        };
        if !new_state.selection.contains(date) {
            warn!(%date, "Dropping time slot for unselected date");
            report.dropped_slots.push(raw.date.clone());
            continue;
        }
        match TimeWindow::parse(&raw.start_time, &raw.end_time) {
            Ok(window) => {
                slots.insert(date, window);
            }
            Err(err) => {
                warn!(%date, error = %err, "Dropping time slot with malformed window");
                report.dropped_slots.push(raw.date.clone());
            }
        }
    }

    for date in new_state.selection.sorted_dates() {
        if let Entry::Vacant(entry) = slots.entry(date) {
            entry.insert(default_window);
            report.defaulted_slots.push(date);
        }
    }

    let (mode, master) = detect_duration_mode(&slots, default_window);
    new_state.slots.restore(slots, mode, master);

    let action: Action = Action::new(
        String::from("LoadSnapshot"),
        Some(format!(
            "Loaded {} dates ({} corrected)",
            new_state.selection.len(),
            correction_count(&report)
        )),
    );
    let signal: ChangeSignal = build_signal(state, &new_state, action, ChangeOrigin::Load);

    info!(
        selected = new_state.selection.len(),
        %mode,
        from_range = report.generated_from_range,
        clean = report.is_clean(),
        "Hydrated scheduler from persisted snapshot"
    );

    HydrationResult {
        new_state,
        signal,
        report,
    }
}

fn parse_selected_dates(
    calendar: &HolidayCalendar,
    input: &SnapshotInput,
    report: &mut HydrationReport,
) -> BTreeSet<CalendarDate> {
    let mut dates: BTreeSet<CalendarDate> = BTreeSet::new();
    for raw in &input.selected_dates {
        match CalendarDate::parse(raw) {
            Err(err) => {
                warn!(entry = raw.as_str(), error = %err, "Dropping malformed selected date");
                report.malformed_dates.push(raw.clone());
            }
            Ok(date) if calendar.is_holiday(date) => {
                warn!(%date, holiday = calendar.name_of(date), "Dropping selected holiday");
                report.holiday_dates.push(date);
            }
            Ok(date) => {
                if !dates.insert(date) {
                    report.duplicate_dates += 1;
                }
            }
        }
    }
    dates
}

fn dates_from_range(
    calendar: &HolidayCalendar,
    input: &SnapshotInput,
    report: &mut HydrationReport,
) -> Option<BTreeSet<CalendarDate>> {
    let start: CalendarDate = parse_bound(input.start_date.as_deref())?;
    let end: CalendarDate = parse_bound(input.end_date.as_deref())?;
    if start.days_until(end) >= MAX_GENERATED_RANGE_DAYS {
        warn!(%start, %end, max_days = MAX_GENERATED_RANGE_DAYS, "Ignoring oversized stored range");
        report.oversized_range = Some((start, end));
        return None;
    }
    Some(
        CalendarDate::inclusive_range(start, end)
            .into_iter()
            .filter(|date| !calendar.is_holiday(*date))
            .collect(),
    )
}

fn parse_bound(raw: Option<&str>) -> Option<CalendarDate> {
    let raw: &str = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match CalendarDate::parse(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(entry = raw, error = %err, "Ignoring malformed range bound");
            None
        }
    }
}

fn detect_duration_mode(
    slots: &BTreeMap<CalendarDate, TimeWindow>,
    default_window: TimeWindow,
) -> (DurationMode, TimeWindow) {
    let mut windows = slots.values();
    let Some(first) = windows.next().copied() else {
        return (DurationMode::PerDate, default_window);
    };
    if slots.len() >= 2 && windows.all(|window| *window == first) {
        (DurationMode::Uniform, first)
    } else {
        (DurationMode::PerDate, default_window)
    }
}

fn correction_count(report: &HydrationReport) -> usize {
    report.malformed_dates.len()
        + report.holiday_dates.len()
        + report.duplicate_dates
        + report.dropped_slots.len()
        + usize::from(report.oversized_range.is_some())
}

fn build_signal(
    before_state: &AvailabilityState,
    after_state: &AvailabilityState,
    action: Action,
    origin: ChangeOrigin,
) -> ChangeSignal {
    let before: SelectionSummary = before_state.summary();
    let after: SelectionSummary = after_state.summary();
    let updates: Vec<FieldUpdate> = field_updates(
        &before_state.to_snapshot(),
        &after_state.to_snapshot(),
        origin,
    );
    ChangeSignal::new(action, origin, before, after, updates)
}

/// Lists the derived fields whose persisted value differs between two snapshots.
fn field_updates(
    before: &AvailabilitySnapshot,
    after: &AvailabilitySnapshot,
    origin: ChangeOrigin,
) -> Vec<FieldUpdate> {
    let selection_empty: bool = after.is_empty();
    FormField::ALL
        .into_iter()
        .filter(|field| match field {
            FormField::StartDate => before.start_date != after.start_date,
            FormField::EndDate => before.end_date != after.end_date,
            FormField::SelectedDates => before.selected_dates != after.selected_dates,
            FormField::TimeSlots => before.time_slots != after.time_slots,
        })
        .map(|field| FieldUpdate::for_change(field, origin, selection_empty))
        .collect()
}
