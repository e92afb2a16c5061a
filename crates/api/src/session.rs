// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The string-typed boundary a form host drives.
//!
//! Every request arrives as the strings the form holds. This layer parses
//! them, translates failures into `ApiError`, runs the scheduler operation,
//! and answers with the derived field values the host must write back.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    ChangeResponse, HolidayView, LoadSummary, RangeView, ScheduleView, SlotView, WindowRequest,
};
use availability::{
    AvailabilitySnapshot, Clock, Command, DurationMode, HydrationReport, LoadOutcome,
    MAX_GENERATED_RANGE_DAYS, Scheduler, SchedulerConfig, SnapshotInput, SystemClock,
};
use availability_domain::{CalendarDate, DateRange, HolidayCalendar, TimeWindow, YearMonth};
use availability_persistence::{FormFieldValues, PersistedAvailability, decode};
use availability_signals::ChangeSignal;
use tracing::info;

/// One contract-editing session.
#[derive(Debug)]
pub struct SchedulerSession<C: Clock = SystemClock> {
    scheduler: Scheduler<C>,
}

impl SchedulerSession<SystemClock> {
    /// Opens a session for a new contract.
    #[must_use]
    pub fn open(calendar: HolidayCalendar, config: SchedulerConfig) -> Self {
        Self::open_with_clock(calendar, config, SystemClock)
    }

    /// Opens a session for a stored contract.
    ///
    /// # Errors
    ///
    /// Returns an error if `stored_json` is not a stored availability
    /// document. Bad entries inside a valid document are corrected, not
    /// rejected.
    pub fn open_stored(
        calendar: HolidayCalendar,
        config: SchedulerConfig,
        stored_json: &str,
    ) -> Result<(Self, LoadSummary), ApiError> {
        Self::open_stored_with_clock(calendar, config, SystemClock, stored_json)
    }
}

impl<C: Clock> SchedulerSession<C> {
    /// Opens a session for a new contract, driven by `clock`.
    #[must_use]
    pub fn open_with_clock(calendar: HolidayCalendar, config: SchedulerConfig, clock: C) -> Self {
        Self {
            scheduler: Scheduler::with_clock(calendar, config, clock),
        }
    }

    /// Opens a session for a stored contract, driven by `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if `stored_json` is not a stored availability document.
    pub fn open_stored_with_clock(
        calendar: HolidayCalendar,
        config: SchedulerConfig,
        clock: C,
        stored_json: &str,
    ) -> Result<(Self, LoadSummary), ApiError> {
        let input: SnapshotInput = decode(stored_json)?;
        let (scheduler, report): (Scheduler<C>, HydrationReport) =
            Scheduler::from_snapshot_with_clock(calendar, config, clock, &input);
        let session: Self = Self { scheduler };
        let summary: LoadSummary = session.load_summary(&report);
        info!(
            selected = summary.selected,
            corrections = summary.corrections.len(),
            "Opened session from stored availability"
        );
        Ok((session, summary))
    }

    /// Applies an already-typed command, as replayed from a script.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is invalid for the current state.
    pub fn execute(&mut self, command: Command) -> Result<ChangeResponse, ApiError> {
        let signal: ChangeSignal = self.scheduler.execute(command)?;
        self.respond(&signal)
    }

    /// Flips one date's membership. Clicking a holiday changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is not `YYYY-MM-DD`.
    pub fn toggle_date(&mut self, date: &str) -> Result<ChangeResponse, ApiError> {
        let date: CalendarDate = parse_date("date", date)?;
        let signal: ChangeSignal = self.scheduler.toggle_date(date)?;
        self.respond(&signal)
    }

    /// Selects one date.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is not `YYYY-MM-DD`.
    pub fn add_date(&mut self, date: &str) -> Result<ChangeResponse, ApiError> {
        let date: CalendarDate = parse_date("date", date)?;
        let signal: ChangeSignal = self.scheduler.add_date(date)?;
        self.respond(&signal)
    }

    /// Deselects one date.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is not `YYYY-MM-DD`.
    pub fn remove_date(&mut self, date: &str) -> Result<ChangeResponse, ApiError> {
        let date: CalendarDate = parse_date("date", date)?;
        let signal: ChangeSignal = self.scheduler.remove_date(date)?;
        self.respond(&signal)
    }

    /// Selects every non-holiday weekday of a `YYYY-MM` month.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not `YYYY-MM`.
    pub fn select_weekdays(&mut self, month: &str) -> Result<ChangeResponse, ApiError> {
        let month: YearMonth = parse_month(month)?;
        let signal: ChangeSignal = self.scheduler.bulk_select_weekdays(month)?;
        self.respond(&signal)
    }

    /// Selects every non-holiday day of a `YYYY-MM` month.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not `YYYY-MM`.
    pub fn select_month(&mut self, month: &str) -> Result<ChangeResponse, ApiError> {
        let month: YearMonth = parse_month(month)?;
        let signal: ChangeSignal = self.scheduler.bulk_select_month(month)?;
        self.respond(&signal)
    }

    /// Deselects everything.
    ///
    /// # Errors
    ///
    /// Returns an error only if the field values cannot be encoded.
    pub fn clear_selection(&mut self) -> Result<ChangeResponse, ApiError> {
        let signal: ChangeSignal = self.scheduler.clear_selection()?;
        self.respond(&signal)
    }

    /// Switches between `Uniform` and `PerDate`.
    ///
    /// # Errors
    ///
    /// Returns an error if `mode` names neither mode.
    pub fn set_duration_mode(&mut self, mode: &str) -> Result<ChangeResponse, ApiError> {
        let mode: DurationMode = DurationMode::parse(mode).ok_or_else(|| ApiError::InvalidInput {
            field: String::from("duration_mode"),
            message: format!("Unknown duration mode '{mode}'"),
        })?;
        let signal: ChangeSignal = self.scheduler.set_duration_mode(mode)?;
        self.respond(&signal)
    }

    /// Changes the master window.
    ///
    /// # Errors
    ///
    /// Returns an error if either time is not `HH:MM`.
    pub fn set_master_window(&mut self, request: &WindowRequest) -> Result<ChangeResponse, ApiError> {
        let window: TimeWindow = parse_window(request)?;
        let signal: ChangeSignal = self.scheduler.set_master_window(window)?;
        self.respond(&signal)
    }

    /// Changes one selected date's window.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not parse, the scheduler is in
    /// uniform mode, or the date is not selected.
    pub fn set_date_window(
        &mut self,
        date: &str,
        request: &WindowRequest,
    ) -> Result<ChangeResponse, ApiError> {
        let date: CalendarDate = parse_date("date", date)?;
        let window: TimeWindow = parse_window(request)?;
        let signal: ChangeSignal = self.scheduler.set_date_window(date, window)?;
        self.respond(&signal)
    }

    /// Copies the preceding date's window within the same run.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` does not parse or is not selected.
    pub fn copy_from_previous(&mut self, date: &str) -> Result<ChangeResponse, ApiError> {
        let date: CalendarDate = parse_date("date", date)?;
        let signal: ChangeSignal = self.scheduler.copy_from_previous(date)?;
        self.respond(&signal)
    }

    /// Replaces the schedule with a stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if `stored_json` is not a stored availability document.
    pub fn load_stored(&mut self, stored_json: &str) -> Result<LoadSummary, ApiError> {
        let input: SnapshotInput = decode(stored_json)?;
        let outcome: LoadOutcome = self.scheduler.load_snapshot(&input);
        Ok(self.load_summary(&outcome.report))
    }

    /// Ends hydration. Returns `false` if the session was already interactive.
    pub fn mark_interactive(&mut self) -> bool {
        self.scheduler.mark_interactive()
    }

    /// Returns whether changes are currently reported as load-caused.
    #[must_use]
    pub fn is_hydrating(&self) -> bool {
        self.scheduler.is_hydrating()
    }

    /// Describes the whole schedule for display.
    #[must_use]
    pub fn view(&self) -> ScheduleView {
        let snapshot: AvailabilitySnapshot = self.scheduler.snapshot();
        let master: TimeWindow = self.scheduler.master_window();
        let mode: DurationMode = self.scheduler.duration_mode();
        ScheduleView {
            start_date: snapshot.start_date.map(|date| date.to_string()),
            end_date: snapshot.end_date.map(|date| date.to_string()),
            selected_count: snapshot.selected_dates.len(),
            duration_mode: mode.to_string(),
            master_start_time: master.start.to_string(),
            master_end_time: master.end.to_string(),
            focus_month: snapshot
                .start_date
                .map(|date| date.year_month().to_string()),
            is_hydrating: self.scheduler.is_hydrating(),
            ranges: self
                .scheduler
                .grouped_ranges()
                .iter()
                .map(|range| self.range_view(range, mode))
                .collect(),
        }
    }

    /// Returns the holidays of a `YYYY-MM` month.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not `YYYY-MM`.
    pub fn holidays_in(&self, month: &str) -> Result<Vec<HolidayView>, ApiError> {
        let month: YearMonth = parse_month(month)?;
        Ok(self
            .scheduler
            .calendar()
            .holidays_in(month)
            .into_iter()
            .map(|holiday| HolidayView {
                date: holiday.date.to_string(),
                name: holiday.name,
            })
            .collect())
    }

    /// Returns the document to store.
    #[must_use]
    pub fn stored(&self) -> PersistedAvailability {
        PersistedAvailability::from(&self.scheduler.snapshot())
    }

    /// Returns the current value of every derived field.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists cannot be encoded.
    pub fn form_values(&self) -> Result<FormFieldValues, ApiError> {
        Ok(FormFieldValues::from_snapshot(&self.scheduler.snapshot())?)
    }

    /// Returns the underlying scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &Scheduler<C> {
        &self.scheduler
    }

    fn respond(&self, signal: &ChangeSignal) -> Result<ChangeResponse, ApiError> {
        Ok(ChangeResponse {
            action: signal.action.name.clone(),
            origin: signal.origin.to_string(),
            updates: signal.updates.clone(),
            values: self.form_values()?,
        })
    }

    fn range_view(&self, range: &DateRange, mode: DurationMode) -> RangeView {
        let slots: Vec<SlotView> = range
            .dates()
            .iter()
            .enumerate()
            .map(|(index, date)| {
                let window: TimeWindow = self
                    .scheduler
                    .window_for(*date)
                    .unwrap_or_else(|| self.scheduler.config().default_window);
                SlotView {
                    date: date.to_string(),
                    label: date.display_label(),
                    start_time: window.start.to_string(),
                    end_time: window.end.to_string(),
                    can_copy_previous: index > 0 && mode == DurationMode::PerDate,
                }
            })
            .collect();
        RangeView {
            label: range.label(),
            slots,
        }
    }

    fn load_summary(&self, report: &HydrationReport) -> LoadSummary {
        let mut corrections: Vec<String> = Vec::new();
        corrections.extend(
            report
                .malformed_dates
                .iter()
                .map(|entry| format!("Ignored malformed date '{entry}'")),
        );
        corrections.extend(report.holiday_dates.iter().map(|date| {
            let name: &str = self.scheduler.calendar().name_of(*date).unwrap_or("holiday");
            format!("Removed {date} ({name})")
        }));
        if report.duplicate_dates > 0 {
            corrections.push(format!(
                "Collapsed {} duplicate date(s)",
                report.duplicate_dates
            ));
        }
        corrections.extend(
            report
                .dropped_slots
                .iter()
                .map(|entry| format!("Dropped time slot for '{entry}'")),
        );
        if let Some((start, end)) = report.oversized_range {
            corrections.push(format!(
                "Ignored stored range {start} to {end}: longer than {MAX_GENERATED_RANGE_DAYS} days"
            ));
        }
        corrections.extend(
            report
                .defaulted_slots
                .iter()
                .filter(|_| !report.generated_from_range)
                .map(|date| format!("Gave {date} the default window")),
        );
        LoadSummary {
            selected: self.scheduler.sorted_dates().len(),
            duration_mode: self.scheduler.duration_mode().to_string(),
            generated_from_range: report.generated_from_range,
            corrections,
        }
    }
}

fn parse_date(field: &str, value: &str) -> Result<CalendarDate, ApiError> {
    CalendarDate::parse(value).map_err(|err| translate_domain_error(field, err))
}

fn parse_month(value: &str) -> Result<YearMonth, ApiError> {
    YearMonth::parse(value).map_err(|err| translate_domain_error("month", err))
}

fn parse_window(request: &WindowRequest) -> Result<TimeWindow, ApiError> {
    TimeWindow::parse(&request.start_time, &request.end_time)
        .map_err(|err| translate_domain_error("window", err))
}
