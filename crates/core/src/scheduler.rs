// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The stateful scheduler a form host talks to.
//!
//! `Scheduler` owns the holiday calendar, the current state and the load
//! phase. Each mutation settles the load phase against the clock, derives
//! the change origin from it, and delegates to the pure `apply`/`hydrate`
//! functions. A failed command leaves the state untouched.

use crate::apply::{apply, hydrate};
use crate::command::Command;
use crate::config::SchedulerConfig;
use crate::error::CoreError;
use crate::load_phase::{Clock, LoadPhase, LoadPhaseController, SystemClock};
use crate::snapshot::{AvailabilitySnapshot, SnapshotInput};
use crate::state::{AvailabilityState, HydrationReport, HydrationResult, TransitionResult};
use crate::time_slots::DurationMode;
use availability_domain::{
    CalendarDate, DateRange, HolidayCalendar, TimeWindow, YearMonth, group_consecutive,
};
use availability_signals::{ChangeOrigin, ChangeSignal};

/// The outcome of loading persisted data into a running scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// The signal describing the load.
    pub signal: ChangeSignal,
    /// Corrections made while loading.
    pub report: HydrationReport,
}

/// Contract availability scheduler.
#[derive(Debug)]
pub struct Scheduler<C: Clock = SystemClock> {
    calendar: HolidayCalendar,
    config: SchedulerConfig,
    state: AvailabilityState,
    load_phase: LoadPhaseController,
    clock: C,
}

impl Scheduler<SystemClock> {
    /// Creates an empty, interactive scheduler.
    #[must_use]
    pub fn new(calendar: HolidayCalendar, config: SchedulerConfig) -> Self {
        Self::with_clock(calendar, config, SystemClock)
    }

    /// Creates a scheduler hydrated from persisted data.
    ///
    /// The scheduler starts `Hydrating` and settles after the configured
    /// delay or when the host calls `mark_interactive`.
    #[must_use]
    pub fn from_snapshot(
        calendar: HolidayCalendar,
        config: SchedulerConfig,
        input: &SnapshotInput,
    ) -> (Self, HydrationReport) {
        Self::from_snapshot_with_clock(calendar, config, SystemClock, input)
    }
}

impl<C: Clock> Scheduler<C> {
    /// Creates an empty, interactive scheduler driven by `clock`.
    #[must_use]
    pub fn with_clock(calendar: HolidayCalendar, config: SchedulerConfig, clock: C) -> Self {
        Self {
            calendar,
            config,
            state: AvailabilityState::new(config.default_window),
            load_phase: LoadPhaseController::interactive(config.settle_delay()),
            clock,
        }
    }

    /// Creates a scheduler hydrated from persisted data, driven by `clock`.
    #[must_use]
    pub fn from_snapshot_with_clock(
        calendar: HolidayCalendar,
        config: SchedulerConfig,
        clock: C,
        input: &SnapshotInput,
    ) -> (Self, HydrationReport) {
        let load_phase: LoadPhaseController =
            LoadPhaseController::hydrating(clock.now(), config.settle_delay());
        let empty: AvailabilityState = AvailabilityState::new(config.default_window);
        let result: HydrationResult = hydrate(&empty, &calendar, input);
        let scheduler: Self = Self {
            calendar,
            config,
            state: result.new_state,
            load_phase,
            clock,
        };
        (scheduler, result.report)
    }

    /// Applies a command and returns the resulting change signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is invalid for the current state.
    /// The state is unchanged on error.
    pub fn execute(&mut self, command: Command) -> Result<ChangeSignal, CoreError> {
        let origin: ChangeOrigin = self.current_origin();
        let result: TransitionResult = apply(&self.state, &self.calendar, command, origin)?;
        self.state = result.new_state;
        Ok(result.signal)
    }

    /// Flips one date's membership. Holidays are ignored.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches `execute`.
    pub fn toggle_date(&mut self, date: CalendarDate) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::ToggleDate { date })
    }

    /// Selects one date. Holidays are ignored.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches `execute`.
    pub fn add_date(&mut self, date: CalendarDate) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::AddDate { date })
    }

    /// Deselects one date.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches `execute`.
    pub fn remove_date(&mut self, date: CalendarDate) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::RemoveDate { date })
    }

    /// Selects every non-holiday Monday-Friday of `month`.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn bulk_select_weekdays(&mut self, month: YearMonth) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::SelectWeekdays { month })
    }

    /// Selects every non-holiday day of `month`.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn bulk_select_month(&mut self, month: YearMonth) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::SelectMonth { month })
    }

    /// Deselects everything.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches `execute`.
    pub fn clear_selection(&mut self) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::ClearSelection)
    }

    /// Switches the duration mode.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches `execute`.
    pub fn set_duration_mode(&mut self, mode: DurationMode) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::SetDurationMode { mode })
    }

    /// Changes the master window.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches `execute`.
    pub fn set_master_window(&mut self, window: TimeWindow) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::SetMasterWindow { window })
    }

    /// Changes one selected date's window.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` in uniform mode or for an
    /// unselected date.
    pub fn set_date_window(
        &mut self,
        date: CalendarDate,
        window: TimeWindow,
    ) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::SetDateWindow { date, window })
    }

    /// Copies the preceding date's window within the same contiguous range.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` for an unselected date.
    pub fn copy_from_previous(&mut self, date: CalendarDate) -> Result<ChangeSignal, CoreError> {
        self.execute(Command::CopyFromPrevious { date })
    }

    /// Replaces the state with persisted data.
    ///
    /// A load while still hydrating pushes the settle deadline out. A load
    /// after the scheduler became interactive does not re-enter hydration.
    pub fn load_snapshot(&mut self, input: &SnapshotInput) -> LoadOutcome {
        let now = self.clock.now();
        self.load_phase.settle(now);
        self.load_phase.note_load_activity(now);
        let result: HydrationResult = hydrate(&self.state, &self.calendar, input);
        self.state = result.new_state;
        LoadOutcome {
            signal: result.signal,
            report: result.report,
        }
    }

    /// Ends hydration immediately. Returns `false` if already interactive.
    pub fn mark_interactive(&mut self) -> bool {
        self.load_phase.mark_interactive()
    }

    /// Returns whether changes are currently reported as load-caused.
    #[must_use]
    pub fn is_hydrating(&self) -> bool {
        self.load_phase.phase_at(self.clock.now()) == LoadPhase::Hydrating
    }

    /// Returns the load phase as of now.
    #[must_use]
    pub fn load_phase(&self) -> LoadPhase {
        self.load_phase.phase_at(self.clock.now())
    }

    /// Groups the selection into maximal runs of consecutive dates.
    #[must_use]
    pub fn grouped_ranges(&self) -> Vec<DateRange> {
        group_consecutive(&self.state.selection.sorted_dates())
    }

    /// Builds the persistable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> AvailabilitySnapshot {
        self.state.to_snapshot()
    }

    /// Returns every selected date, ascending.
    #[must_use]
    pub fn sorted_dates(&self) -> Vec<CalendarDate> {
        self.state.selection.sorted_dates()
    }

    /// Returns whether `date` is selected.
    #[must_use]
    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.state.selection.contains(date)
    }

    /// Returns the window of `date`, if selected.
    #[must_use]
    pub fn window_for(&self, date: CalendarDate) -> Option<TimeWindow> {
        self.state.slots.window_for(date)
    }

    /// Returns the current duration mode.
    #[must_use]
    pub const fn duration_mode(&self) -> DurationMode {
        self.state.slots.mode()
    }

    /// Returns the master window.
    #[must_use]
    pub const fn master_window(&self) -> TimeWindow {
        self.state.slots.master_window()
    }

    /// Returns the holiday calendar.
    #[must_use]
    pub const fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &AvailabilityState {
        &self.state
    }

    fn current_origin(&mut self) -> ChangeOrigin {
        match self.load_phase.settle(self.clock.now()) {
            LoadPhase::Hydrating => ChangeOrigin::Load,
            LoadPhase::Interactive => ChangeOrigin::User,
        }
    }
}
