// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AvailabilityState, Clock, RawTimeSlot, SnapshotInput};
use availability_domain::{CalendarDate, Holiday, HolidayCalendar, TimeWindow};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A clock the test advances by hand. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

pub fn date(value: &str) -> CalendarDate {
    CalendarDate::parse(value).unwrap()
}

pub fn dates(values: &[&str]) -> Vec<CalendarDate> {
    values.iter().map(|value| date(value)).collect()
}

pub fn window(start: &str, end: &str) -> TimeWindow {
    TimeWindow::parse(start, end).unwrap()
}

pub fn create_test_calendar() -> HolidayCalendar {
    HolidayCalendar::canadian_statutory()
}

pub fn create_small_calendar() -> HolidayCalendar {
    HolidayCalendar::new([Holiday::new(date("2025-06-04"), "Test Holiday")])
}

pub fn create_test_state() -> AvailabilityState {
    AvailabilityState::new(TimeWindow::DEFAULT)
}

pub fn raw_slot(day: &str, start: &str, end: &str) -> RawTimeSlot {
    RawTimeSlot {
        date: String::from(day),
        start_time: String::from(start),
        end_time: String::from(end),
    }
}

pub fn input_with(selected: &[&str], slots: Vec<RawTimeSlot>) -> SnapshotInput {
    SnapshotInput {
        start_date: None,
        end_date: None,
        selected_dates: selected.iter().map(|value| String::from(*value)).collect(),
        time_slots: slots,
    }
}
