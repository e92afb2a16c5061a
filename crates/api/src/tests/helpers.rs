// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SchedulerSession;
use availability::{Clock, SchedulerConfig};
use availability_domain::HolidayCalendar;
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

pub fn create_test_session() -> SchedulerSession<ManualClock> {
    SchedulerSession::open_with_clock(
        HolidayCalendar::canadian_statutory(),
        SchedulerConfig::default(),
        ManualClock::new(),
    )
}

pub fn create_stored_session(stored_json: &str) -> (SchedulerSession<ManualClock>, ManualClock) {
    let clock: ManualClock = ManualClock::new();
    let (session, _summary) = SchedulerSession::open_stored_with_clock(
        HolidayCalendar::canadian_statutory(),
        SchedulerConfig::default(),
        clock.clone(),
        stored_json,
    )
    .unwrap();
    (session, clock)
}
