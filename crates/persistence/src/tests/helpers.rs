// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use availability::{AvailabilitySnapshot, Scheduler, SchedulerConfig};
use availability_domain::{CalendarDate, HolidayCalendar, TimeOfDay, TimeWindow};
use time::macros::{date, time};

pub fn create_test_snapshot() -> AvailabilitySnapshot {
    let mut scheduler: Scheduler = Scheduler::new(
        HolidayCalendar::canadian_statutory(),
        SchedulerConfig::default(),
    );
    scheduler
        .toggle_date(CalendarDate::new(date!(2025 - 06 - 05)))
        .unwrap();
    scheduler
        .toggle_date(CalendarDate::new(date!(2025 - 06 - 02)))
        .unwrap();
    scheduler
        .set_date_window(
            CalendarDate::new(date!(2025 - 06 - 05)),
            TimeWindow::new(TimeOfDay::new(time!(08:00)), TimeOfDay::new(time!(12:30))),
        )
        .unwrap();
    scheduler.snapshot()
}
