// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use availability_domain::TimeWindow;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settle delay applied after hydrating from a persisted snapshot, in milliseconds.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

/// Longest selection, in days, generated from a stored start/end range.
pub const MAX_GENERATED_RANGE_DAYS: i64 = 366;

/// Tunable scheduler behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Window given to newly selected dates in per-date mode, and to
    /// selected dates a persisted snapshot carries no slot for.
    pub default_window: TimeWindow,
    /// How long after a load the scheduler keeps treating changes as
    /// load-caused, in milliseconds.
    pub settle_delay_ms: u64,
}

impl SchedulerConfig {
    /// Returns the settle delay as a `Duration`.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            default_window: TimeWindow::DEFAULT,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}
