// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod config;
mod error;
mod load_phase;
mod scheduler;
mod selection;
mod snapshot;
mod state;
mod time_slots;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, hydrate};
pub use command::Command;
pub use config::{DEFAULT_SETTLE_DELAY_MS, MAX_GENERATED_RANGE_DAYS, SchedulerConfig};
pub use error::CoreError;
pub use load_phase::{Clock, LoadPhase, LoadPhaseController, SystemClock};
pub use scheduler::{LoadOutcome, Scheduler};
pub use selection::{DateSelectionSet, SelectionDelta};
pub use snapshot::{AvailabilitySnapshot, RawTimeSlot, SnapshotInput, TimeSlot};
pub use state::{
    AvailabilityState, HydrationReport, HydrationResult, TransitionResult,
};
pub use time_slots::{DurationMode, TimeSlotManager};
