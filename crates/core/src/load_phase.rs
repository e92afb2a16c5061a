// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Distinguishes hydration from interactive editing.
//!
//! A scheduler built from a persisted snapshot starts `Hydrating`. Changes
//! made while hydrating are reported as load-caused, so the host does not
//! validate fields or mark the form dirty for data the user never touched.
//! The phase moves to `Interactive` exactly once, either when the host calls
//! `mark_interactive` or when the settle delay has elapsed since the last
//! load. It never returns to `Hydrating`.

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The process monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The two load phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LoadPhase {
    /// Persisted data is still being applied.
    Hydrating,
    /// Changes come from the user.
    Interactive,
}

impl LoadPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hydrating => "Hydrating",
            Self::Interactive => "Interactive",
        }
    }
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the one-way `Hydrating -> Interactive` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPhaseController {
    phase: LoadPhase,
    settle_delay: Duration,
    settles_at: Option<Instant>,
}

impl LoadPhaseController {
    /// Creates a controller that is already interactive.
    #[must_use]
    pub const fn interactive(settle_delay: Duration) -> Self {
        Self {
            phase: LoadPhase::Interactive,
            settle_delay,
            settles_at: None,
        }
    }

    /// Creates a controller that settles `settle_delay` after `now`.
    #[must_use]
    pub fn hydrating(now: Instant, settle_delay: Duration) -> Self {
        Self {
            phase: LoadPhase::Hydrating,
            settle_delay,
            settles_at: now.checked_add(settle_delay),
        }
    }

    /// Records load activity at `now`, pushing the settle deadline out.
    ///
    /// Has no effect once interactive.
    pub fn note_load_activity(&mut self, now: Instant) {
        if self.phase == LoadPhase::Hydrating {
            self.settles_at = now.checked_add(self.settle_delay);
        }
    }

    /// Returns the phase as of `now` without committing a transition.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> LoadPhase {
        match (self.phase, self.settles_at) {
            (LoadPhase::Hydrating, Some(deadline)) if now >= deadline => LoadPhase::Interactive,
            (phase, _) => phase,
        }
    }

    /// Commits the transition if the settle deadline has passed.
    ///
    /// Returns the phase after settling.
    pub fn settle(&mut self, now: Instant) -> LoadPhase {
        if self.phase == LoadPhase::Hydrating && self.phase_at(now) == LoadPhase::Interactive {
            self.finish("settle delay elapsed");
        }
        self.phase
    }

    /// Ends hydration immediately.
    ///
    /// Returns `false` if the controller was already interactive.
    pub fn mark_interactive(&mut self) -> bool {
        if self.phase == LoadPhase::Interactive {
            return false;
        }
        self.finish("host marked interactive");
        true
    }

    /// Returns the last committed phase.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Returns the configured settle delay.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    fn finish(&mut self, reason: &str) {
        self.phase = LoadPhase::Interactive;
        self.settles_at = None;
        info!(reason, "Load phase settled; scheduler is interactive");
    }
}
