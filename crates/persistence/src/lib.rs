// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisted form of contract availability.
//!
//! The scheduler core never touches storage. This crate turns its
//! `AvailabilitySnapshot` into the JSON document the host stores, and
//! turns stored documents back into `SnapshotInput` for hydration.
//!
//! ## Stored Shape
//!
//! ```json
//! {
//!   "start_date": "2025-06-02",
//!   "end_date": "2025-06-05",
//!   "selected_dates": ["2025-06-02", "2025-06-03", "2025-06-05"],
//!   "time_slots": [
//!     { "date": "2025-06-02", "start_time": "09:00", "end_time": "17:00" }
//!   ]
//! }
//! ```
//!
//! `FormFieldValues` is the same data as the four string-valued form
//! fields the host keeps in sync with the scheduler.

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

mod error;
mod form_fields;
mod wire;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use form_fields::FormFieldValues;
pub use wire::{PersistedAvailability, decode, encode};
