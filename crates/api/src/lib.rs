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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod address;
mod error;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use address::{
    DEBOUNCE, DEFAULT_COUNTRY, GateDecision, MIN_QUERY_LEN, ProviderFeature, ProviderProperties,
    ProviderResponse, QueryGate, QueryTicket, Suggestion, SuggestionError, SuggestionService,
};
pub use error::{ApiError, COMMAND_FIELD, translate_core_error, translate_domain_error};
pub use request_response::{
    ChangeResponse, HolidayView, LoadSummary, RangeView, ScheduleView, SlotView, WindowRequest,
};
pub use session::SchedulerSession;
