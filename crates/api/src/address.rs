// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Address suggestions for the contract location fields.
//!
//! The scheduler does not depend on this module. It sits beside it because
//! the same forms host both. The provider is abstracted as
//! `SuggestionService`. `QueryGate` implements the host-side rules: queries
//! shorter than three characters clear the list, a query only fires after a
//! 300 ms pause, and results for a superseded query are discarded.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Queries shorter than this, in characters, are not sent.
pub const MIN_QUERY_LEN: usize = 3;

/// How long the query must stay unchanged before it is sent.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Country assumed when the provider omits one.
pub const DEFAULT_COUNTRY: &str = "Canada";

/// Address suggestion errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// The provider could not be reached.
    #[error("Suggestion provider unreachable: {0}")]
    Transport(String),

    /// The provider answered with something that is not a suggestion list.
    #[error("Suggestion provider returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Raw feature properties as returned by the geocoding provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderProperties {
    /// Provider identifier of the place.
    pub place_id: Option<String>,
    /// Full one-line address.
    pub formatted: Option<String>,
    /// Place or business name.
    pub name: Option<String>,
    /// First address line.
    pub address_line1: Option<String>,
    /// Second address line.
    pub address_line2: Option<String>,
    /// Street name.
    pub street: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// County, used when no state is given.
    pub county: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
    /// Country.
    pub country: Option<String>,
}

/// One autocomplete feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderFeature {
    /// The feature's address properties.
    pub properties: ProviderProperties,
}

/// The provider's response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderResponse {
    /// Whether the lookup succeeded.
    #[serde(default)]
    pub status: bool,
    /// The matching features.
    #[serde(default)]
    pub data: Option<Vec<ProviderFeature>>,
}

impl ProviderResponse {
    /// Converts the response into suggestions. A failed or empty response
    /// yields no suggestions.
    #[must_use]
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        if !self.status {
            return Vec::new();
        }
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(|feature| Suggestion::from(feature.properties))
            .collect()
    }
}

/// An address suggestion, already mapped onto the form's location fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Provider identifier, used to key the dropdown entry.
    pub place_id: Option<String>,
    /// Full one-line address.
    pub formatted: String,
    /// Facility name; `None` leaves the form's existing name untouched.
    pub name: Option<String>,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// Province or state.
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
}

impl Suggestion {
    /// Returns the secondary dropdown line, `City, Region`.
    #[must_use]
    pub fn locality_label(&self) -> Option<String> {
        match (self.city.is_empty(), self.region.is_empty()) {
            (true, true) => None,
            (false, true) => Some(self.city.clone()),
            (true, false) => Some(format!(", {}", self.region)),
            (false, false) => Some(format!("{}, {}", self.city, self.region)),
        }
    }
}

impl From<ProviderProperties> for Suggestion {
    fn from(props: ProviderProperties) -> Self {
        Self {
            place_id: props.place_id,
            formatted: props.formatted.unwrap_or_default(),
            name: first_present(props.name, props.address_line1),
            street: first_present(props.street, props.address_line2).unwrap_or_default(),
            city: props.city.unwrap_or_default(),
            region: first_present(props.state, props.county).unwrap_or_default(),
            postal_code: props.postcode.unwrap_or_default(),
            country: props
                .country
                .filter(|country| !country.is_empty())
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        }
    }
}

fn first_present(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|value| !value.is_empty())
        .or_else(|| fallback.filter(|value| !value.is_empty()))
}

/// An address suggestion provider.
#[allow(async_fn_in_trait)]
pub trait SuggestionService {
    /// Returns suggestions for `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or answers with
    /// an invalid response.
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, SuggestionError>;
}

/// A query that passed the gate and may be sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    query: String,
}

impl QueryTicket {
    /// The query text to send.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What the host should do after the query text changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The query is too short: clear suggestions and hide the dropdown.
    Cleared,
    /// The query will be sent once `fires_at` is reached.
    Scheduled {
        /// When the debounce expires.
        fires_at: Instant,
    },
}

/// Debounces queries and discards stale results.
#[derive(Debug, Clone, Default)]
pub struct QueryGate {
    generation: u64,
    pending: Option<(QueryTicket, Instant)>,
}

impl QueryGate {
    /// Creates an idle gate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Records a change of the query text at `now`.
    ///
    /// Every change supersedes earlier queries, including ones already in
    /// flight.
    pub fn submit(&mut self, query: &str, now: Instant) -> GateDecision {
        self.generation += 1;
        let query: &str = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            self.pending = None;
            return GateDecision::Cleared;
        }
        let fires_at: Instant = now.checked_add(DEBOUNCE).unwrap_or(now);
        self.pending = Some((
            QueryTicket {
                generation: self.generation,
                query: query.to_string(),
            },
            fires_at,
        ));
        GateDecision::Scheduled { fires_at }
    }

    /// Takes the pending query once its debounce has expired.
    pub fn take_due(&mut self, now: Instant) -> Option<QueryTicket> {
        match &self.pending {
            Some((_, fires_at)) if now >= *fires_at => self.pending.take().map(|(ticket, _)| ticket),
            _ => None,
        }
    }

    /// Returns whether results for `ticket` are still wanted.
    #[must_use]
    pub const fn is_current(&self, ticket: &QueryTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Keeps `results` only if `ticket` has not been superseded.
    #[must_use]
    pub fn accept(&self, ticket: &QueryTicket, results: Vec<Suggestion>) -> Option<Vec<Suggestion>> {
        if self.is_current(ticket) {
            Some(results)
        } else {
            debug!(query = ticket.query.as_str(), "Discarding stale suggestions");
            None
        }
    }
}
