// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DEBOUNCE, GateDecision, ProviderProperties, ProviderResponse, QueryGate, QueryTicket,
    Suggestion, SuggestionError, SuggestionService,
};
use futures::executor::block_on;
use std::time::{Duration, Instant};

struct FixedService {
    suggestions: Vec<Suggestion>,
}

impl SuggestionService for FixedService {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, SuggestionError> {
        if query == "fail" {
            return Err(SuggestionError::Transport(String::from("offline")));
        }
        Ok(self.suggestions.clone())
    }
}

fn clinic() -> Suggestion {
    Suggestion::from(ProviderProperties {
        name: Some(String::from("Maple Dental")),
        city: Some(String::from("Ottawa")),
        state: Some(String::from("Ontario")),
        ..ProviderProperties::default()
    })
}

#[test]
fn test_provider_response_maps_fallback_fields() {
    let response: ProviderResponse = serde_json::from_str(
        r#"{
            "status": true,
            "data": [{
                "properties": {
                    "place_id": "abc",
                    "formatted": "12 Bank St, Ottawa, ON K1P 5N2, Canada",
                    "address_line1": "12 Bank St",
                    "address_line2": "Ottawa, ON K1P 5N2",
                    "city": "Ottawa",
                    "county": "Ottawa Region",
                    "postcode": "K1P 5N2"
                }
            }]
        }"#,
    )
    .unwrap();

    let suggestions: Vec<Suggestion> = response.into_suggestions();

    assert_eq!(suggestions.len(), 1);
    let suggestion: &Suggestion = &suggestions[0];
    assert_eq!(suggestion.name.as_deref(), Some("12 Bank St"));
    assert_eq!(suggestion.street, "Ottawa, ON K1P 5N2");
    assert_eq!(suggestion.region, "Ottawa Region");
    assert_eq!(suggestion.country, "Canada");
    assert_eq!(suggestion.postal_code, "K1P 5N2");
}

#[test]
fn test_failed_provider_response_yields_nothing() {
    let response: ProviderResponse =
        serde_json::from_str(r#"{"status": false, "message": "quota"}"#).unwrap();

    assert!(response.into_suggestions().is_empty());
}

#[test]
fn test_locality_label() {
    assert_eq!(clinic().locality_label().as_deref(), Some("Ottawa, Ontario"));
    assert_eq!(Suggestion::default().locality_label(), None);
}

#[test]
fn test_short_query_clears_suggestions() {
    let mut gate: QueryGate = QueryGate::new();
    let now: Instant = Instant::now();

    assert_eq!(gate.submit("ot", now), GateDecision::Cleared);
    assert!(gate.take_due(now + DEBOUNCE).is_none());
}

#[test]
fn test_query_fires_only_after_debounce() {
    let mut gate: QueryGate = QueryGate::new();
    let now: Instant = Instant::now();

    assert_eq!(
        gate.submit("otta", now),
        GateDecision::Scheduled {
            fires_at: now + DEBOUNCE
        }
    );
    assert!(gate.take_due(now + Duration::from_millis(299)).is_none());
    let ticket: QueryTicket = gate.take_due(now + DEBOUNCE).unwrap();
    assert_eq!(ticket.query(), "otta");
    assert!(gate.take_due(now + DEBOUNCE).is_none());
}

#[test]
fn test_typing_restarts_debounce() {
    let mut gate: QueryGate = QueryGate::new();
    let now: Instant = Instant::now();

    gate.submit("ott", now);
    gate.submit("otta", now + Duration::from_millis(200));

    assert!(gate.take_due(now + DEBOUNCE).is_none());
    let ticket: QueryTicket = gate.take_due(now + Duration::from_millis(500)).unwrap();
    assert_eq!(ticket.query(), "otta");
}

#[test]
fn test_stale_results_are_discarded() {
    let service: FixedService = FixedService {
        suggestions: vec![clinic()],
    };
    let mut gate: QueryGate = QueryGate::new();
    let now: Instant = Instant::now();
    gate.submit("otta", now);
    let ticket: QueryTicket = gate.take_due(now + DEBOUNCE).unwrap();

    let results: Vec<Suggestion> = block_on(service.suggest(ticket.query())).unwrap();
    gate.submit("ottawa", now + Duration::from_millis(400));

    assert!(!gate.is_current(&ticket));
    assert!(gate.accept(&ticket, results).is_none());
}

#[test]
fn test_current_results_are_kept() {
    let service: FixedService = FixedService {
        suggestions: vec![clinic()],
    };
    let mut gate: QueryGate = QueryGate::new();
    let now: Instant = Instant::now();
    gate.submit("maple", now);
    let ticket: QueryTicket = gate.take_due(now + DEBOUNCE).unwrap();

    let results: Vec<Suggestion> = block_on(service.suggest(ticket.query())).unwrap();

    assert_eq!(gate.accept(&ticket, results), Some(vec![clinic()]));
}

#[test]
fn test_service_error_propagates() {
    let service: FixedService = FixedService {
        suggestions: Vec::new(),
    };

    let result: Result<Vec<Suggestion>, SuggestionError> = block_on(service.suggest("fail"));

    assert_eq!(
        result,
        Err(SuggestionError::Transport(String::from("offline")))
    );
}
