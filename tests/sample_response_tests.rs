use bet365_rs::{Envelope, JsonView, Response, ResultFields};

#[test]
fn test_exact_upcoming_response() {
    // Captured upcoming-events body for soccer, trimmed to two fixtures
    let json = r#"{"success":1,"pager":{"page":1,"per_page":50,"total":2},"results":[{"id":"89135487","sport_id":"1","time":"1586790000","time_status":"0","league":{"id":"10037409","name":"Belarus Premier League"},"home":{"id":"10040513","name":"Dinamo Brest","image_id":"209887","cc":"by"},"away":{"id":"10040530","name":"Torpedo Zhodino","image_id":"209897","cc":"by"},"ss":null,"our_event_id":"2287112","r_id":null,"updated_at":"1586707322"},{"id":"89135488","sport_id":"1","time":"1586800800","time_status":"0","league":{"id":"10037409","name":"Belarus Premier League"},"home":{"id":"10040528","name":"Slutsk"},"away":{"id":"10040533","name":"Vitebsk"},"ss":null,"our_event_id":"2287113","updated_at":"1586707325"}]}"#;

    let body: serde_json::Value = serde_json::from_str(json).expect("body should be valid JSON");
    match Response::from_endpoint("upcoming", body) {
        Response::UpcomingEvents(response) => {
            assert_eq!(response.success(), Some(1));
            let events = response.results().expect("should have results");
            assert_eq!(events.len(), 2);
            assert_eq!(events[0].our_event_id(), Some("2287112"));
            assert_eq!(events[0].home().and_then(|h| h.cc()), Some("by"));
            assert_eq!(events[1].away().and_then(|a| a.name()), Some("Vitebsk"));
            assert_eq!(events[1].ss(), None);
            assert_eq!(events[1].get("r_id"), None);
        }
        other => panic!("Unexpected facade: {:?}", other),
    }
}

#[test]
fn test_exact_in_play_filter_response() {
    let json = r#"{"success":1,"pager":{"page":1,"per_page":1000,"total":1},"results":[{"id":"89243187","sport_id":"1","time":"1586706000","time_status":"1","league":{"id":"10048705","name":"Nicaragua Primera Division","cc":"ni"},"home":{"id":"10050293","name":"Real Esteli"},"away":{"id":"10050297","name":"Ferretti"},"ss":"0-0","our_event_id":"2298715","r_id":"89243187","ev_id":"15872001"}]}"#;

    let body: serde_json::Value = serde_json::from_str(json).expect("body should be valid JSON");
    let envelope = match Response::from_endpoint("inplay_filter", body) {
        Response::InPlayFilter(envelope) => envelope,
        other => panic!("Unexpected facade: {:?}", other),
    };

    assert_eq!(envelope.success(), Some(1));
    let results = envelope.raw_results().expect("should have results");
    assert_eq!(results[0]["ss"], serde_json::json!("0-0"));
    // the generic envelope does not re-wrap results; callers may
    let first = bet365_rs::ResultBase::new(&results[0]);
    assert_eq!(first.league().and_then(|l| l.cc()), Some("ni"));
}
