use bet365_rs::config::{Bet365Config, Config};
use bet365_rs::{
    ApiVersion, Bet365ApiClient, Envelope, Response, ResultFields, SportId, TransportError,
};
use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::json;

const UPCOMING_BODY: &str = r#"{"success":1,"results":[{"id":"12345","our_event_id":"2294461","updated_at":"1586461906"}],"pager":{"page":1,"per_page":50,"total":1}}"#;

fn create_test_client(server: &ServerGuard) -> Bet365ApiClient {
    let config = Config {
        bet365: Bet365Config {
            api_host: "test-host".to_string(),
            api_key: "test-key".to_string(),
            base_url: Some(server.url()),
        },
    };
    Bet365ApiClient::new(config).unwrap()
}

#[test]
fn test_client_creation() {
    let client =
        Bet365ApiClient::with_credentials("bet365-sports-odds.p.rapidapi.com", "secret").unwrap();

    assert_eq!(client.config().bet365.api_host, "bet365-sports-odds.p.rapidapi.com");
    assert_eq!(client.config().bet365.api_key, "secret");
    assert!(!format!("{:?}", client.config()).contains("secret"));
}

#[test]
fn test_client_rejects_invalid_header_values() {
    assert!(Bet365ApiClient::with_credentials("bad\nhost", "key").is_err());
}

#[test]
fn test_upcoming_events() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/upcoming")
        .match_header("x-rapidapi-host", "test-host")
        .match_header("x-rapidapi-key", "test-key")
        .match_query(Matcher::Exact("sport_id=92&page=2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(UPCOMING_BODY)
        .create();

    let client = create_test_client(&server);
    let response = client
        .upcoming_events(SportId::TableTennis.code(), Some("2"), None, Some(""), None)
        .unwrap();

    mock.assert();
    assert_eq!(response.success(), Some(1));
    assert_eq!(response.pager().and_then(|p| p.page()), Some(1));
    let results = response.results().unwrap();
    assert_eq!(results[0].our_event_id(), Some("2294461"));
    assert_eq!(results[0].id(), Some("12345"));
}

#[test]
fn test_result() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/result")
        .match_query(Matcher::Exact("event_id=86576599".to_string()))
        .with_status(200)
        .with_body(include_str!("data/result_soccer.json"))
        .create();

    let client = create_test_client(&server);
    let response = client.result("86576599").unwrap();

    mock.assert();
    let results = response.results().unwrap();
    assert_eq!(results[0].ss(), Some("1-2"));
    assert_eq!(results[0].events().map(|e| e.len()), Some(2));
}

#[test]
fn test_in_play_filter_without_params() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/inplay_filter")
        .match_query(Matcher::Exact("league_id=10037409".to_string()))
        .with_status(200)
        .with_body(r#"{"success":1,"results":[{"id":"86576599","sport_id":"1"}]}"#)
        .create();

    let client = create_test_client(&server);
    let response = client.in_play_filter(None, Some("10037409")).unwrap();

    mock.assert();
    assert_eq!(response.success(), Some(1));
    assert_eq!(response.raw_results().map(|r| r.len()), Some(1));
}

#[test]
fn test_in_play_odds() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/event")
        .match_query(Matcher::Exact("FI=87967884&stats=1".to_string()))
        .with_status(200)
        .with_body(include_str!("data/inplay_events.json"))
        .create();

    let client = create_test_client(&server);
    let response = client
        .in_play_odds("87967884", None, None, Some("1"))
        .unwrap();

    mock.assert();
    assert_eq!(response.stats().update_at(), Some("1581990853"));
    assert_eq!(response.records().len(), 3);
}

#[test]
fn test_pre_match_odds_uses_v2() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v2/bet365/prematch")
        .match_query(Matcher::Exact("FI=87967884&raw=1".to_string()))
        .with_status(200)
        .with_body(include_str!("data/prematch_odds.json"))
        .create();

    let client = create_test_client(&server);
    let response = client.pre_match_odds("87967884", Some("1")).unwrap();

    mock.assert();
    assert_eq!(response.results().unwrap()[0].fi(), Some("87967884"));
}

#[test]
fn test_in_play_events() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/inplay")
        .with_status(200)
        .with_body(r#"{"success":1,"results":null}"#)
        .create();

    let client = create_test_client(&server);
    let response = client.in_play_events(None).unwrap();

    mock.assert();
    assert_eq!(response.success(), Some(1));
    assert!(response.results().is_none());
}

#[test]
fn test_non_success_status_is_transport_error() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/result")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message":"not found"}"#)
        .create();

    let client = create_test_client(&server);
    let err = client.result("1").unwrap_err();

    mock.assert();
    let transport = err
        .downcast_ref::<TransportError>()
        .expect("should be a transport error");
    assert_eq!(transport.status().as_u16(), 404);
    assert!(transport.url.ends_with("/v1/bet365/result"));
}

#[test]
fn test_server_error_is_not_retried() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/upcoming")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create();

    let client = create_test_client(&server);
    let err = client
        .upcoming_events("1", None, None, None, None)
        .unwrap_err();

    mock.assert();
    assert_eq!(
        err.downcast_ref::<TransportError>().map(|e| e.status().as_u16()),
        Some(503)
    );
}

#[test]
fn test_unknown_endpoint_returns_raw_json() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/bet365/failure")
        .match_query(Matcher::Exact("oops=sorry".to_string()))
        .with_status(200)
        .with_body(r#"{"anything":["goes",1]}"#)
        .create();

    let client = create_test_client(&server);
    let response = client
        .get("failure", &[("oops", Some("sorry")), ("unused", None)], ApiVersion::V1)
        .unwrap();

    mock.assert();
    assert!(response.is_raw());
    assert_eq!(response.into_value(), json!({"anything": ["goes", 1]}));
}

#[test]
fn test_generic_get_resolves_registered_facade() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/v1/bet365/upcoming")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(UPCOMING_BODY)
        .create();

    let client = create_test_client(&server);
    let response = client
        .get("upcoming", &[("sport_id", Some("1"))], ApiVersion::default())
        .unwrap();

    match response {
        Response::UpcomingEvents(upcoming) => {
            assert_eq!(upcoming.pager().and_then(|p| p.total()), Some(1));
        }
        other => panic!("expected upcoming events facade, got {:?}", other),
    }
}

#[test]
fn test_invalid_json_body_fails() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/v1/bet365/inplay")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();

    let client = create_test_client(&server);
    let err = client.in_play_events(None).unwrap_err();

    assert!(err.downcast_ref::<TransportError>().is_none());
}
