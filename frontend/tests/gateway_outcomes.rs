//! Integration coverage for the gateway's outcome classification over real
//! HTTP, using a local mock backend.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use url::Url;

use frontend::config::ClientConfig;
use frontend::domain::outcome::{FailureKind, Payload, RequestOutcome};
use frontend::domain::ports::{ApiGateway, Method};
use frontend::outbound::gateway::HttpRequestGateway;

fn gateway_for(server: &MockServer) -> HttpRequestGateway {
    let base_url = Url::parse(&server.base_url()).expect("mock server URL parses");
    let config = ClientConfig::new(base_url).with_timeout(Duration::from_secs(2));
    HttpRequestGateway::new(config).expect("gateway builds")
}

#[tokio::test]
async fn success_json_round_trips_exactly() {
    let server = MockServer::start();
    let expected = json!({
        "id": 7,
        "fullName": "Ivan Petrov",
        "email": null,
        "passport": {"series": "1234", "number": "567890"},
        "tags": [1, 2.5, true, "x"],
    });
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/clients/7");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(expected.clone());
    });

    let gateway = gateway_for(&server);
    let outcome = gateway.request(Method::Get, "/api/clients/7", None).await;

    mock.assert();
    assert_eq!(outcome, RequestOutcome::Success(Payload::Json(expected)));
}

#[tokio::test]
async fn success_with_empty_body_is_the_empty_marker() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/clients/7");
        then.status(204);
    });

    let gateway = gateway_for(&server);
    let outcome = gateway.request(Method::Delete, "/api/clients/7", None).await;

    assert_eq!(outcome, RequestOutcome::Success(Payload::Empty));
}

#[tokio::test]
async fn success_with_plain_text_keeps_the_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/events");
        then.status(200)
            .header("content-type", "text/plain")
            .body("maintenance window, come back later");
    });

    let gateway = gateway_for(&server);
    let outcome = gateway.request(Method::Get, "/api/events", None).await;

    assert_eq!(
        outcome,
        RequestOutcome::Success(Payload::Text(
            "maintenance window, come back later".to_owned()
        ))
    );
}

#[tokio::test]
async fn structured_error_body_becomes_the_failure_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/clients");
        then.status(400)
            .header("content-type", "application/json")
            .json_body(json!({
                "error": "ValidationError",
                "message": "phoneNumber is required",
            }));
    });

    let gateway = gateway_for(&server);
    let outcome = gateway
        .request(Method::Post, "/api/clients", Some(&json!({})))
        .await;

    assert_eq!(
        outcome,
        RequestOutcome::http_failure(400, "ValidationError: phoneNumber is required")
    );
}

#[tokio::test]
async fn unstructured_error_body_keeps_status_and_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/events/1");
        then.status(500).body("Internal Server Error");
    });

    let gateway = gateway_for(&server);
    let outcome = gateway.request(Method::Get, "/api/events/1", None).await;

    let RequestOutcome::Failure { kind, status, message } = outcome else {
        panic!("expected failure");
    };
    assert_eq!(kind, FailureKind::Http);
    assert_eq!(status, Some(500));
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("Internal Server Error"), "{message}");
}

#[tokio::test]
async fn request_bodies_are_sent_as_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/ticketReservations")
            .header("content-type", "application/json")
            .json_body(json!({"clientId": 1, "eventId": 2, "numberOfTickets": 3}));
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!({"id": 55}));
    });

    let gateway = gateway_for(&server);
    let payload = json!({"clientId": 1, "eventId": 2, "numberOfTickets": 3});
    let outcome = gateway
        .request(Method::Post, "/api/ticketReservations", Some(&payload))
        .await;

    mock.assert();
    assert_eq!(outcome, RequestOutcome::success(json!({"id": 55})));
}

#[tokio::test]
async fn unreachable_target_yields_a_network_failure() {
    // Discard port: nothing listens there, so the connection is refused.
    let base_url = Url::parse("http://127.0.0.1:9").expect("static URL parses");
    let config = ClientConfig::new(base_url).with_timeout(Duration::from_secs(2));
    let gateway = HttpRequestGateway::new(config).expect("gateway builds");

    let outcome = gateway.request(Method::Get, "/api/clients", None).await;

    let RequestOutcome::Failure { kind, status, .. } = outcome else {
        panic!("expected failure");
    };
    assert_eq!(kind, FailureKind::Network);
    assert_eq!(status, None);
}

#[tokio::test]
async fn repeated_gets_are_idempotent() {
    let server = MockServer::start();
    let body = json!([{"id": 1}, {"id": 2}]);
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/events");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body.clone());
    });

    let gateway = gateway_for(&server);
    let first = gateway.request(Method::Get, "/api/events", None).await;
    let second = gateway.request(Method::Get, "/api/events", None).await;

    mock.assert_hits(2);
    assert!(first.is_success());
    assert_eq!(first, second);
}
