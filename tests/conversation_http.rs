//! Integration tests for the conversation memory endpoints.
//!
//! Uses the in-memory backend selected through configuration, the same way
//! the server binds it.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use ticket_intelligence::adapters::http::api_routes;
use ticket_intelligence::application::CapabilityRegistry;
use ticket_intelligence::config::{BackendKind, CapabilitiesConfig, CapabilityBinding};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn in_memory_registry() -> CapabilityRegistry {
    let config = CapabilitiesConfig {
        conversation: CapabilityBinding {
            backend: BackendKind::InMemory,
            timeout_secs: 5,
        },
        ..Default::default()
    };
    CapabilityRegistry::from_config(&config).unwrap()
}

fn append(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/conversation")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn history(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

// =============================================================================
// Unbound
// =============================================================================

#[tokio::test]
async fn append_without_backend_is_503() {
    let app = api_routes(&CapabilityRegistry::not_configured());

    let (status, body) = send(&app, append(json!({"ticket_id": "T1", "user_message": "hi"}))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        json_of(&body)["detail"],
        "Conversation service is not yet configured."
    );
}

#[tokio::test]
async fn history_without_backend_is_503() {
    let app = api_routes(&CapabilityRegistry::not_configured());

    let (status, body) = send(&app, history("/v1/conversation/T1")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        json_of(&body)["detail"],
        "Conversation service is not yet configured."
    );
}

// =============================================================================
// In-memory backend
// =============================================================================

#[tokio::test]
async fn append_is_accepted_with_empty_body() {
    let app = api_routes(&in_memory_registry());

    let (status, body) = send(&app, append(json!({"ticket_id": "T1", "user_message": "hi"}))).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.is_empty());
}

#[tokio::test]
async fn appended_turn_round_trips_with_millisecond_precision() {
    let app = api_routes(&in_memory_registry());
    let created_at = "2024-05-01T12:34:56.789Z";

    let (status, _) = send(
        &app,
        append(json!({
            "ticket_id": "T-42",
            "user_message": "My invoice is wrong",
            "assistant_message": "Let me check that for you.",
            "created_at": created_at
        })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (status, body) = send(&app, history("/v1/conversation/T-42?limit=1")).await;
    assert_eq!(status, StatusCode::OK);

    let body = json_of(&body);
    let turns = body["history"].as_array().unwrap();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0]["ticket_id"], "T-42");
    assert_eq!(turns[0]["user_message"], "My invoice is wrong");
    assert_eq!(turns[0]["assistant_message"], "Let me check that for you.");

    let returned: DateTime<Utc> = serde_json::from_value(turns[0]["created_at"].clone()).unwrap();
    let sent: DateTime<Utc> = created_at.parse().unwrap();
    assert_eq!(returned, sent);
    assert_eq!(returned.timestamp_millis(), sent.timestamp_millis());
}

#[tokio::test]
async fn history_is_most_recent_commits_in_append_order() {
    let app = api_routes(&in_memory_registry());

    for (message, at) in [
        ("third", "2024-05-01T10:03:00Z"),
        ("first", "2024-05-01T10:01:00Z"),
        ("fourth", "2024-05-01T10:04:00Z"),
        ("second", "2024-05-01T10:02:00Z"),
    ] {
        let (status, _) = send(
            &app,
            append(json!({"ticket_id": "T1", "user_message": message, "created_at": at})),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
    }

    let (status, body) = send(&app, history("/v1/conversation/T1?limit=3")).await;
    assert_eq!(status, StatusCode::OK);

    let messages: Vec<String> = json_of(&body)["history"]
        .as_array()
        .unwrap()
        .iter()
        .map(|turn| turn["user_message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages, vec!["first", "fourth", "second"]);
}

#[tokio::test]
async fn backdated_append_is_still_the_latest_turn() {
    let app = api_routes(&in_memory_registry());

    for (message, at) in [
        ("first-appended", "2024-05-01T10:00:00Z"),
        ("second-appended", "2024-05-01T09:00:00Z"),
    ] {
        send(
            &app,
            append(json!({"ticket_id": "T1", "user_message": message, "created_at": at})),
        )
        .await;
    }

    let (_, body) = send(&app, history("/v1/conversation/T1?limit=1")).await;
    assert_eq!(json_of(&body)["history"][0]["user_message"], "second-appended");
}

#[tokio::test]
async fn absent_assistant_message_is_null() {
    let app = api_routes(&in_memory_registry());
    send(&app, append(json!({"ticket_id": "T1", "user_message": "hi"}))).await;

    let (_, body) = send(&app, history("/v1/conversation/T1")).await;

    assert_eq!(json_of(&body)["history"][0]["assistant_message"], Value::Null);
}

#[tokio::test]
async fn unknown_thread_is_404() {
    let app = api_routes(&in_memory_registry());

    let (status, body) = send(&app, history("/v1/conversation/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json_of(&body)["detail"],
        "Conversation with identifier 'nope' not found."
    );
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn limit_outside_bounds_is_rejected() {
    let app = api_routes(&in_memory_registry());
    send(&app, append(json!({"ticket_id": "T1", "user_message": "hi"}))).await;

    for uri in [
        "/v1/conversation/T1?limit=0",
        "/v1/conversation/T1?limit=101",
        "/v1/conversation/T1?limit=ten",
    ] {
        let (status, _) = send(&app, history(uri)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }

    let (status, _) = send(&app, history("/v1/conversation/T1?limit=100")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn empty_user_message_is_rejected() {
    let app = api_routes(&in_memory_registry());

    let (status, body) = send(&app, append(json!({"ticket_id": "T1", "user_message": ""}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_of(&body)["field"], "user_message");
}

#[tokio::test]
async fn unknown_append_field_is_rejected() {
    let app = api_routes(&in_memory_registry());

    let (status, _) = send(
        &app,
        append(json!({"ticket_id": "T1", "user_message": "hi", "sentiment": "angry"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
