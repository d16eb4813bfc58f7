//! Assertion helpers for tests.

use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset, Utc};
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Allowed distance between a reported timestamp and the test's clock
pub const CLOCK_TOLERANCE_SECS: i64 = 5;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a well-formed whoami answer and return its fields
pub fn assert_valid_whoami_response(response: &TestResponse) -> (DateTime<FixedOffset>, String) {
    assert_ok(response);
    assert_eq!(
        response.content_type(),
        Some("application/json"),
        "Expected Content-Type: application/json"
    );

    let json: serde_json::Value = response.json();
    assert_whoami_json(&json)
}

/// Assert a parsed body has exactly `timestamp` and `ip`, both strings
pub fn assert_whoami_json(json: &serde_json::Value) -> (DateTime<FixedOffset>, String) {
    let obj = json.as_object().expect("Expected a JSON object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["ip", "timestamp"]);

    let timestamp = json["timestamp"]
        .as_str()
        .expect("Expected timestamp to be a string");
    let ip = json["ip"].as_str().expect("Expected ip to be a string");

    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .unwrap_or_else(|e| panic!("timestamp {timestamp:?} is not RFC3339: {e}"));

    (parsed, ip.to_string())
}

/// Assert `timestamp` is within [`CLOCK_TOLERANCE_SECS`] of now
pub fn assert_recent(timestamp: &DateTime<FixedOffset>) {
    let drift = (Utc::now() - timestamp.with_timezone(&Utc))
        .num_seconds()
        .abs();
    assert!(
        drift <= CLOCK_TOLERANCE_SECS,
        "timestamp {timestamp} is {drift}s away from wall clock"
    );
}
