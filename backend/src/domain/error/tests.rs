//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_expected_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[test]
fn serialises_with_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::not_found("missing")).expect("serialise");
    assert_eq!(value, json!({ "code": "not_found", "message": "missing" }));
}

#[test]
fn serialises_trace_id_and_details_when_present() {
    let error = Error::invalid_request("bad")
        .with_trace_id("00000000-0000-0000-0000-000000000000")
        .with_details(json!({ "field": "email" }));
    let value = serde_json::to_value(error).expect("serialise");
    assert_eq!(
        value.get("traceId").and_then(serde_json::Value::as_str),
        Some("00000000-0000-0000-0000-000000000000")
    );
    assert_eq!(value["details"]["field"], "email");
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = "11111111-1111-1111-1111-111111111111"
        .parse()
        .expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(
        error.trace_id(),
        Some("11111111-1111-1111-1111-111111111111")
    );
}
