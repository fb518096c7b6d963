//! Tests for users API handlers.

use super::*;
use crate::domain::ports::FixtureRosterRepository;
use crate::inbound::http::test_utils::{fixture_state, test_app, user};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

#[fixture]
fn alice_roster() -> Arc<FixtureRosterRepository> {
    Arc::new(FixtureRosterRepository::with_users(vec![user(
        "Alice",
        "alice@example.com",
    )]))
}

async fn call(
    repository: Arc<FixtureRosterRepository>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(fixture_state(repository, Vec::new()))).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn list_users_wraps_the_roster(alice_roster: Arc<FixtureRosterRepository>) {
    let (status, body) = call(alice_roster, actix_test::TestRequest::get().uri("/api/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"users": [{"name": "Alice", "email": "alice@example.com", "songs": [], "artists": []}]})
    );
}

#[actix_web::test]
async fn list_users_on_a_missing_store_is_empty() {
    let repository = Arc::new(FixtureRosterRepository::missing());
    let (status, body) = call(
        Arc::clone(&repository),
        actix_test::TestRequest::get().uri("/api/users"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"users": []}));
    assert_eq!(repository.save_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn get_user_returns_user_or_message(alice_roster: Arc<FixtureRosterRepository>) {
    let (status, body) = call(
        Arc::clone(&alice_roster),
        actix_test::TestRequest::get().uri("/api/users/alice@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Alice");

    let (status, body) = call(
        alice_roster,
        actix_test::TestRequest::get().uri("/api/users/bob@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "user with email bob@example.com not found"})
    );
}

#[actix_web::test]
async fn register_creates_the_store_and_answers_201() {
    let repository = Arc::new(FixtureRosterRepository::missing());
    let (status, body) = call(
        Arc::clone(&repository),
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": "Alice", "email": "alice@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "user alice@example.com added");
    assert_eq!(body["user"]["songs"], json!([]));
    assert_eq!(repository.contents().map(|users| users.len()), Some(1));
}

#[rstest]
#[actix_web::test]
async fn duplicate_registration_is_a_message(alice_roster: Arc<FixtureRosterRepository>) {
    let (status, body) = call(
        Arc::clone(&alice_roster),
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": "Other", "email": "alice@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "a user with email alice@example.com already exists"})
    );
    assert_eq!(alice_roster.save_count(), 0);
}

#[rstest]
#[case(json!({"name": "", "email": "alice@example.com"}), "name", "invalid_name")]
#[case(json!({"name": "Alice", "email": "not-an-email"}), "email", "invalid_email")]
#[actix_web::test]
async fn invalid_registrations_are_rejected(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let repository = Arc::new(FixtureRosterRepository::missing());
    let (status, body) = call(
        Arc::clone(&repository),
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"], json!({"field": field, "code": code}));
    assert_eq!(repository.save_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn update_renames_and_moves_the_email(alice_roster: Arc<FixtureRosterRepository>) {
    let (status, body) = call(
        Arc::clone(&alice_roster),
        actix_test::TestRequest::put()
            .uri("/api/users/alice@example.com")
            .set_json(json!({"name": "Alice B", "email": "alice.b@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "user with email alice@example.com updated");
    assert_eq!(body["user"]["email"], "alice.b@example.com");
    let stored = alice_roster.contents().expect("store written");
    assert_eq!(stored[0].name().as_ref(), "Alice B");
}

#[rstest]
#[actix_web::test]
async fn delete_removes_or_reports(alice_roster: Arc<FixtureRosterRepository>) {
    let (status, body) = call(
        Arc::clone(&alice_roster),
        actix_test::TestRequest::delete().uri("/api/users/alice@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "user with email alice@example.com deleted");
    assert_eq!(alice_roster.contents(), Some(Vec::new()));

    let (_, body) = call(
        Arc::clone(&alice_roster),
        actix_test::TestRequest::delete().uri("/api/users/alice@example.com"),
    )
    .await;
    assert_eq!(
        body,
        json!({"message": "user with email alice@example.com not found"})
    );
    assert_eq!(alice_roster.save_count(), 1);
}
