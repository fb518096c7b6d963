//! End-to-end HTTP flow over the JSON roster file.
//!
//! Requests go through the real route table, domain services and file
//! adapter; only the music catalogue is replaced by an in-memory fixture.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use cap_std::{ambient_authority, fs::Dir};
use futures_util::future::join_all;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use songbook::Trace;
use songbook::domain::ports::FixtureCatalogueSource;
use songbook::domain::{
    CatalogueId, CatalogueService, CatalogueSummary, FavouritesService, RosterStore,
    TRACE_ID_HEADER, TrackSummary, UserRosterService,
};
use songbook::inbound::http::routes::api_scope;
use songbook::inbound::http::state::HttpState;
use songbook::outbound::roster_file::JsonFileRosterRepository;
use tempfile::TempDir;

const ROSTER_FILE: &str = "users_spotify.json";

fn song(id: &str, title: &str) -> CatalogueSummary {
    CatalogueSummary::Song(TrackSummary {
        title: title.to_owned(),
        artist: "Queen".to_owned(),
        album: "A Night at the Opera".to_owned(),
        length: "5:55".to_owned(),
        url: format!("https://open.spotify.com/track/{id}"),
        id: CatalogueId::new(id).expect("valid id"),
    })
}

#[fixture]
fn roster_dir() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

fn state(dir: &TempDir) -> HttpState {
    let repository = Arc::new(
        JsonFileRosterRepository::new(dir.path().join(ROSTER_FILE)).expect("roster path"),
    );
    let source = Arc::new(FixtureCatalogueSource::new(
        ["abc123", "song01", "song02", "song03", "song04"]
            .iter()
            .map(|id| song(id, &format!("Title {id}")))
            .collect(),
    ));
    let store = RosterStore::new(repository);
    let users = Arc::new(UserRosterService::new(store.clone()));
    let favourites = Arc::new(FavouritesService::new(store, Arc::clone(&source)));
    HttpState::new(
        users.clone(),
        users,
        favourites.clone(),
        favourites,
        Arc::new(CatalogueService::new(source)),
    )
}

fn read_roster(dir: &TempDir) -> Value {
    let directory = Dir::open_ambient_dir(dir.path(), ambient_authority()).expect("open dir");
    let raw = directory.read_to_string(ROSTER_FILE).expect("roster file");
    serde_json::from_str(&raw).expect("roster JSON")
}

macro_rules! init_app {
    ($dir:expr) => {
        actix_test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(web::Data::new(state($dir)))
                .service(api_scope()),
        )
        .await
    };
}

#[rstest]
#[actix_web::test]
async fn alice_adds_lists_and_removes_a_song(roster_dir: TempDir) {
    let app = init_app!(&roster_dir);

    let register = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
        .to_request();
    let response = actix_test::call_service(&app, register).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));

    let add = actix_test::TestRequest::post()
        .uri("/api/users/songs/alice@example.com")
        .set_json(json!({"id": "abc123"}))
        .to_request();
    let response = actix_test::call_service(&app, add).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_roster(&roster_dir)[0]["songs"], json!(["abc123"]));

    let list = actix_test::TestRequest::get()
        .uri("/api/users/songs/alice@example.com")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, list).await;
    assert_eq!(body["songs"][0]["id"], "abc123");
    assert_eq!(body["songs"][0]["title"], "Title abc123");

    let remove = actix_test::TestRequest::delete()
        .uri("/api/users/songs/alice@example.com")
        .set_json(json!({"id": "abc123"}))
        .to_request();
    let response = actix_test::call_service(&app, remove).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_roster(&roster_dir),
        json!([{"name": "Alice", "email": "alice@example.com", "songs": [], "artists": []}])
    );
}

#[rstest]
#[actix_web::test]
async fn favourites_before_any_registration_report_a_missing_store(roster_dir: TempDir) {
    let app = init_app!(&roster_dir);

    let add = actix_test::TestRequest::post()
        .uri("/api/users/artists/alice@example.com")
        .set_json(json!({"id": "abc123"}))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, add).await;

    assert_eq!(body, json!({"message": "user store not found"}));
    let directory = Dir::open_ambient_dir(roster_dir.path(), ambient_authority()).expect("dir");
    assert!(!directory.exists(ROSTER_FILE));
}

#[rstest]
#[actix_web::test]
async fn concurrent_adds_are_not_lost(roster_dir: TempDir) {
    let app = init_app!(&roster_dir);
    let register = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
        .to_request();
    actix_test::call_service(&app, register).await;

    let ids = ["song01", "song02", "song03", "song04"];
    let responses = join_all(ids.iter().map(|id| {
        let request = actix_test::TestRequest::post()
            .uri("/api/users/songs/alice@example.com")
            .set_json(json!({"id": id}))
            .to_request();
        actix_test::call_service(&app, request)
    }))
    .await;
    assert!(
        responses
            .iter()
            .all(|response| response.status() == StatusCode::CREATED)
    );

    let mut stored: Vec<String> = serde_json::from_value(read_roster(&roster_dir)[0]["songs"].clone())
        .expect("song ids");
    stored.sort();
    assert_eq!(stored, ids);
}

#[rstest]
#[actix_web::test]
async fn changing_email_to_a_taken_one_is_refused(roster_dir: TempDir) {
    let app = init_app!(&roster_dir);
    for (name, email) in [("Alice", "alice@example.com"), ("Bob", "bob@example.com")] {
        let register = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": name, "email": email}))
            .to_request();
        actix_test::call_service(&app, register).await;
    }

    let update = actix_test::TestRequest::put()
        .uri("/api/users/bob@example.com")
        .set_json(json!({"name": "Bob", "email": "alice@example.com"}))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, update).await;

    assert_eq!(
        body,
        json!({"message": "a user with email alice@example.com already exists"})
    );
    assert_eq!(read_roster(&roster_dir)[1]["email"], "bob@example.com");
}
