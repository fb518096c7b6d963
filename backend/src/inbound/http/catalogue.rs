//! Song and artist catalogue handlers.
//!
//! ```text
//! GET /api/songs/search/{query}
//! GET /api/songs/{id}
//! GET /api/artists/search/{query}
//! GET /api/artists/{id}
//! ```
//!
//! Results are fetched from the music catalogue on every request; nothing is
//! cached beyond the access token.

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CatalogueKind, CatalogueSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::MessageResponse;
use crate::inbound::http::schemas::{ArtistSummarySchema, ErrorSchema, TrackSummarySchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_catalogue_id};

const ID: FieldName = FieldName::new("id");

/// List of songs, used by search and favourites listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct SongsResponse {
    #[schema(value_type = Vec<TrackSummarySchema>)]
    pub songs: Vec<CatalogueSummary>,
}

/// List of artists, used by search and favourites listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistsResponse {
    #[schema(value_type = Vec<ArtistSummarySchema>)]
    pub artists: Vec<CatalogueSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SongResponse {
    #[schema(value_type = TrackSummarySchema)]
    pub song: CatalogueSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistResponse {
    #[schema(value_type = ArtistSummarySchema)]
    pub artist: CatalogueSummary,
}

/// Render summaries of `kind` under its plural key.
pub(crate) fn summaries_response(
    kind: CatalogueKind,
    summaries: Vec<CatalogueSummary>,
) -> HttpResponse {
    match kind {
        CatalogueKind::Song => HttpResponse::Ok().json(SongsResponse { songs: summaries }),
        CatalogueKind::Artist => HttpResponse::Ok().json(ArtistsResponse { artists: summaries }),
    }
}

async fn search(
    state: &HttpState,
    kind: CatalogueKind,
    query: String,
) -> ApiResult<HttpResponse> {
    let results = state.catalogue.search(kind, &query).await?;
    Ok(summaries_response(kind, results))
}

async fn lookup(state: &HttpState, kind: CatalogueKind, raw_id: String) -> ApiResult<HttpResponse> {
    let id = parse_catalogue_id(raw_id, ID)?;
    let response = match state.catalogue.lookup(kind, &id).await? {
        Some(summary) => match kind {
            CatalogueKind::Song => HttpResponse::Ok().json(SongResponse { song: summary }),
            CatalogueKind::Artist => HttpResponse::Ok().json(ArtistResponse { artist: summary }),
        },
        None => HttpResponse::Ok().json(MessageResponse::new(format!("{kind} with id {id} not found"))),
    };
    Ok(response)
}

/// Search songs by free text; at most five results.
#[utoipa::path(
    get,
    path = "/api/songs/search/{query}",
    params(("query" = String, Path, description = "Search keywords")),
    responses(
        (status = 200, description = "Matching songs", body = SongsResponse),
        (status = 400, description = "Blank query", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "searchSongs"
)]
#[get("/songs/search/{query}")]
pub async fn search_songs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    search(&state, CatalogueKind::Song, path.into_inner()).await
}

/// Fetch one song by catalogue id.
#[utoipa::path(
    get,
    path = "/api/songs/{id}",
    params(("id" = String, Path, description = "Catalogue id of the song")),
    responses(
        (status = 200, description = "The song, or a message when the catalogue does not know it", body = SongResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getSong"
)]
#[get("/songs/{id}")]
pub async fn get_song(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    lookup(&state, CatalogueKind::Song, path.into_inner()).await
}

/// Search artists by free text; at most five results.
#[utoipa::path(
    get,
    path = "/api/artists/search/{query}",
    params(("query" = String, Path, description = "Search keywords")),
    responses(
        (status = 200, description = "Matching artists", body = ArtistsResponse),
        (status = 400, description = "Blank query", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "searchArtists"
)]
#[get("/artists/search/{query}")]
pub async fn search_artists(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    search(&state, CatalogueKind::Artist, path.into_inner()).await
}

/// Fetch one artist by catalogue id.
#[utoipa::path(
    get,
    path = "/api/artists/{id}",
    params(("id" = String, Path, description = "Catalogue id of the artist")),
    responses(
        (status = 200, description = "The artist, or a message when the catalogue does not know it", body = ArtistResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getArtist"
)]
#[get("/artists/{id}")]
pub async fn get_artist(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    lookup(&state, CatalogueKind::Artist, path.into_inner()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        CatalogueSourceError, FixtureRosterRepository, MockCatalogueSource,
    };
    use crate::domain::{CatalogueService, TRACE_ID_HEADER};
    use crate::inbound::http::test_utils::{artist, fixture_state, test_app, track};
    use crate::middleware::Trace;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn get_json(catalogue: Vec<CatalogueSummary>, uri: &str) -> (StatusCode, Value) {
        let state = fixture_state(Arc::new(FixtureRosterRepository::missing()), catalogue);
        let app = actix_test::init_service(test_app(state)).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("JSON body"))
    }

    #[actix_web::test]
    async fn song_search_returns_track_summaries() {
        let (status, body) = get_json(
            vec![track("abc123", "Bohemian Rhapsody"), artist("def456", "Queen")],
            "/api/songs/search/bohemian%20rhapsody",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"songs": [{
                "title": "Bohemian Rhapsody",
                "artist": "Queen",
                "album": "A Night at the Opera",
                "length": "5:55",
                "url": "https://open.spotify.com/track/abc123",
                "id": "abc123"
            }]})
        );
    }

    #[actix_web::test]
    async fn artist_search_uses_the_artists_key() {
        let (status, body) =
            get_json(vec![artist("def456", "Queen")], "/api/artists/search/queen").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["artists"][0]["genres"], json!(["rock"]));
    }

    #[rstest]
    #[case("/api/songs/abc123", "song")]
    #[case("/api/artists/def456", "artist")]
    #[actix_web::test]
    async fn lookups_wrap_the_summary(#[case] uri: &str, #[case] key: &str) {
        let (status, body) = get_json(
            vec![track("abc123", "Bohemian Rhapsody"), artist("def456", "Queen")],
            uri,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get(key).is_some(), "missing {key} in {body}");
    }

    #[actix_web::test]
    async fn unknown_ids_answer_with_a_message() {
        let (status, body) = get_json(Vec::new(), "/api/songs/nope1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "song with id nope1 not found"}));
    }

    #[actix_web::test]
    async fn malformed_ids_are_rejected_before_lookup() {
        let (status, body) = get_json(Vec::new(), "/api/artists/not-an-id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "id");
    }

    #[actix_web::test]
    async fn blank_search_is_a_bad_request() {
        let (status, body) = get_json(Vec::new(), "/api/songs/search/%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn catalogue_timeouts_are_service_unavailable_with_trace_id() {
        let mut source = MockCatalogueSource::new();
        source
            .expect_search()
            .times(1)
            .returning(|_, _, _| Err(CatalogueSourceError::timeout("upstream took 10s")));
        let mut state = fixture_state(Arc::new(FixtureRosterRepository::missing()), Vec::new());
        state.catalogue = Arc::new(CatalogueService::new(Arc::new(source)));

        let app = actix_test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(actix_web::web::Data::new(state))
                .service(crate::inbound::http::routes::api_scope()),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/songs/search/queen")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace id header");
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "music catalogue unavailable");
        assert_eq!(body["traceId"], header.as_str());
    }
}
