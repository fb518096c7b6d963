//! Favourite songs and artists handlers.
//!
//! ```text
//! POST   /api/users/songs/{email}    {"id":"4u7EnebtmKWzUH433cf5Qv"}
//! GET    /api/users/songs/{email}
//! DELETE /api/users/songs/{email}    {"id":"4u7EnebtmKWzUH433cf5Qv"}
//! ```
//!
//! The `/api/users/artists/{email}` resource mirrors the songs one.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CatalogueKind;
use crate::inbound::http::ApiResult;
use crate::inbound::http::catalogue::{ArtistsResponse, SongsResponse, summaries_response};
use crate::inbound::http::error::{MessageResponse, roster_response};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::UserMessageResponse;
use crate::inbound::http::validation::{FieldName, parse_catalogue_id, parse_email};

const EMAIL: FieldName = FieldName::new("email");
const ID: FieldName = FieldName::new("id");

/// Body naming the catalogue entry to add or remove.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FavouriteRequest {
    #[schema(example = "4u7EnebtmKWzUH433cf5Qv")]
    pub id: String,
}

async fn add(
    state: &HttpState,
    kind: CatalogueKind,
    email: String,
    payload: FavouriteRequest,
) -> ApiResult<HttpResponse> {
    let email = parse_email(email, EMAIL)?;
    let id = parse_catalogue_id(payload.id, ID)?;
    let message = format!("{kind} {id} added for user {email}");
    let result = state.favourites.add_favourite(&email, kind, id).await;
    roster_response(result, |user| {
        HttpResponse::Created().json(UserMessageResponse { message, user })
    })
}

async fn remove(
    state: &HttpState,
    kind: CatalogueKind,
    email: String,
    payload: FavouriteRequest,
) -> ApiResult<HttpResponse> {
    let email = parse_email(email, EMAIL)?;
    let id = parse_catalogue_id(payload.id, ID)?;
    let result = state.favourites.remove_favourite(&email, kind, &id).await;
    roster_response(result, |user| {
        HttpResponse::Ok().json(UserMessageResponse {
            message: format!("{kind} {id} removed for user {email}"),
            user,
        })
    })
}

async fn list(state: &HttpState, kind: CatalogueKind, email: String) -> ApiResult<HttpResponse> {
    let email = parse_email(email, EMAIL)?;
    let result = state.favourites_query.list_favourites(&email, kind).await;
    roster_response(result, |summaries| summaries_response(kind, summaries))
}

/// Add a song to the user's favourites after checking the catalogue knows it.
#[utoipa::path(
    post,
    path = "/api/users/songs/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    request_body = FavouriteRequest,
    responses(
        (status = 201, description = "Song added", body = UserMessageResponse),
        (status = 200, description = "Not added; the message explains why", body = MessageResponse),
        (status = 400, description = "Invalid email or id", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "addFavouriteSong"
)]
#[post("/users/songs/{email}")]
pub async fn add_song(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<FavouriteRequest>,
) -> ApiResult<HttpResponse> {
    add(&state, CatalogueKind::Song, path.into_inner(), payload.into_inner()).await
}

/// List the user's favourite songs with fresh catalogue details.
#[utoipa::path(
    get,
    path = "/api/users/songs/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    responses(
        (status = 200, description = "Favourite songs, or a message when the user is unknown", body = SongsResponse),
        (status = 400, description = "Invalid email", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "listFavouriteSongs"
)]
#[get("/users/songs/{email}")]
pub async fn list_songs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    list(&state, CatalogueKind::Song, path.into_inner()).await
}

/// Remove a song from the user's favourites.
#[utoipa::path(
    delete,
    path = "/api/users/songs/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    request_body = FavouriteRequest,
    responses(
        (status = 200, description = "Song removed, or a message explaining why not", body = UserMessageResponse),
        (status = 400, description = "Invalid email or id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "removeFavouriteSong"
)]
#[delete("/users/songs/{email}")]
pub async fn remove_song(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<FavouriteRequest>,
) -> ApiResult<HttpResponse> {
    remove(&state, CatalogueKind::Song, path.into_inner(), payload.into_inner()).await
}

/// Add an artist to the user's favourites after checking the catalogue knows it.
#[utoipa::path(
    post,
    path = "/api/users/artists/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    request_body = FavouriteRequest,
    responses(
        (status = 201, description = "Artist added", body = UserMessageResponse),
        (status = 200, description = "Not added; the message explains why", body = MessageResponse),
        (status = 400, description = "Invalid email or id", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "addFavouriteArtist"
)]
#[post("/users/artists/{email}")]
pub async fn add_artist(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<FavouriteRequest>,
) -> ApiResult<HttpResponse> {
    add(&state, CatalogueKind::Artist, path.into_inner(), payload.into_inner()).await
}

/// List the user's favourite artists with fresh catalogue details.
#[utoipa::path(
    get,
    path = "/api/users/artists/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    responses(
        (status = 200, description = "Favourite artists, or a message when the user is unknown", body = ArtistsResponse),
        (status = 400, description = "Invalid email", body = ErrorSchema),
        (status = 503, description = "Music catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "listFavouriteArtists"
)]
#[get("/users/artists/{email}")]
pub async fn list_artists(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    list(&state, CatalogueKind::Artist, path.into_inner()).await
}

/// Remove an artist from the user's favourites.
#[utoipa::path(
    delete,
    path = "/api/users/artists/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    request_body = FavouriteRequest,
    responses(
        (status = 200, description = "Artist removed, or a message explaining why not", body = UserMessageResponse),
        (status = 400, description = "Invalid email or id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "removeFavouriteArtist"
)]
#[delete("/users/artists/{email}")]
pub async fn remove_artist(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<FavouriteRequest>,
) -> ApiResult<HttpResponse> {
    remove(&state, CatalogueKind::Artist, path.into_inner(), payload.into_inner()).await
}

#[cfg(test)]
#[path = "favourites_tests.rs"]
mod tests;
