//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler under `inbound::http` together with the
//! schema wrappers that describe domain types without coupling them to
//! utoipa. The document is served by Swagger UI in debug builds and printed
//! by `cargo run --bin openapi-dump`.

use crate::inbound::http::catalogue::{
    ArtistResponse, ArtistsResponse, SongResponse, SongsResponse,
};
use crate::inbound::http::error::MessageResponse;
use crate::inbound::http::favourites::FavouriteRequest;
use crate::inbound::http::schemas::{
    ArtistSummarySchema, ErrorCodeSchema, ErrorSchema, TrackSummarySchema, UserSchema,
};
use crate::inbound::http::users::{
    UserMessageResponse, UserRequest, UserResponse, UsersResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Songbook API",
        description = "User roster with favourite songs and artists, backed by the Spotify catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::catalogue::search_songs,
        crate::inbound::http::catalogue::get_song,
        crate::inbound::http::catalogue::search_artists,
        crate::inbound::http::catalogue::get_artist,
        crate::inbound::http::favourites::add_song,
        crate::inbound::http::favourites::list_songs,
        crate::inbound::http::favourites::remove_song,
        crate::inbound::http::favourites::add_artist,
        crate::inbound::http::favourites::list_artists,
        crate::inbound::http::favourites::remove_artist,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        TrackSummarySchema,
        ArtistSummarySchema,
        ErrorSchema,
        ErrorCodeSchema,
        MessageResponse,
        UserRequest,
        UserResponse,
        UsersResponse,
        UserMessageResponse,
        FavouriteRequest,
        SongsResponse,
        SongResponse,
        ArtistsResponse,
        ArtistResponse,
    )),
    tags(
        (name = "users", description = "Roster of registered users"),
        (name = "favourites", description = "Favourite songs and artists per user"),
        (name = "catalogue", description = "Search and lookup in the music catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
