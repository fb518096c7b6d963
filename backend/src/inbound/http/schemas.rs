//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The music catalogue could not be reached in time.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "email: email must not be empty")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// Favourites are stored as catalogue ids only.
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "Alice")]
    name: String,
    #[schema(example = "alice@example.com")]
    email: String,
    /// Favourite song ids in insertion order.
    #[schema(example = json!(["4u7EnebtmKWzUH433cf5Qv"]))]
    songs: Vec<String>,
    /// Favourite artist ids in insertion order.
    artists: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::TrackSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TrackSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TrackSummarySchema {
    #[schema(example = "Bohemian Rhapsody")]
    title: String,
    /// First credited artist.
    #[schema(example = "Queen")]
    artist: String,
    #[schema(example = "A Night at the Opera")]
    album: String,
    /// Duration rendered as `m:ss`.
    #[schema(example = "5:55")]
    length: String,
    #[schema(example = "https://open.spotify.com/track/4u7EnebtmKWzUH433cf5Qv")]
    url: String,
    #[schema(example = "4u7EnebtmKWzUH433cf5Qv")]
    id: String,
}

/// OpenAPI schema for [`crate::domain::ArtistSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ArtistSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ArtistSummarySchema {
    #[schema(example = "Queen")]
    name: String,
    #[schema(example = json!(["classic rock", "glam rock"]))]
    genres: Vec<String>,
    #[schema(example = "https://open.spotify.com/artist/1dfeR4HaWDbWqFHLkxsg1d")]
    url: String,
    #[schema(example = "1dfeR4HaWDbWqFHLkxsg1d")]
    id: String,
}
