//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities for the user roster and the music
//! catalogue, plus the services implementing the driving ports. Types
//! document their invariants and serialisation contracts in their Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, EmailAddress, UserName: roster entries and their validated keys.
//! - CatalogueId, CatalogueKind, TrackSummary, ArtistSummary: catalogue view.
//! - AccessTokenCache: single-slot bearer token cache.
//! - RosterStore, RosterError: serialised roster access and its rejections.
//! - UserRosterService, FavouritesService, CatalogueService: use cases.

pub mod access_token;
pub mod catalogue;
pub mod catalogue_service;
pub mod error;
pub mod favourites_service;
pub mod ports;
pub mod roster;
pub mod trace_id;
pub mod user;
pub mod user_roster_service;

pub use self::access_token::{AccessToken, AccessTokenCache, DEFAULT_TOKEN_LIFETIME_SECONDS};
pub use self::catalogue::{
    ArtistSummary, CatalogueId, CatalogueIdError, CatalogueKind, CatalogueSummary, TrackSummary,
    format_duration,
};
pub use self::catalogue_service::{CatalogueService, DEFAULT_SEARCH_LIMIT};
pub use self::error::{Error, ErrorCode};
pub use self::favourites_service::FavouritesService;
pub use self::roster::{MissingStore, RosterError, RosterStore};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, USER_NAME_MAX, User, UserName, UserValidationError};
pub use self::user_roster_service::UserRosterService;
