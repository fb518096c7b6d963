//! Songbook backend library modules.
//!
//! A user roster with favourite songs and artists, persisted as one JSON
//! file, plus search and lookup proxied to the Spotify Web API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
