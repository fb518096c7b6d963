//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **roster_file**: JSON file persistence of the user roster
//! - **spotify**: reqwest clients for the Spotify accounts service and Web API
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod roster_file;
pub mod spotify;
