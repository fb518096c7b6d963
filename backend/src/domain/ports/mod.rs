//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`RosterRepository`, `CatalogueSource`, `CredentialExchange`,
//! `AccessTokenProvider`) are implemented by outbound adapters and ship a
//! `Fixture*` implementation plus a `mockall` mock under test. Driving ports
//! (`UsersQuery`, `UsersCommand`, `FavouritesQuery`, `FavouritesCommand`,
//! `CatalogueQuery`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod access_token_provider;
mod catalogue_query;
mod catalogue_source;
mod credential_exchange;
mod favourites_command;
mod favourites_query;
mod roster_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use access_token_provider::MockAccessTokenProvider;
pub use access_token_provider::AccessTokenProvider;
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use catalogue_source::MockCatalogueSource;
pub use catalogue_source::{CatalogueSource, CatalogueSourceError, FixtureCatalogueSource};
#[cfg(test)]
pub use credential_exchange::MockCredentialExchange;
pub use credential_exchange::{
    AccessTokenError, CredentialExchange, CredentialGrant, FixtureCredentialExchange,
};
pub use favourites_command::FavouritesCommand;
pub use favourites_query::FavouritesQuery;
#[cfg(test)]
pub use roster_repository::MockRosterRepository;
pub use roster_repository::{FixtureRosterRepository, RosterPersistenceError, RosterRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
