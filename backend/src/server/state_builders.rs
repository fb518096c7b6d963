//! Builders wiring outbound adapters into the HTTP state.

use std::io;
use std::sync::Arc;

use songbook::domain::ports::AccessTokenProvider;
use songbook::domain::{
    AccessTokenCache, CatalogueService, FavouritesService, RosterStore, UserRosterService,
};
use songbook::inbound::http::state::HttpState;
use songbook::outbound::roster_file::JsonFileRosterRepository;
use songbook::outbound::spotify::{SpotifyAccountsClient, SpotifyCatalogueSource};
use tracing::info;

use super::ServerConfig;

fn startup_error(context: &str, error: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {error}"))
}

/// Build the roster services and Spotify clients behind the HTTP ports.
///
/// # Errors
///
/// Returns [`io::Error`] when the roster path is unusable or an HTTP client
/// cannot be constructed.
pub(crate) fn build_http_state(config: &ServerConfig) -> io::Result<HttpState> {
    let repository = Arc::new(
        JsonFileRosterRepository::new(&config.roster_path)
            .map_err(|error| startup_error("roster path", error))?,
    );
    info!(path = %repository.path().display(), "using roster file");

    let spotify = &config.spotify;
    let accounts = SpotifyAccountsClient::new(
        spotify.accounts_url.clone(),
        spotify.credentials.clone(),
        spotify.timeout,
    )
    .map_err(|error| startup_error("accounts client", error))?;
    let tokens: Arc<dyn AccessTokenProvider> = Arc::new(AccessTokenCache::new(Arc::new(accounts)));
    let source = Arc::new(
        SpotifyCatalogueSource::new(spotify.api_url.clone(), tokens, spotify.timeout)
            .map_err(|error| startup_error("catalogue client", error))?,
    );

    let store = RosterStore::new(repository);
    let users = Arc::new(UserRosterService::new(store.clone()));
    let favourites = Arc::new(FavouritesService::new(store, Arc::clone(&source)));
    Ok(HttpState::new(
        users.clone(),
        users,
        favourites.clone(),
        favourites,
        Arc::new(CatalogueService::new(source)),
    ))
}
