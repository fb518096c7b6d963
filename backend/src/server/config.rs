//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use songbook::outbound::spotify::SpotifyCredentials;
use songbook::settings::{ServerSettings, SettingsError, SpotifySettings};
use url::Url;

/// Resolved settings for the Spotify clients.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub(crate) credentials: SpotifyCredentials,
    pub(crate) accounts_url: Url,
    pub(crate) api_url: Url,
    pub(crate) timeout: Duration,
}

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) roster_path: PathBuf,
    pub(crate) spotify: SpotifyConfig,
}

impl ServerConfig {
    /// Validate loaded settings into a server configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when credentials are missing or an address
    /// does not parse.
    pub fn from_settings(
        server: &ServerSettings,
        spotify: &SpotifySettings,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: server.bind_addr()?,
            roster_path: server.roster_path(),
            spotify: SpotifyConfig {
                credentials: spotify.credentials()?,
                accounts_url: spotify.accounts_url()?,
                api_url: spotify.api_url()?,
                timeout: spotify.timeout(),
            },
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
