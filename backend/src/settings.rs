//! Runtime settings loaded via OrthoConfig from the environment.
//!
//! `SPOTIFY_*` variables configure the catalogue clients and `SONGBOOK_*`
//! variables configure the HTTP listener and roster file. A `.env` file is
//! honoured by the binary before these are read.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::spotify::{DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL, SpotifyCredentials};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ROSTER_PATH: &str = "users_spotify.json";

/// Errors raised while turning loaded settings into runtime values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A required variable is unset or blank.
    #[error("{variable} must be set")]
    Missing { variable: &'static str },
    /// A URL variable does not parse.
    #[error("{variable} is not a valid URL: {source}")]
    InvalidUrl {
        variable: &'static str,
        #[source]
        source: url::ParseError,
    },
    /// The bind address does not parse.
    #[error("SONGBOOK_BIND_ADDR is not a socket address: {source}")]
    InvalidBindAddr {
        #[source]
        source: AddrParseError,
    },
}

fn required(value: Option<&str>, variable: &'static str) -> Result<String, SettingsError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(SettingsError::Missing { variable }),
    }
}

fn url_or_default(
    value: Option<&str>,
    default: &str,
    variable: &'static str,
) -> Result<Url, SettingsError> {
    Url::parse(value.unwrap_or(default))
        .map_err(|source| SettingsError::InvalidUrl { variable, source })
}

/// Spotify client credentials and endpoints.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SPOTIFY")]
pub struct SpotifySettings {
    /// Application client id.
    pub id: Option<String>,
    /// Application client secret.
    pub secret: Option<String>,
    /// Accounts service base URL override.
    pub accounts_url: Option<String>,
    /// Web API base URL override.
    pub api_url: Option<String>,
    /// Per-request timeout for both services.
    #[ortho_config(default = 10)]
    pub timeout_seconds: u64,
}

impl SpotifySettings {
    /// Client credentials; both `SPOTIFY_ID` and `SPOTIFY_SECRET` are required.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Missing`] naming the first unset variable.
    pub fn credentials(&self) -> Result<SpotifyCredentials, SettingsError> {
        let id = required(self.id.as_deref(), "SPOTIFY_ID")?;
        let secret = required(self.secret.as_deref(), "SPOTIFY_SECRET")?;
        Ok(SpotifyCredentials::new(id, secret))
    }

    /// Accounts service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override does not parse.
    pub fn accounts_url(&self) -> Result<Url, SettingsError> {
        url_or_default(
            self.accounts_url.as_deref(),
            DEFAULT_ACCOUNTS_URL,
            "SPOTIFY_ACCOUNTS_URL",
        )
    }

    /// Web API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override does not parse.
    pub fn api_url(&self) -> Result<Url, SettingsError> {
        url_or_default(self.api_url.as_deref(), DEFAULT_API_URL, "SPOTIFY_API_URL")
    }

    /// Request timeout, never below one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

/// HTTP listener and roster file location.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SONGBOOK")]
pub struct ServerSettings {
    /// Socket address to bind.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: String,
    /// Path of the JSON roster file, relative to the working directory.
    #[ortho_config(default = PathBuf::from(DEFAULT_ROSTER_PATH))]
    pub roster_path: PathBuf,
}

impl ServerSettings {
    /// Bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr { source })
    }

    /// Roster file path, defaulting to `users_spotify.json`.
    pub fn roster_path(&self) -> PathBuf {
        self.roster_path.clone()
    }
}
