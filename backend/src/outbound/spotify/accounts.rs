//! Reqwest-backed client-credentials exchange against the Spotify accounts
//! service.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::TokenResponseDto;
use super::{endpoint, status_message};
use crate::domain::ports::{AccessTokenError, CredentialExchange, CredentialGrant};

/// Application credentials registered with Spotify.
#[derive(Clone)]
pub struct SpotifyCredentials {
    client_id: String,
    client_secret: Zeroizing<String>,
}

impl SpotifyCredentials {
    /// Wrap a client id and secret. The secret is wiped on drop.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Zeroizing::new(client_secret.into()),
        }
    }
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Credential exchange posting `grant_type=client_credentials` to
/// `{accounts}/api/token` with HTTP basic authentication.
pub struct SpotifyAccountsClient {
    client: Client,
    accounts_url: Url,
    credentials: SpotifyCredentials,
}

impl SpotifyAccountsClient {
    /// Build a client using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        accounts_url: Url,
        credentials: SpotifyCredentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            accounts_url,
            credentials,
        })
    }
}

#[async_trait]
impl CredentialExchange for SpotifyAccountsClient {
    async fn exchange(&self) -> Result<CredentialGrant, AccessTokenError> {
        if self.credentials.client_id.is_empty() || self.credentials.client_secret.is_empty() {
            return Err(AccessTokenError::configuration(
                "client id and secret must be set",
            ));
        }
        let url = endpoint(&self.accounts_url, &["api", "token"]).ok_or_else(|| {
            AccessTokenError::configuration(format!(
                "accounts url {} cannot carry a path",
                self.accounts_url
            ))
        })?;

        debug!(%url, "requesting client credentials token");
        let response = self
            .client
            .post(url)
            .basic_auth(
                &self.credentials.client_id,
                Some(self.credentials.client_secret.as_str()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let decoded: TokenResponseDto = serde_json::from_slice(&body).map_err(|error| {
            AccessTokenError::decode(format!("invalid token payload: {error}"))
        })?;
        if decoded.access_token.is_empty() {
            return Err(AccessTokenError::decode("token payload has an empty access_token"));
        }
        Ok(CredentialGrant {
            access_token: Zeroizing::new(decoded.access_token),
            expires_in: decoded.expires_in,
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> AccessTokenError {
    if error.is_timeout() {
        AccessTokenError::timeout(error.to_string())
    } else {
        AccessTokenError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AccessTokenError {
    let message = status_message(status, body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AccessTokenError::timeout(message)
        }
        _ => AccessTokenError::rejected(message),
    }
}
