//! Driven port for the client-credentials exchange against the catalogue's
//! accounts service.

use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while obtaining an access token.
    pub enum AccessTokenError {
        /// Client credentials are missing or malformed.
        Configuration { message: String } =>
            "access token configuration invalid: {message}",
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "access token transport failed: {message}",
        /// The exchange exceeded its timeout.
        Timeout { message: String } =>
            "access token exchange timed out: {message}",
        /// The accounts service rejected the exchange.
        Rejected { message: String } =>
            "access token exchange rejected: {message}",
        /// The response could not be decoded.
        Decode { message: String } =>
            "access token response decode failed: {message}",
    }
}

/// Raw result of one credential exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialGrant {
    /// Bearer token issued by the accounts service.
    pub access_token: Zeroizing<String>,
    /// Lifetime in seconds, when the service reported one.
    pub expires_in: Option<u64>,
}

impl fmt::Debug for CredentialGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialGrant")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Port performing a client-credentials grant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialExchange: Send + Sync {
    /// Exchange the configured client credentials for a bearer token.
    async fn exchange(&self) -> Result<CredentialGrant, AccessTokenError>;
}

/// Fixture exchange issuing a constant token valid for one hour.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCredentialExchange;

#[async_trait]
impl CredentialExchange for FixtureCredentialExchange {
    async fn exchange(&self) -> Result<CredentialGrant, AccessTokenError> {
        Ok(CredentialGrant {
            access_token: Zeroizing::new("fixture-token".to_owned()),
            expires_in: Some(3600),
        })
    }
}
