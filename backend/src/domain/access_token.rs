//! Single-slot, time-bounded cache for catalogue bearer tokens.
//!
//! The cache is an explicit object owned by the process context and injected
//! into the catalogue adapter. The check-then-refresh sequence runs under one
//! async mutex, so concurrent callers never trigger duplicate exchanges.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::{Clock, DefaultClock};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::ports::{AccessTokenError, AccessTokenProvider, CredentialExchange};

/// Token lifetime assumed when the accounts service omits `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME_SECONDS: u64 = 3600;

/// Bearer token and the instant it stops being valid.
///
/// The token text is wiped from memory when the last copy is dropped and is
/// never rendered by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: Zeroizing<String>,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Build a token valid until `expires_at` (exclusive).
    pub fn new(secret: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
            expires_at,
        }
    }

    /// Token text for the `Authorization` header.
    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }

    /// Expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token may still be used at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Lazily refreshed access token cache.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use songbook::domain::AccessTokenCache;
/// use songbook::domain::ports::{AccessTokenProvider, FixtureCredentialExchange};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let cache = AccessTokenCache::new(Arc::new(FixtureCredentialExchange));
/// let first = cache.access_token().await.unwrap();
/// let second = cache.access_token().await.unwrap();
/// assert_eq!(first, second);
/// # });
/// ```
pub struct AccessTokenCache<E, C = DefaultClock> {
    exchange: Arc<E>,
    clock: Arc<C>,
    slot: Mutex<Option<AccessToken>>,
}

impl<E> AccessTokenCache<E, DefaultClock> {
    /// Create an empty cache using the system clock.
    pub fn new(exchange: Arc<E>) -> Self {
        Self::with_clock(exchange, Arc::new(DefaultClock))
    }
}

impl<E, C> AccessTokenCache<E, C> {
    /// Create an empty cache reading time from `clock`.
    pub fn with_clock(exchange: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            exchange,
            clock,
            slot: Mutex::new(None),
        }
    }
}

fn expiry_after(now: DateTime<Utc>, lifetime_seconds: u64) -> DateTime<Utc> {
    i64::try_from(lifetime_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[async_trait]
impl<E, C> AccessTokenProvider for AccessTokenCache<E, C>
where
    E: CredentialExchange,
    C: Clock + Send + Sync,
{
    async fn access_token(&self) -> Result<AccessToken, AccessTokenError> {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref() {
            if token.is_valid_at(self.clock.utc()) {
                return Ok(token.clone());
            }
        }

        *slot = None;
        debug!("exchanging client credentials for a new access token");
        let grant = self.exchange.exchange().await.inspect_err(|error| {
            warn!(%error, "access token exchange failed");
        })?;

        let lifetime = grant
            .expires_in
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECONDS);
        let token = AccessToken {
            secret: grant.access_token,
            expires_at: expiry_after(self.clock.utc(), lifetime),
        };
        debug!(expires_at = %token.expires_at, "cached new access token");
        *slot = Some(token.clone());
        Ok(token)
    }
}
