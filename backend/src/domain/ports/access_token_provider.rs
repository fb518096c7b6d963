//! Port handing out bearer tokens to catalogue adapters.

use async_trait::async_trait;

use crate::domain::AccessToken;

use super::AccessTokenError;

/// Source of currently valid bearer tokens.
///
/// Implemented by [`crate::domain::AccessTokenCache`]; catalogue adapters
/// depend on this port rather than on the cache itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Return a token that is valid at the time of the call.
    async fn access_token(&self) -> Result<AccessToken, AccessTokenError>;
}
