//! Reqwest-backed Spotify Web API catalogue adapter.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{SearchResponseDto, decode_lookup};
use super::{endpoint, status_message};
use crate::domain::ports::{
    AccessTokenError, AccessTokenProvider, CatalogueSource, CatalogueSourceError,
};
use crate::domain::{CatalogueId, CatalogueKind, CatalogueSummary};

/// Catalogue source calling the Spotify Web API with a cached bearer token.
pub struct SpotifyCatalogueSource {
    client: Client,
    api_url: Url,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl SpotifyCatalogueSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        api_url: Url,
        tokens: Arc<dyn AccessTokenProvider>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            tokens,
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, CatalogueSourceError> {
        endpoint(&self.api_url, segments).ok_or_else(|| {
            CatalogueSourceError::transport(format!(
                "api url {} cannot carry a path",
                self.api_url
            ))
        })
    }

    async fn get(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<(StatusCode, Vec<u8>), CatalogueSourceError> {
        let token = self
            .tokens
            .access_token()
            .await
            .map_err(map_token_error)?;
        debug!(%url, "calling catalogue");
        let response = self
            .client
            .get(url)
            .bearer_auth(token.secret())
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok((status, body.to_vec()))
    }
}

/// Upstream search `type` parameter.
fn search_type(kind: CatalogueKind) -> &'static str {
    match kind {
        CatalogueKind::Song => "track",
        CatalogueKind::Artist => "artist",
    }
}

/// Upstream lookup collection path.
fn lookup_collection(kind: CatalogueKind) -> &'static str {
    match kind {
        CatalogueKind::Song => "tracks",
        CatalogueKind::Artist => "artists",
    }
}

#[async_trait]
impl CatalogueSource for SpotifyCatalogueSource {
    async fn search(
        &self,
        kind: CatalogueKind,
        query: &str,
        limit: usize,
    ) -> Result<Vec<CatalogueSummary>, CatalogueSourceError> {
        let url = self.url(&["search"])?;
        let params = [
            ("q", query.to_owned()),
            ("type", search_type(kind).to_owned()),
            ("limit", limit.to_string()),
        ];
        let (status, body) = self.get(url, &params).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }

        let decoded: SearchResponseDto = serde_json::from_slice(&body).map_err(|error| {
            CatalogueSourceError::decode(format!("invalid search payload: {error}"))
        })?;
        decoded
            .into_summaries(kind, limit)
            .map_err(CatalogueSourceError::decode)
    }

    async fn lookup(
        &self,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<Option<CatalogueSummary>, CatalogueSourceError> {
        let url = self.url(&[lookup_collection(kind), id.as_ref()])?;
        let (status, body) = self.get(url, &[]).await?;
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            debug!(%kind, %id, %status, "catalogue does not know the id");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        decode_lookup(kind, &body).map_err(CatalogueSourceError::decode)
    }
}

/// Token timeouts and transport failures keep their class; the rest are auth failures.
fn map_token_error(error: AccessTokenError) -> CatalogueSourceError {
    let message = error.to_string();
    match error {
        AccessTokenError::Timeout { .. } => CatalogueSourceError::timeout(message),
        AccessTokenError::Transport { .. } => CatalogueSourceError::transport(message),
        AccessTokenError::Configuration { .. }
        | AccessTokenError::Rejected { .. }
        | AccessTokenError::Decode { .. } => CatalogueSourceError::unauthorised(message),
    }
}

fn map_transport_error(error: reqwest::Error) -> CatalogueSourceError {
    if error.is_timeout() {
        CatalogueSourceError::timeout(error.to_string())
    } else {
        CatalogueSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CatalogueSourceError {
    let message = status_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CatalogueSourceError::unauthorised(message)
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CatalogueSourceError::timeout(message)
        }
        _ => CatalogueSourceError::status(message),
    }
}
