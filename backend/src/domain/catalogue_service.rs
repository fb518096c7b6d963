//! Catalogue search and lookup domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{CatalogueQuery, CatalogueSource, CatalogueSourceError};
use crate::domain::{CatalogueId, CatalogueKind, CatalogueSummary, Error};

/// Number of results returned by a search when no limit is configured.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Map a catalogue failure to a transport-agnostic error.
///
/// Timeouts and transport failures are reported as unavailability; every
/// other failure is an internal error. Upstream detail is logged, not
/// returned.
pub(crate) fn map_catalogue_error(err: CatalogueSourceError) -> Error {
    error!(error = %err, "catalogue call failed");
    match err {
        CatalogueSourceError::Timeout { .. } | CatalogueSourceError::Transport { .. } => {
            Error::service_unavailable("music catalogue unavailable")
        }
        CatalogueSourceError::Unauthorised { .. }
        | CatalogueSourceError::Status { .. }
        | CatalogueSourceError::Decode { .. } => Error::internal("music catalogue request failed"),
    }
}

/// Catalogue service implementing [`CatalogueQuery`].
pub struct CatalogueService<S> {
    source: Arc<S>,
    limit: usize,
}

impl<S> CatalogueService<S> {
    /// Create a service returning [`DEFAULT_SEARCH_LIMIT`] results per search.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Override the search limit, clamped to `1..=DEFAULT_SEARCH_LIMIT`.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, DEFAULT_SEARCH_LIMIT);
        self
    }
}

#[async_trait]
impl<S> CatalogueQuery for CatalogueService<S>
where
    S: CatalogueSource,
{
    async fn search(
        &self,
        kind: CatalogueKind,
        query: &str,
    ) -> Result<Vec<CatalogueSummary>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::invalid_request("search query must not be empty"));
        }
        debug!(%kind, query, limit = self.limit, "searching catalogue");
        let mut results = self
            .source
            .search(kind, query, self.limit)
            .await
            .map_err(map_catalogue_error)?;
        results.truncate(self.limit);
        Ok(results)
    }

    async fn lookup(
        &self,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<Option<CatalogueSummary>, Error> {
        debug!(%kind, %id, "looking up catalogue entry");
        self.source
            .lookup(kind, id)
            .await
            .map_err(map_catalogue_error)
    }
}
