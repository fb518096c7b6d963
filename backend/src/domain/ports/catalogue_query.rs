//! Driving port for catalogue search and lookup.

use async_trait::async_trait;

use crate::domain::{CatalogueId, CatalogueKind, CatalogueSummary, Error};

/// Domain use-case port backing the song and artist endpoints.
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Search entries of `kind` by free text.
    async fn search(
        &self,
        kind: CatalogueKind,
        query: &str,
    ) -> Result<Vec<CatalogueSummary>, Error>;

    /// Resolve one entry; `None` when the catalogue does not know it.
    async fn lookup(
        &self,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<Option<CatalogueSummary>, Error>;
}
