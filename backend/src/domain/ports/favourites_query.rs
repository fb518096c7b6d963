//! Driving port for reading a user's favourites with catalogue details.

use async_trait::async_trait;

use crate::domain::{CatalogueKind, CatalogueSummary, EmailAddress, RosterError};

/// Domain use-case port for favourite list reads.
#[async_trait]
pub trait FavouritesQuery: Send + Sync {
    /// Resolve the user's favourites of `kind` in stored order, skipping ids
    /// the catalogue no longer knows.
    async fn list_favourites(
        &self,
        email: &EmailAddress,
        kind: CatalogueKind,
    ) -> Result<Vec<CatalogueSummary>, RosterError>;
}
