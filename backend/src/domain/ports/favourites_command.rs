//! Driving port for editing a user's favourite songs and artists.

use async_trait::async_trait;

use crate::domain::{CatalogueId, CatalogueKind, EmailAddress, RosterError, User};

/// Domain use-case port for favourite list mutations.
#[async_trait]
pub trait FavouritesCommand: Send + Sync {
    /// Add `id` to the user's favourites once the catalogue resolves it.
    async fn add_favourite(
        &self,
        email: &EmailAddress,
        kind: CatalogueKind,
        id: CatalogueId,
    ) -> Result<User, RosterError>;

    /// Remove `id` from the user's favourites.
    async fn remove_favourite(
        &self,
        email: &EmailAddress,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<User, RosterError>;
}
