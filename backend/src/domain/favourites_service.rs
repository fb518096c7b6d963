//! Favourite songs and artists domain service.
//!
//! Insertions are validated against the catalogue before the roster is
//! touched. The lookup runs outside the roster lock; the user is then
//! re-read under the lock, so a user removed in the meantime is reported as
//! missing instead of being resurrected.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::catalogue_service::map_catalogue_error;
use crate::domain::ports::{CatalogueSource, FavouritesCommand, FavouritesQuery, RosterRepository};
use crate::domain::roster::user_mut;
use crate::domain::{
    CatalogueId, CatalogueKind, CatalogueSummary, EmailAddress, MissingStore, RosterError,
    RosterStore, User,
};

/// Favourites service implementing [`FavouritesCommand`] and
/// [`FavouritesQuery`].
pub struct FavouritesService<R, S> {
    store: RosterStore<R>,
    catalogue: Arc<S>,
}

impl<R, S> FavouritesService<R, S> {
    /// Create a service over `store`, validating ids with `catalogue`.
    pub fn new(store: RosterStore<R>, catalogue: Arc<S>) -> Self {
        Self { store, catalogue }
    }
}

impl<R, S> FavouritesService<R, S>
where
    S: CatalogueSource,
{
    async fn resolve(
        &self,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<Option<CatalogueSummary>, RosterError> {
        self.catalogue
            .lookup(kind, id)
            .await
            .map_err(|err| RosterError::Fault(map_catalogue_error(err)))
    }
}

#[async_trait]
impl<R, S> FavouritesCommand for FavouritesService<R, S>
where
    R: RosterRepository,
    S: CatalogueSource,
{
    async fn add_favourite(
        &self,
        email: &EmailAddress,
        kind: CatalogueKind,
        id: CatalogueId,
    ) -> Result<User, RosterError> {
        self.store.find(email, MissingStore::Reject).await?;
        if self.resolve(kind, &id).await?.is_none() {
            return Err(RosterError::ItemNotFound { kind, id });
        }

        let target = email.clone();
        let user = self
            .store
            .mutate(MissingStore::Reject, move |users| {
                let user = user_mut(users, &target)?;
                if !user.add_favourite(kind, id.clone()) {
                    return Err(RosterError::AlreadyFavourited {
                        kind,
                        id,
                        email: target,
                    });
                }
                Ok(user.clone())
            })
            .await?;
        info!(%email, %kind, "added favourite");
        Ok(user)
    }

    async fn remove_favourite(
        &self,
        email: &EmailAddress,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<User, RosterError> {
        let target = email.clone();
        let id = id.clone();
        let user = self
            .store
            .mutate(MissingStore::Reject, move |users| {
                let user = user_mut(users, &target)?;
                if !user.remove_favourite(kind, &id) {
                    return Err(RosterError::NotFavourited {
                        kind,
                        id,
                        email: target,
                    });
                }
                Ok(user.clone())
            })
            .await?;
        info!(%email, %kind, "removed favourite");
        Ok(user)
    }
}

#[async_trait]
impl<R, S> FavouritesQuery for FavouritesService<R, S>
where
    R: RosterRepository,
    S: CatalogueSource,
{
    async fn list_favourites(
        &self,
        email: &EmailAddress,
        kind: CatalogueKind,
    ) -> Result<Vec<CatalogueSummary>, RosterError> {
        let user = self.store.find(email, MissingStore::Reject).await?;
        let mut summaries = Vec::with_capacity(user.favourites(kind).len());
        for id in user.favourites(kind) {
            match self.resolve(kind, id).await? {
                Some(summary) => summaries.push(summary),
                None => warn!(%email, %kind, %id, "skipping favourite the catalogue no longer resolves"),
            }
        }
        Ok(summaries)
    }
}

#[cfg(test)]
#[path = "favourites_service_tests.rs"]
mod tests;
