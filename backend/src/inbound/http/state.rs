//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueQuery, FavouritesCommand, FavouritesQuery, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub favourites: Arc<dyn FavouritesCommand>,
    pub favourites_query: Arc<dyn FavouritesQuery>,
    pub catalogue: Arc<dyn CatalogueQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use songbook::domain::ports::{FixtureCatalogueSource, FixtureRosterRepository};
    /// use songbook::domain::{CatalogueService, FavouritesService, RosterStore, UserRosterService};
    /// use songbook::inbound::http::state::HttpState;
    ///
    /// let store = RosterStore::new(Arc::new(FixtureRosterRepository::default()));
    /// let source = Arc::new(FixtureCatalogueSource::default());
    /// let users = Arc::new(UserRosterService::new(store.clone()));
    /// let favourites = Arc::new(FavouritesService::new(store, source.clone()));
    /// let state = HttpState::new(
    ///     users.clone(),
    ///     users,
    ///     favourites.clone(),
    ///     favourites,
    ///     Arc::new(CatalogueService::new(source)),
    /// );
    /// let _ = state.catalogue.clone();
    /// ```
    pub fn new(
        users: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
        favourites: Arc<dyn FavouritesCommand>,
        favourites_query: Arc<dyn FavouritesQuery>,
        catalogue: Arc<dyn CatalogueQuery>,
    ) -> Self {
        Self {
            users,
            users_command,
            favourites,
            favourites_query,
            catalogue,
        }
    }
}
