//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{FixtureCatalogueSource, FixtureRosterRepository};
use crate::domain::{
    ArtistSummary, CatalogueId, CatalogueService, CatalogueSummary, EmailAddress,
    FavouritesService, RosterStore, TrackSummary, User, UserName, UserRosterService,
};
use crate::inbound::http::routes::api_scope;
use crate::inbound::http::state::HttpState;

/// Build state over real domain services and in-memory adapters.
pub fn fixture_state(
    repository: Arc<FixtureRosterRepository>,
    catalogue: Vec<CatalogueSummary>,
) -> HttpState {
    let store = RosterStore::new(repository);
    let source = Arc::new(FixtureCatalogueSource::new(catalogue));
    let users = Arc::new(UserRosterService::new(store.clone()));
    let favourites = Arc::new(FavouritesService::new(store, Arc::clone(&source)));
    HttpState::new(
        users.clone(),
        users,
        favourites.clone(),
        favourites,
        Arc::new(CatalogueService::new(source)),
    )
}

/// Application serving the `/api` scope with `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(api_scope())
}

pub fn user(name: &str, email: &str) -> User {
    User::register(
        UserName::new(name).expect("valid name"),
        EmailAddress::new(email).expect("valid email"),
    )
}

pub fn track(id: &str, title: &str) -> CatalogueSummary {
    CatalogueSummary::Song(TrackSummary {
        title: title.to_owned(),
        artist: "Queen".to_owned(),
        album: "A Night at the Opera".to_owned(),
        length: "5:55".to_owned(),
        url: format!("https://open.spotify.com/track/{id}"),
        id: CatalogueId::new(id).expect("valid id"),
    })
}

pub fn artist(id: &str, name: &str) -> CatalogueSummary {
    CatalogueSummary::Artist(ArtistSummary {
        name: name.to_owned(),
        genres: vec!["rock".to_owned()],
        url: format!("https://open.spotify.com/artist/{id}"),
        id: CatalogueId::new(id).expect("valid id"),
    })
}
