//! Route table for the `/api` scope.

use actix_web::{Scope, web};

use crate::inbound::http::catalogue::{get_artist, get_song, search_artists, search_songs};
use crate::inbound::http::favourites::{
    add_artist, add_song, list_artists, list_songs, remove_artist, remove_song,
};
use crate::inbound::http::users::{
    delete_user, get_user, list_users, register_user, update_user,
};

/// Every REST endpoint, mounted under `/api`.
///
/// Handlers expect [`crate::inbound::http::state::HttpState`] in app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use songbook::inbound::http::routes::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(list_users)
        .service(register_user)
        .service(list_songs)
        .service(add_song)
        .service(remove_song)
        .service(list_artists)
        .service(add_artist)
        .service(remove_artist)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(search_songs)
        .service(get_song)
        .service(search_artists)
        .service(get_artist)
}
