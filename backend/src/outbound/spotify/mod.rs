//! Spotify outbound adapters.
//!
//! [`SpotifyAccountsClient`] performs the client-credentials exchange and
//! [`SpotifyCatalogueSource`] searches and resolves tracks and artists with
//! the resulting bearer token. Both own transport details only: request
//! building, timeouts, status mapping and JSON decoding.

mod accounts;
mod catalogue;
mod dto;

use reqwest::Url;

pub use accounts::{SpotifyAccountsClient, SpotifyCredentials};
pub use catalogue::SpotifyCatalogueSource;

/// Production accounts service base URL.
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
/// Production Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Append path segments to `base`, keeping any path it already has.
fn endpoint(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().ok()?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Some(url)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

fn status_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    }
}
