//! DTOs for decoding Spotify accounts and Web API responses.
//!
//! The adapters decode into these transport DTOs first, then project them
//! onto the domain summaries in one pass.

use serde::Deserialize;

use crate::domain::{
    ArtistSummary, CatalogueId, CatalogueKind, CatalogueSummary, TrackSummary, format_duration,
};

#[derive(Deserialize)]
pub(super) struct TokenResponseDto {
    pub(super) access_token: String,
    pub(super) expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NamedDto {
    pub(super) name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ExternalUrlsDto {
    #[serde(default)]
    pub(super) spotify: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrackDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) artists: Vec<NamedDto>,
    pub(super) album: NamedDto,
    pub(super) duration_ms: u64,
    #[serde(default)]
    pub(super) external_urls: ExternalUrlsDto,
    pub(super) uri: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArtistDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) genres: Vec<String>,
    #[serde(default)]
    pub(super) external_urls: ExternalUrlsDto,
    pub(super) uri: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct PageDto<T> {
    #[serde(default = "Vec::new")]
    pub(super) items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    pub(super) tracks: Option<PageDto<TrackDto>>,
    pub(super) artists: Option<PageDto<ArtistDto>>,
}

fn id_from_uri(uri: &str) -> Result<CatalogueId, String> {
    CatalogueId::from_uri(uri).map_err(|error| format!("invalid uri {uri:?}: {error}"))
}

impl TrackDto {
    pub(super) fn into_summary(self) -> Result<CatalogueSummary, String> {
        let artist = self
            .artists
            .into_iter()
            .next()
            .map(|artist| artist.name)
            .ok_or_else(|| format!("track {:?} lists no artists", self.name))?;
        Ok(CatalogueSummary::Song(TrackSummary {
            id: id_from_uri(&self.uri)?,
            title: self.name,
            artist,
            album: self.album.name,
            length: format_duration(self.duration_ms),
            url: self.external_urls.spotify,
        }))
    }
}

impl ArtistDto {
    pub(super) fn into_summary(self) -> Result<CatalogueSummary, String> {
        Ok(CatalogueSummary::Artist(ArtistSummary {
            id: id_from_uri(&self.uri)?,
            name: self.name,
            genres: self.genres,
            url: self.external_urls.spotify,
        }))
    }
}

impl SearchResponseDto {
    /// Project the first `limit` items of the page matching `kind`.
    pub(super) fn into_summaries(
        self,
        kind: CatalogueKind,
        limit: usize,
    ) -> Result<Vec<CatalogueSummary>, String> {
        match kind {
            CatalogueKind::Song => self
                .tracks
                .map(|page| page.items)
                .unwrap_or_default()
                .into_iter()
                .take(limit)
                .map(TrackDto::into_summary)
                .collect(),
            CatalogueKind::Artist => self
                .artists
                .map(|page| page.items)
                .unwrap_or_default()
                .into_iter()
                .take(limit)
                .map(ArtistDto::into_summary)
                .collect(),
        }
    }
}

/// Decode a lookup payload. Empty bodies, `null` and `{}` mean "not found".
pub(super) fn decode_lookup(
    kind: CatalogueKind,
    body: &[u8],
) -> Result<Option<CatalogueSummary>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|error| format!("invalid JSON payload: {error}"))?;
    let is_empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if is_empty {
        return Ok(None);
    }

    let summary = match kind {
        CatalogueKind::Song => serde_json::from_value::<TrackDto>(value)
            .map_err(|error| format!("invalid track payload: {error}"))?
            .into_summary()?,
        CatalogueKind::Artist => serde_json::from_value::<ArtistDto>(value)
            .map_err(|error| format!("invalid artist payload: {error}"))?
            .into_summary()?,
    };
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: &str = r#"{
        "name": "Bohemian Rhapsody",
        "artists": [{ "name": "Queen" }, { "name": "Guest" }],
        "album": { "name": "A Night at the Opera" },
        "duration_ms": 354947,
        "external_urls": { "spotify": "https://open.spotify.com/track/4u7EnebtmKWzUH433cf5Qv" },
        "uri": "spotify:track:4u7EnebtmKWzUH433cf5Qv",
        "popularity": 80
    }"#;

    const ARTIST: &str = r#"{
        "name": "Queen",
        "genres": ["classic rock", "glam rock"],
        "external_urls": { "spotify": "https://open.spotify.com/artist/1dfeR4HaWDbWqFHLkxsg1d" },
        "uri": "spotify:artist:1dfeR4HaWDbWqFHLkxsg1d"
    }"#;

    #[test]
    fn projects_tracks_onto_summaries() {
        let summary = decode_lookup(CatalogueKind::Song, TRACK.as_bytes())
            .expect("decodes")
            .expect("present");
        let CatalogueSummary::Song(track) = summary else {
            panic!("expected a song");
        };
        assert_eq!(track.title, "Bohemian Rhapsody");
        assert_eq!(track.artist, "Queen");
        assert_eq!(track.album, "A Night at the Opera");
        assert_eq!(track.length, "5:55");
        assert_eq!(track.id.as_ref(), "4u7EnebtmKWzUH433cf5Qv");
    }

    #[test]
    fn projects_artists_onto_summaries() {
        let summary = decode_lookup(CatalogueKind::Artist, ARTIST.as_bytes())
            .expect("decodes")
            .expect("present");
        let CatalogueSummary::Artist(artist) = summary else {
            panic!("expected an artist");
        };
        assert_eq!(artist.genres, vec!["classic rock", "glam rock"]);
        assert_eq!(artist.id.as_ref(), "1dfeR4HaWDbWqFHLkxsg1d");
    }

    #[test]
    fn empty_payloads_mean_not_found() {
        for body in ["", "  \n", "null", "{}"] {
            let decoded = decode_lookup(CatalogueKind::Song, body.as_bytes()).expect("decodes");
            assert!(decoded.is_none(), "{body:?} should be not found");
        }
    }

    #[test]
    fn malformed_uris_are_decode_failures() {
        let body = TRACK.replace("spotify:track:4u7EnebtmKWzUH433cf5Qv", "broken");
        assert!(decode_lookup(CatalogueKind::Song, body.as_bytes()).is_err());
    }

    #[test]
    fn search_takes_only_the_requested_kind_and_limit() {
        let body = format!(
            r#"{{"tracks": {{"items": [{TRACK}, {TRACK}, {TRACK}]}}, "artists": {{"items": [{ARTIST}]}}}}"#
        );
        let decoded: SearchResponseDto = serde_json::from_str(&body).expect("decodes");
        let songs = decoded
            .into_summaries(CatalogueKind::Song, 2)
            .expect("projects");
        assert_eq!(songs.len(), 2);
        assert!(songs.iter().all(|s| s.kind() == CatalogueKind::Song));
    }

    #[test]
    fn search_without_a_page_is_empty() {
        let decoded: SearchResponseDto = serde_json::from_str("{}").expect("decodes");
        let artists = decoded
            .into_summaries(CatalogueKind::Artist, 5)
            .expect("projects");
        assert!(artists.is_empty());
    }
}
