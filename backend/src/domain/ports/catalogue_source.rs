//! Driven port for searching and resolving entries in the music catalogue.
//!
//! The upstream service is an opaque oracle: the domain only relies on the
//! normalised summaries defined in [`crate::domain::catalogue`].

use async_trait::async_trait;

use crate::domain::{CatalogueId, CatalogueKind, CatalogueSummary};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the catalogue.
    pub enum CatalogueSourceError {
        /// No bearer token could be obtained for the call.
        Unauthorised { message: String } =>
            "catalogue credentials unavailable: {message}",
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "catalogue transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "catalogue timeout: {message}",
        /// The catalogue answered with an unexpected status.
        Status { message: String } =>
            "catalogue rejected request: {message}",
        /// The response could not be decoded.
        Decode { message: String } =>
            "catalogue response decode failed: {message}",
    }
}

/// Port for catalogue search and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Search entries of `kind` matching `query`, returning at most `limit`
    /// summaries in upstream ranking order.
    async fn search(
        &self,
        kind: CatalogueKind,
        query: &str,
        limit: usize,
    ) -> Result<Vec<CatalogueSummary>, CatalogueSourceError>;

    /// Resolve one entry by id. `Ok(None)` means the catalogue does not know
    /// the id.
    async fn lookup(
        &self,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<Option<CatalogueSummary>, CatalogueSourceError>;
}

/// Fixture catalogue serving a fixed set of summaries.
///
/// Search matches case-insensitively on the track title or artist name.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalogueSource {
    entries: Vec<CatalogueSummary>,
}

impl FixtureCatalogueSource {
    /// Build a catalogue holding `entries`.
    pub fn new(entries: Vec<CatalogueSummary>) -> Self {
        Self { entries }
    }

    fn entries_of(&self, kind: CatalogueKind) -> impl Iterator<Item = &CatalogueSummary> {
        self.entries
            .iter()
            .filter(move |entry| entry.kind() == kind)
    }
}

fn display_name(summary: &CatalogueSummary) -> &str {
    match summary {
        CatalogueSummary::Song(track) => track.title.as_str(),
        CatalogueSummary::Artist(artist) => artist.name.as_str(),
    }
}

#[async_trait]
impl CatalogueSource for FixtureCatalogueSource {
    async fn search(
        &self,
        kind: CatalogueKind,
        query: &str,
        limit: usize,
    ) -> Result<Vec<CatalogueSummary>, CatalogueSourceError> {
        let needle = query.to_lowercase();
        Ok(self
            .entries_of(kind)
            .filter(|entry| display_name(entry).to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn lookup(
        &self,
        kind: CatalogueKind,
        id: &CatalogueId,
    ) -> Result<Option<CatalogueSummary>, CatalogueSourceError> {
        Ok(self
            .entries_of(kind)
            .find(|entry| entry.id() == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtistSummary, TrackSummary};

    fn catalogue() -> FixtureCatalogueSource {
        FixtureCatalogueSource::new(vec![
            CatalogueSummary::Song(TrackSummary {
                title: "Bohemian Rhapsody".to_owned(),
                artist: "Queen".to_owned(),
                album: "A Night at the Opera".to_owned(),
                length: "5:55".to_owned(),
                url: "https://open.spotify.com/track/abc123".to_owned(),
                id: CatalogueId::new("abc123").expect("valid id"),
            }),
            CatalogueSummary::Artist(ArtistSummary {
                name: "Queen".to_owned(),
                genres: vec!["rock".to_owned()],
                url: "https://open.spotify.com/artist/abc123".to_owned(),
                id: CatalogueId::new("abc123").expect("valid id"),
            }),
        ])
    }

    #[tokio::test]
    async fn lookup_is_scoped_by_kind() {
        let id = CatalogueId::new("abc123").expect("valid id");
        let artist = catalogue()
            .lookup(CatalogueKind::Artist, &id)
            .await
            .expect("lookup");
        assert_eq!(artist.map(|s| s.kind()), Some(CatalogueKind::Artist));
    }

    #[tokio::test]
    async fn search_matches_case_insensitively_and_respects_limit() {
        let source = catalogue();
        let hits = source
            .search(CatalogueKind::Song, "rhapsody", 5)
            .await
            .expect("search");
        assert_eq!(hits.len(), 1);

        let none = source
            .search(CatalogueKind::Song, "rhapsody", 0)
            .await
            .expect("search");
        assert!(none.is_empty());
    }
}
