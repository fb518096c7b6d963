//! Catalogue identifiers and the normalised summaries returned to callers.
//!
//! Summaries are projections of upstream payloads. They are never persisted:
//! the roster only stores [`CatalogueId`]s and details are re-fetched on every
//! read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of catalogue entry a user can favourite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogueKind {
    /// A single track.
    Song,
    /// A performing artist.
    Artist,
}

impl CatalogueKind {
    /// Human readable noun used in messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Artist => "artist",
        }
    }
}

impl fmt::Display for CatalogueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Validation errors for [`CatalogueId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueIdError {
    #[error("catalogue id must not be empty")]
    Empty,
    #[error("catalogue id must contain only ASCII letters and digits")]
    InvalidCharacters,
}

/// Opaque upstream identifier (base-62 for the Spotify catalogue).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CatalogueId(String);

impl CatalogueId {
    /// Validate and construct a [`CatalogueId`].
    ///
    /// # Examples
    /// ```
    /// use songbook::domain::CatalogueId;
    ///
    /// assert!(CatalogueId::new("4uLU6hMCjMI75M1A2tKUQC").is_ok());
    /// assert!(CatalogueId::new("../tracks").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogueIdError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, CatalogueIdError> {
        if id.is_empty() {
            return Err(CatalogueIdError::Empty);
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CatalogueIdError::InvalidCharacters);
        }
        Ok(Self(id))
    }

    /// Extract the id from an upstream URI such as `spotify:track:<id>`.
    ///
    /// The id is the third colon-delimited segment.
    ///
    /// # Examples
    /// ```
    /// use songbook::domain::CatalogueId;
    ///
    /// let id = CatalogueId::from_uri("spotify:track:abc123").unwrap();
    /// assert_eq!(id.as_ref(), "abc123");
    /// ```
    pub fn from_uri(uri: &str) -> Result<Self, CatalogueIdError> {
        let segment = uri.split(':').nth(2).unwrap_or_default();
        Self::new(segment)
    }
}

impl AsRef<str> for CatalogueId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CatalogueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CatalogueId> for String {
    fn from(value: CatalogueId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CatalogueId {
    type Error = CatalogueIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Normalised projection of an upstream track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub title: String,
    /// Name of the first credited artist.
    pub artist: String,
    pub album: String,
    /// Duration rendered by [`format_duration`].
    pub length: String,
    pub url: String,
    pub id: CatalogueId,
}

/// Normalised projection of an upstream artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub name: String,
    pub genres: Vec<String>,
    pub url: String,
    pub id: CatalogueId,
}

/// Summary of either catalogue kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogueSummary {
    Song(TrackSummary),
    Artist(ArtistSummary),
}

impl CatalogueSummary {
    /// Upstream identifier of the summarised entry.
    pub fn id(&self) -> &CatalogueId {
        match self {
            Self::Song(track) => &track.id,
            Self::Artist(artist) => &artist.id,
        }
    }

    /// Kind of the summarised entry.
    pub fn kind(&self) -> CatalogueKind {
        match self {
            Self::Song(_) => CatalogueKind::Song,
            Self::Artist(_) => CatalogueKind::Artist,
        }
    }
}

/// Render a track duration as `minutes:seconds`.
///
/// Remaining seconds are rounded to the nearest whole second (ties to even)
/// and zero-padded only when the rounded value is below ten.
///
/// # Examples
/// ```
/// use songbook::domain::format_duration;
///
/// assert_eq!(format_duration(185_000), "3:05");
/// assert_eq!(format_duration(225_000), "3:45");
/// assert_eq!(format_duration(60_000), "1:00");
/// ```
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let remainder_ms = duration_ms % 60_000;
    let mut seconds = remainder_ms / 1_000;
    let fraction_ms = remainder_ms % 1_000;
    if fraction_ms > 500 || (fraction_ms == 500 && seconds % 2 == 1) {
        seconds += 1;
    }

    if seconds < 10 {
        format!("{minutes}:0{seconds}")
    } else {
        format!("{minutes}:{seconds}")
    }
}
