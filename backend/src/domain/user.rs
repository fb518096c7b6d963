//! User roster entry and its validated fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CatalogueId, CatalogueKind};

/// Maximum allowed length for a user name, in characters.
pub const USER_NAME_MAX: usize = 64;

/// Validation errors returned by the user field constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email must look like local@domain without surrounding whitespace")]
    InvalidEmail,
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
}

/// Email address acting as the unique key of a roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use songbook::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("alice@example.com").is_ok());
    /// assert!(EmailAddress::new("alice").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if email.trim() != email || email.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(email))
            }
            _ => Err(UserValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Human readable name of a roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, UserValidationError> {
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Registered user and their favourite catalogue entries.
///
/// ## Invariants
/// - `email` is unique across the roster (enforced by the roster services).
/// - `songs` and `artists` never contain the same id twice.
///
/// The serialised form (`name`, `email`, `songs`, `artists`) is the on-disk
/// roster format. Stored names and emails are taken as written, so records
/// older than the field validators still load; only new input is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredUser")]
pub struct User {
    name: UserName,
    email: EmailAddress,
    songs: Vec<CatalogueId>,
    artists: Vec<CatalogueId>,
}

/// On-disk shape of a roster entry.
#[derive(Deserialize)]
struct StoredUser {
    name: String,
    email: String,
    #[serde(default)]
    songs: Vec<CatalogueId>,
    #[serde(default)]
    artists: Vec<CatalogueId>,
}

impl From<StoredUser> for User {
    fn from(stored: StoredUser) -> Self {
        Self {
            name: UserName(stored.name),
            email: EmailAddress(stored.email),
            songs: first_occurrences(stored.songs),
            artists: first_occurrences(stored.artists),
        }
    }
}

/// Drop repeated ids, keeping the first occurrence of each.
fn first_occurrences(ids: Vec<CatalogueId>) -> Vec<CatalogueId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

impl User {
    /// Create a freshly registered user with empty favourite lists.
    pub fn register(name: UserName, email: EmailAddress) -> Self {
        Self {
            name,
            email,
            songs: Vec::new(),
            artists: Vec::new(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Unique roster key.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Favourite ids of `kind`, in insertion order.
    pub fn favourites(&self, kind: CatalogueKind) -> &[CatalogueId] {
        match kind {
            CatalogueKind::Song => &self.songs,
            CatalogueKind::Artist => &self.artists,
        }
    }

    /// Whether `id` is already a favourite of `kind`.
    pub fn has_favourite(&self, kind: CatalogueKind, id: &CatalogueId) -> bool {
        self.favourites(kind).contains(id)
    }

    /// Replace name and email.
    pub fn update(&mut self, name: UserName, email: EmailAddress) {
        self.name = name;
        self.email = email;
    }

    /// Append `id` to the favourites of `kind`.
    ///
    /// Returns `false` without modifying the list when the id is already
    /// present.
    ///
    /// # Examples
    /// ```
    /// use songbook::domain::{CatalogueId, CatalogueKind, EmailAddress, User, UserName};
    ///
    /// let mut user = User::register(
    ///     UserName::new("Alice").unwrap(),
    ///     EmailAddress::new("alice@example.com").unwrap(),
    /// );
    /// let id = CatalogueId::new("abc123").unwrap();
    /// assert!(user.add_favourite(CatalogueKind::Song, id.clone()));
    /// assert!(!user.add_favourite(CatalogueKind::Song, id));
    /// ```
    pub fn add_favourite(&mut self, kind: CatalogueKind, id: CatalogueId) -> bool {
        if self.has_favourite(kind, &id) {
            return false;
        }
        self.favourites_mut(kind).push(id);
        true
    }

    /// Remove the matching entry from the favourites of `kind`.
    ///
    /// Returns `false` when the id was not a favourite. The relative order of
    /// the remaining entries is preserved.
    pub fn remove_favourite(&mut self, kind: CatalogueKind, id: &CatalogueId) -> bool {
        let list = self.favourites_mut(kind);
        match list.iter().position(|existing| existing == id) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    fn favourites_mut(&mut self, kind: CatalogueKind) -> &mut Vec<CatalogueId> {
        match kind {
            CatalogueKind::Song => &mut self.songs,
            CatalogueKind::Artist => &mut self.artists,
        }
    }
}
