//! Port abstraction for roster persistence adapters and their errors.
//!
//! The roster is persisted as a whole collection: adapters load every user and
//! overwrite the full collection on save. Read-modify-write serialisation is
//! owned by [`crate::domain::RosterStore`], not by adapters.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::{EmailAddress, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by roster repository adapters.
    pub enum RosterPersistenceError {
        /// Reading or writing the backing store failed.
        Io { message: String } => "roster store I/O failed: {message}",
        /// Stored contents could not be decoded into users.
        Decode { message: String } => "roster store contents are invalid: {message}",
        /// Users could not be encoded for storage.
        Encode { message: String } => "roster could not be encoded: {message}",
    }
}

/// Whole-collection user store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Load every user, or `None` when the store has never been written.
    async fn load(&self) -> Result<Option<Vec<User>>, RosterPersistenceError>;

    /// Replace the stored collection with `users`.
    async fn save_all(&self, users: &[User]) -> Result<(), RosterPersistenceError>;

    /// Load every user, treating a missing store as an empty roster.
    async fn load_all(&self) -> Result<Vec<User>, RosterPersistenceError> {
        Ok(self.load().await?.unwrap_or_default())
    }

    /// Find a user by their unique email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, RosterPersistenceError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .find(|user| user.email() == email))
    }
}

/// In-memory roster used by tests and local runs without a roster file.
///
/// # Examples
/// ```
/// use songbook::domain::ports::{FixtureRosterRepository, RosterRepository};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repository = FixtureRosterRepository::missing();
/// assert!(repository.load().await.unwrap().is_none());
/// repository.save_all(&[]).await.unwrap();
/// assert_eq!(repository.load().await.unwrap(), Some(Vec::new()));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct FixtureRosterRepository {
    users: Mutex<Option<Vec<User>>>,
    saves: Mutex<usize>,
}

impl FixtureRosterRepository {
    /// A store that has never been written.
    pub fn missing() -> Self {
        Self::default()
    }

    /// A store holding `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(Some(users)),
            saves: Mutex::new(0),
        }
    }

    /// Current contents without going through the port.
    pub fn contents(&self) -> Option<Vec<User>> {
        lock(&self.users).clone()
    }

    /// Number of completed `save_all` calls.
    pub fn save_count(&self) -> usize {
        *lock(&self.saves)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl RosterRepository for FixtureRosterRepository {
    async fn load(&self) -> Result<Option<Vec<User>>, RosterPersistenceError> {
        Ok(self.contents())
    }

    async fn save_all(&self, users: &[User]) -> Result<(), RosterPersistenceError> {
        *lock(&self.users) = Some(users.to_vec());
        *lock(&self.saves) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserName;

    fn user(email: &str) -> User {
        User::register(
            UserName::new("Fixture").expect("valid name"),
            EmailAddress::new(email).expect("valid email"),
        )
    }

    #[tokio::test]
    async fn load_all_treats_missing_store_as_empty() {
        let repository = FixtureRosterRepository::missing();
        assert!(repository.load_all().await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn find_by_email_scans_the_collection() {
        let repository =
            FixtureRosterRepository::with_users(vec![user("a@example.com"), user("b@example.com")]);
        let email = EmailAddress::new("b@example.com").expect("valid email");

        let found = repository.find_by_email(&email).await.expect("lookup");
        assert_eq!(found.map(|u| u.email().clone()), Some(email));
    }

    #[tokio::test]
    async fn save_all_replaces_contents_and_counts_writes() {
        let repository = FixtureRosterRepository::with_users(vec![user("a@example.com")]);
        repository
            .save_all(&[user("c@example.com")])
            .await
            .expect("save");

        let contents = repository.contents().expect("store exists");
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].email().as_ref(), "c@example.com");
        assert_eq!(repository.save_count(), 1);
    }
}
