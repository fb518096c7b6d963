//! Serialised access to the persisted user roster.
//!
//! Every mutation loads the full collection, applies a closure and writes the
//! result back while holding one async lock. Concurrent requests therefore
//! cannot interleave their read-modify-write cycles and lose updates.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::error;

use super::ports::{RosterPersistenceError, RosterRepository};
use super::{CatalogueId, CatalogueKind, EmailAddress, Error, User};

/// Outcomes of roster operations that are reported to callers as ordinary
/// answers rather than as faults.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    /// No user has the given email.
    #[error("user with email {email} not found")]
    UserNotFound { email: EmailAddress },
    /// Another user already has the given email.
    #[error("a user with email {email} already exists")]
    EmailTaken { email: EmailAddress },
    /// The catalogue does not know the id.
    #[error("{kind} with id {id} not found")]
    ItemNotFound { kind: CatalogueKind, id: CatalogueId },
    /// The id is already a favourite of the user.
    #[error("{kind} {id} is already a favourite of user {email}")]
    AlreadyFavourited {
        kind: CatalogueKind,
        id: CatalogueId,
        email: EmailAddress,
    },
    /// The id is not a favourite of the user.
    #[error("{kind} {id} is not a favourite of user {email}")]
    NotFavourited {
        kind: CatalogueKind,
        id: CatalogueId,
        email: EmailAddress,
    },
    /// The roster has never been written.
    #[error("user store not found")]
    StoreMissing,
    /// Persistence or upstream fault.
    #[error(transparent)]
    Fault(#[from] Error),
}

impl RosterError {
    /// Whether this is a domain rejection rather than a fault.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Fault(_))
    }
}

/// How a never-written roster is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingStore {
    /// Behave as an empty roster.
    Empty,
    /// Reject with [`RosterError::StoreMissing`].
    Reject,
}

fn persistence_fault(operation: &'static str, err: RosterPersistenceError) -> RosterError {
    error!(operation, error = %err, "roster persistence failed");
    RosterError::Fault(Error::internal(format!("roster {operation} failed")))
}

/// Roster repository guarded by a shared write lock.
pub struct RosterStore<R> {
    repository: Arc<R>,
    write_lock: Arc<Mutex<()>>,
}

impl<R> Clone for RosterStore<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<R: RosterRepository> RosterStore<R> {
    /// Wrap `repository`. Clones share the same lock.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self, policy: MissingStore) -> Result<Vec<User>, RosterError> {
        match policy {
            MissingStore::Empty => self
                .repository
                .load_all()
                .await
                .map_err(|err| persistence_fault("load", err)),
            MissingStore::Reject => match self.repository.load().await {
                Ok(Some(users)) => Ok(users),
                Ok(None) => Err(RosterError::StoreMissing),
                Err(err) => Err(persistence_fault("load", err)),
            },
        }
    }

    /// Current roster contents.
    pub async fn snapshot(&self, policy: MissingStore) -> Result<Vec<User>, RosterError> {
        self.load(policy).await
    }

    /// Find the user with `email`, failing with `UserNotFound` when absent.
    ///
    /// Under [`MissingStore::Reject`] an unknown email against a never-written
    /// store reports `StoreMissing` instead.
    pub async fn find(
        &self,
        email: &EmailAddress,
        policy: MissingStore,
    ) -> Result<User, RosterError> {
        let found = self
            .repository
            .find_by_email(email)
            .await
            .map_err(|err| persistence_fault("find", err))?;
        if let Some(user) = found {
            return Ok(user);
        }
        if policy == MissingStore::Reject {
            self.load(policy).await?;
        }
        Err(RosterError::UserNotFound {
            email: email.clone(),
        })
    }

    /// Apply `change` to the roster and persist the result.
    ///
    /// Nothing is written when `change` fails.
    pub async fn mutate<T, F>(&self, policy: MissingStore, change: F) -> Result<T, RosterError>
    where
        F: FnOnce(&mut Vec<User>) -> Result<T, RosterError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load(policy).await?;
        let outcome = change(&mut users)?;
        self.repository
            .save_all(&users)
            .await
            .map_err(|err| persistence_fault("save", err))?;
        Ok(outcome)
    }
}

/// Locate the user with `email` inside a loaded roster.
pub(crate) fn user_mut<'a>(
    users: &'a mut [User],
    email: &EmailAddress,
) -> Result<&'a mut User, RosterError> {
    users
        .iter_mut()
        .find(|user| user.email() == email)
        .ok_or_else(|| RosterError::UserNotFound {
            email: email.clone(),
        })
}
