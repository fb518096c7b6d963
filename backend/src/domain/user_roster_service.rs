//! User roster domain service.
//!
//! Implements the user driving ports over the [`RosterStore`]. Reads treat a
//! never-written store as an empty roster; the first registration creates it.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{RosterRepository, UsersCommand, UsersQuery};
use crate::domain::roster::user_mut;
use crate::domain::{EmailAddress, MissingStore, RosterError, RosterStore, User, UserName};

/// Roster service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserRosterService<R> {
    store: RosterStore<R>,
}

impl<R> UserRosterService<R> {
    /// Create a service over `store`.
    pub fn new(store: RosterStore<R>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<R> UsersQuery for UserRosterService<R>
where
    R: RosterRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        self.store.snapshot(MissingStore::Empty).await
    }

    async fn find_user(&self, email: &EmailAddress) -> Result<User, RosterError> {
        self.store.find(email, MissingStore::Empty).await
    }
}

#[async_trait]
impl<R> UsersCommand for UserRosterService<R>
where
    R: RosterRepository,
{
    async fn register(&self, name: UserName, email: EmailAddress) -> Result<User, RosterError> {
        let user = self
            .store
            .mutate(MissingStore::Empty, move |users| {
                if users.iter().any(|user| user.email() == &email) {
                    return Err(RosterError::EmailTaken { email });
                }
                let user = User::register(name, email);
                users.push(user.clone());
                Ok(user)
            })
            .await?;
        info!(email = %user.email(), "registered user");
        Ok(user)
    }

    async fn update(
        &self,
        current: &EmailAddress,
        name: UserName,
        email: EmailAddress,
    ) -> Result<User, RosterError> {
        let current = current.clone();
        let user = self
            .store
            .mutate(MissingStore::Empty, move |users| {
                user_mut(users, &current)?;
                let taken = users
                    .iter()
                    .any(|user| user.email() == &email && user.email() != &current);
                if taken {
                    return Err(RosterError::EmailTaken { email });
                }
                let user = user_mut(users, &current)?;
                user.update(name, email);
                Ok(user.clone())
            })
            .await?;
        info!(email = %user.email(), "updated user");
        Ok(user)
    }

    async fn remove(&self, email: &EmailAddress) -> Result<(), RosterError> {
        let target = email.clone();
        self.store
            .mutate(MissingStore::Empty, move |users| {
                let index = users
                    .iter()
                    .position(|user| user.email() == &target)
                    .ok_or_else(|| RosterError::UserNotFound {
                        email: target.clone(),
                    })?;
                users.remove(index);
                Ok(())
            })
            .await?;
        info!(%email, "removed user");
        Ok(())
    }
}
