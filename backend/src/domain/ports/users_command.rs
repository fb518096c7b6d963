//! Driving port for roster mutations.

use async_trait::async_trait;

use crate::domain::{EmailAddress, RosterError, User, UserName};

/// Domain use-case port for registering, updating and removing users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user with empty favourite lists.
    async fn register(&self, name: UserName, email: EmailAddress) -> Result<User, RosterError>;

    /// Rename the user registered under `current` and/or change their email.
    async fn update(
        &self,
        current: &EmailAddress,
        name: UserName,
        email: EmailAddress,
    ) -> Result<User, RosterError>;

    /// Remove the user registered under `email`.
    async fn remove(&self, email: &EmailAddress) -> Result<(), RosterError>;
}
