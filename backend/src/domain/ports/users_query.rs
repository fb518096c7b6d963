//! Driving port for reading the user roster.
//!
//! Inbound adapters use this port to fetch users without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{EmailAddress, RosterError, User};

/// Domain use-case port for roster reads.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user in stored order.
    async fn list_users(&self) -> Result<Vec<User>, RosterError>;

    /// The user registered under `email`.
    async fn find_user(&self, email: &EmailAddress) -> Result<User, RosterError>;
}
