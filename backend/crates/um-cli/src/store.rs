//! Session state for the user list.
//!
//! `UserStore` owns the only in-memory copy of the users. Every mutation
//! goes to the server first and then refetches the whole list, so views
//! built from `users()` never drift from what the server holds. A failed
//! refetch does not undo a mutation the server already applied.

use crate::{CliClientResult, Client};

use um_core::{CreateUserRequest, User, UserId};

use log::{debug, warn};

pub struct UserStore {
    client: Client,
    users: Vec<User>,
}

impl UserStore {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            users: Vec::new(),
        }
    }

    /// Users as of the last successful fetch
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Replace the local list with the server's.
    ///
    /// On error the previous list is kept.
    pub async fn refresh(&mut self) -> CliClientResult<&[User]> {
        self.users = self.client.list_users().await?;
        debug!("Fetched {} users", self.users.len());
        Ok(&self.users)
    }

    pub async fn add(&mut self, user: &CreateUserRequest) -> CliClientResult<User> {
        let created = self.client.create_user(user).await?;
        self.refresh_after("create").await;
        Ok(created)
    }

    pub async fn update_age(&mut self, id: UserId, age: i32) -> CliClientResult<Vec<User>> {
        let updated = self.client.update_user_age(id, age).await?;
        self.refresh_after("update").await;
        Ok(updated)
    }

    pub async fn remove(&mut self, id: UserId) -> CliClientResult<Vec<User>> {
        let deleted = self.client.delete_user(id).await?;
        self.refresh_after("delete").await;
        Ok(deleted)
    }

    /// Refetch after a mutation that already succeeded on the server.
    ///
    /// The mutation's result is still reported; the stale list stays until
    /// the next successful refresh.
    async fn refresh_after(&mut self, action: &str) {
        if let Err(e) = self.refresh().await {
            warn!("Failed to refresh users after {action}: {e}");
        }
    }
}
