use crate::UserStore;

use um_core::{User, UserId};

use std::fmt;

use log::error;

pub const EMPTY_LIST_MESSAGE: &str = "No users available. Please add a user.";

/// Read-only view over the store's users.
pub struct UserList<'a> {
    users: &'a [User],
}

impl<'a> UserList<'a> {
    pub fn new(users: &'a [User]) -> Self {
        Self { users }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Delete through the store and return the deleted rows.
    ///
    /// Failures are logged only.
    pub async fn delete(store: &mut UserStore, id: UserId) -> Option<Vec<User>> {
        match store.remove(id).await {
            Ok(deleted) => Some(deleted),
            Err(e) => {
                error!("Error deleting user {}: {}", id, e);
                None
            }
        }
    }
}

impl fmt::Display for UserList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.users.is_empty() {
            return write!(f, "{EMPTY_LIST_MESSAGE}");
        }

        writeln!(f, "Users")?;

        let mut lines = self.users.iter().peekable();
        while let Some(user) = lines.next() {
            write!(f, "{} ({} years old) - {}", user.name, user.age, user.email)?;
            if lines.peek().is_some() {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
