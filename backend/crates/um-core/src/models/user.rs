//! User entity - one row of the hosted `users` table.

use serde::{Deserialize, Serialize};

/// Database-assigned identity of a user row.
pub type UserId = i64;

/// A user as stored in the hosted database.
///
/// Extra columns returned by the database (e.g. `created_at`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: i32,
}
