use crate::{Result as DbErrorResult, SupabaseClient};

use um_core::{AgePatch, NewUser, User, UserId};

use async_trait::async_trait;

/// Storage operations on users.
///
/// Each method is a single pass-through call and returns the rows the
/// database reports as affected; an empty vector means nothing matched.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> DbErrorResult<Vec<User>>;

    async fn create(&self, user: &NewUser) -> DbErrorResult<Vec<User>>;

    async fn update_age(&self, id: UserId, patch: &AgePatch) -> DbErrorResult<Vec<User>>;

    async fn delete(&self, id: UserId) -> DbErrorResult<Vec<User>>;
}

/// `UserRepository` backed by a Supabase table.
#[derive(Debug, Clone)]
pub struct SupabaseUserRepository {
    client: SupabaseClient,
    table: String,
}

impl SupabaseUserRepository {
    pub fn new(client: SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl UserRepository for SupabaseUserRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        self.client.from(&self.table).select_all().await
    }

    async fn create(&self, user: &NewUser) -> DbErrorResult<Vec<User>> {
        self.client.from(&self.table).insert(user).await
    }

    async fn update_age(&self, id: UserId, patch: &AgePatch) -> DbErrorResult<Vec<User>> {
        self.client
            .from(&self.table)
            .update_eq("id", id, patch)
            .await
    }

    async fn delete(&self, id: UserId) -> DbErrorResult<Vec<User>> {
        self.client.from(&self.table).delete_eq("id", id).await
    }
}
