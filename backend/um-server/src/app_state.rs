use um_db::UserRepository;

use std::sync::Arc;

/// Shared state for HTTP handlers.
///
/// The repository is the only long-lived resource; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
