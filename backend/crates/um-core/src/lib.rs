pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::age_input::AgeInput;
pub use models::age_patch::{AgePatch, UpdateUserRequest};
pub use models::new_user::{CreateUserRequest, NewUser};
pub use models::user::{User, UserId};
