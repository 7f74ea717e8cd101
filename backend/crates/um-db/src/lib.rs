pub mod connection;
pub mod error;
pub mod repositories;


pub use connection::supabase_client::{SupabaseClient, TableQuery};
pub use error::{DbError, Result};
pub use repositories::user_repository::{SupabaseUserRepository, UserRepository};
