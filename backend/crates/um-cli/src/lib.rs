//! um-cli library
//!
//! The HTTP client plus the session state, form and list views built on it.

pub mod cli;
pub mod client;
pub mod commands;
pub mod form;
pub mod list;
pub mod logger;
pub mod store;
pub mod user_commands;


pub use client::{CliClientResult, Client, ClientError};
pub use form::UserForm;
pub use list::UserList;
pub use store::UserStore;
