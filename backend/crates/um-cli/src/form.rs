use crate::UserStore;

use um_core::{AgeInput, CreateUserRequest, User};

use log::error;

pub const REQUIRED_FIELDS_ERROR: &str = "All fields are required";
pub const SUBMIT_FAILED_ERROR: &str = "Failed to add user";

/// Add-user form. Fields hold raw text as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub age: String,
    error: Option<String>,
}

impl UserForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
            error: None,
        }
    }

    /// Inline error shown under the form, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Client-side presence check. Blank fields count as missing.
    pub fn validate(&self) -> Result<CreateUserRequest, &'static str> {
        let filled = [&self.name, &self.email, &self.age]
            .iter()
            .all(|field| !field.trim().is_empty());

        if !filled {
            return Err(REQUIRED_FIELDS_ERROR);
        }

        Ok(CreateUserRequest {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            age: Some(AgeInput::Text(self.age.trim().to_string())),
        })
    }

    /// Validate and post the form through the store.
    ///
    /// On success the fields and error are cleared and the created user is
    /// returned. On failure the form keeps its input and shows an error.
    pub async fn submit(&mut self, store: &mut UserStore) -> Option<User> {
        let request = match self.validate() {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(message.to_string());
                return None;
            }
        };

        match store.add(&request).await {
            Ok(user) => {
                *self = Self::default();
                Some(user)
            }
            Err(e) => {
                error!("Error adding user: {}", e);
                self.error = Some(SUBMIT_FAILED_ERROR.to_string());
                None
            }
        }
    }
}
