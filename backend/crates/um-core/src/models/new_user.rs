use crate::{AgeInput, CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};

const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and age are required.";

/// Request body for creating a user, before presence checks.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<AgeInput>,
}

/// Insert payload for the `users` table. All fields are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl CreateUserRequest {
    /// Check that name, email and age are all present.
    ///
    /// Blank strings and an age of `0` count as missing. The error names the
    /// first missing field.
    #[track_caller]
    pub fn into_new_user(self) -> CoreResult<NewUser> {
        let name = present(self.name);
        let email = present(self.email);
        let age = resolve_age(self.age)?;

        match (name, email, age) {
            (Some(name), Some(email), Some(age)) => Ok(NewUser { name, email, age }),
            (name, email, _) => {
                let field = if name.is_none() {
                    "name"
                } else if email.is_none() {
                    "email"
                } else {
                    "age"
                };
                Err(CoreError::validation(REQUIRED_FIELDS_MESSAGE, Some(field)))
            }
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve a submitted age, treating `0` like an absent value.
#[track_caller]
pub(crate) fn resolve_age(input: Option<AgeInput>) -> CoreResult<Option<i32>> {
    let age = match input {
        Some(input) => input.resolve()?,
        None => None,
    };
    Ok(age.filter(|age| *age != 0))
}
