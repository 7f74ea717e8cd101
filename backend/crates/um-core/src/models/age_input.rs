use crate::{CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};

/// Raw `age` value as submitted by a client.
///
/// Form inputs submit numbers as strings, so both `30` and `"30"` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

impl AgeInput {
    /// Resolve to an age.
    ///
    /// Returns `Ok(None)` when the value is blank, which callers treat as absent.
    #[track_caller]
    pub fn resolve(&self) -> CoreResult<Option<i32>> {
        match self {
            AgeInput::Number(n) => i32::try_from(*n)
                .map(Some)
                .map_err(|_| CoreError::validation(format!("age out of range: {n}"), Some("age"))),
            AgeInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<i32>().map(Some).map_err(|_| {
                    CoreError::validation(format!("age must be a whole number, got '{s}'"), Some("age"))
                })
            }
        }
    }
}

impl From<i32> for AgeInput {
    fn from(age: i32) -> Self {
        AgeInput::Number(i64::from(age))
    }
}
