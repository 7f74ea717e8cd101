use crate::models::new_user::resolve_age;
use crate::{AgeInput, CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};

/// Request body for `PUT /api/users/:id`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub age: Option<AgeInput>,
}

/// Partial update restricted to the `age` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgePatch {
    pub age: i32,
}

impl UpdateUserRequest {
    #[track_caller]
    pub fn into_patch(self) -> CoreResult<AgePatch> {
        let age = resolve_age(self.age)?;

        age.map(|age| AgePatch { age })
            .ok_or_else(|| CoreError::validation("Age is required to update.", Some("age")))
    }
}
