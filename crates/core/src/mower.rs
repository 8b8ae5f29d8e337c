//! The catalog item ("mower") and its request DTOs.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::MowerId;

/// Entity label used in not-found errors.
pub const MOWER_ENTITY: &str = "mower";

/// A catalog item. The `id` never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mower {
    pub id: MowerId,
    pub name: String,
}

/// DTO for creating a mower. The id is always assigned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMower {
    pub name: String,
}

/// DTO for a partial update.
///
/// An absent `name` and an empty `name` both mean "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMower {
    #[serde(default)]
    pub name: Option<String>,
}

impl UpdateMower {
    /// Name to write, if the request actually supplies one.
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Validate a mower name: any non-empty string is accepted.
pub fn validate_mower_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Mower name must not be empty".to_string(),
        ));
    }
    Ok(())
}
