use crate::domain::common::{finish_validation, FieldError, ValidationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique size identifier, assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeId(pub Uuid);

impl SizeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SizeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A size label ("S", "M", "42", ...) known to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub id: SizeId,
    pub label: String,
}

/// Payload for creating a new size label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDto {
    pub label: String,
}

impl SizeDto {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.label.trim().is_empty() {
            errors.push(FieldError::new("label", "Size label is required"));
        }
        finish_validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_label_is_rejected() {
        assert!(SizeDto::default().validate().is_err());
    }
}
