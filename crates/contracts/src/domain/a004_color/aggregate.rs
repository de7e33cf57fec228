use crate::domain::common::{finish_validation, FieldError, ValidationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique color identifier, assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorId(pub Uuid);

impl ColorId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named color available for product variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: ColorId,
    pub name: String,
    #[serde(default)]
    pub hex_code: Option<String>,
}

/// Payload for creating a new color.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_code: Option<String>,
}

impl ColorDto {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Color name is required"));
        }
        finish_validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let dto = ColorDto {
            name: "  ".to_string(),
            hex_code: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn named_color_passes() {
        let dto = ColorDto {
            name: "Navy".to_string(),
            hex_code: Some("#001f3f".to_string()),
        };
        assert!(dto.validate().is_ok());
    }
}
