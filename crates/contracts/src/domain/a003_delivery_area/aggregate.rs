use crate::domain::common::{finish_validation, FieldError, ValidationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique delivery area identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryAreaId(pub Uuid);

impl DeliveryAreaId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for DeliveryAreaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named shipment zone with a flat delivery charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryArea {
    pub id: DeliveryAreaId,
    pub name: String,
    pub charge: f64,
    pub is_active: bool,
}

impl DeliveryArea {
    /// Local bookkeeping applied after a successful toggle call, mirroring
    /// what the backend did to the record.
    pub fn with_toggled_active(mut self) -> Self {
        self.is_active = !self.is_active;
        self
    }
}

/// Payload for creating or updating a delivery area.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAreaDto {
    pub name: String,
    pub charge: f64,
}

impl DeliveryAreaDto {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Area name is required"));
        }
        if self.charge < 0.0 {
            errors.push(FieldError::new("charge", "Charge must not be negative"));
        }
        finish_validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        let area = DeliveryArea {
            id: DeliveryAreaId::new(Uuid::new_v4()),
            name: "Zone A".to_string(),
            charge: 50.0,
            is_active: true,
        };
        let toggled = area.with_toggled_active();
        assert!(!toggled.is_active);
        let back = toggled.with_toggled_active();
        assert!(back.is_active);
    }

    #[test]
    fn dto_requires_name_and_non_negative_charge() {
        let blank = DeliveryAreaDto::default();
        assert!(blank.validate().is_err());

        let negative = DeliveryAreaDto {
            name: "Zone A".to_string(),
            charge: -1.0,
        };
        assert!(negative.validate().is_err());

        let ok = DeliveryAreaDto {
            name: "Zone A".to_string(),
            charge: 50.0,
        };
        assert!(ok.validate().is_ok());
    }
}
