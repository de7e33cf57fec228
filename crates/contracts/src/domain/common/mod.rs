use serde::{Deserialize, Serialize};

/// A single field-level validation failure, rendered next to the
/// offending input by the form that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of local schema validation. `Err` carries one entry per
/// failing field; the caller blocks submission while any are present.
pub type ValidationResult = Result<(), Vec<FieldError>>;

/// Collect field errors accumulated during validation into a result.
pub fn finish_validation(errors: Vec<FieldError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_validation_empty_is_ok() {
        assert!(finish_validation(Vec::new()).is_ok());
    }

    #[test]
    fn finish_validation_keeps_all_errors() {
        let errors = vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("sku", "SKU is required"),
        ];
        let result = finish_validation(errors);
        assert_eq!(result.unwrap_err().len(), 2);
    }
}
