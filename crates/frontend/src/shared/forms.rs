//! Form helpers shared by the wizard steps and the settings pages.

use contracts::domain::common::FieldError;
use leptos::prelude::*;

/// Reactive validation message for one field, for inline display under
/// the control.
pub fn field_message(
    errors: RwSignal<Vec<FieldError>>,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || {
        errors.with(|list| {
            list.iter()
                .find(|e| e.field == field)
                .map(|e| e.message.clone())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_message_picks_the_matching_field() {
        let errors = RwSignal::new(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("sku", "SKU is required"),
        ]);
        assert_eq!(
            field_message(errors, "sku").get_untracked().as_deref(),
            Some("SKU is required")
        );
        assert_eq!(field_message(errors, "basePrice").get_untracked(), None);
    }
}
