//! Step 1: creates the product. The assigned id scopes every later call.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::wizard::{BasicInfoPayload, StepPayload};
use contracts::domain::common::FieldError;

use super::{field_message, StepActions, StepError};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::shared::components::ui::{Checkbox, TextField, Textarea};

#[component]
pub fn StepBasicInfo(state: RwSignal<WizardState>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let base_price = RwSignal::new(String::new());
    let published = RwSignal::new(false);

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    // Prefill when the user navigates back into a completed step.
    if let Some(StepPayload::BasicInfo(p)) = state.read_untracked().payload(1) {
        title.set(p.title.clone());
        description.set(p.description.clone());
        sku.set(p.sku.clone());
        category.set(p.category.clone());
        base_price.set(p.base_price.to_string());
        published.set(p.published);
    }

    let submit = move || {
        let payload = BasicInfoPayload {
            title: title.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            sku: sku.get_untracked().trim().to_string(),
            category: category.get_untracked().trim().to_string(),
            base_price: base_price
                .get_untracked()
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0),
            published: published.get_untracked(),
        };
        match payload.validate() {
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
            Ok(()) => field_errors.set(Vec::new()),
        }
        error.set(None);

        // The product already exists on a repeat visit; re-complete the
        // step locally instead of creating a duplicate.
        if state.read_untracked().product_id().is_some() {
            state.update(|s| {
                s.complete_step(1, StepPayload::BasicInfo(payload));
                s.advance();
            });
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match api::create_product(&payload).await {
                Ok(product) => {
                    state.update(|s| {
                        s.set_product_id(product.id);
                        s.complete_step(1, StepPayload::BasicInfo(payload));
                        s.advance();
                    });
                }
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="wizard-step">
            <h3 class="wizard-step__title">"Basic info"</h3>
            <StepError error />

            <div class="form__row">
                <TextField
                    label="Title"
                    value=title
                    required=true
                    error=field_message(field_errors, "title")
                />
                <TextField
                    label="SKU"
                    value=sku
                    required=true
                    error=field_message(field_errors, "sku")
                />
            </div>
            <div class="form__row">
                <TextField label="Category" value=category placeholder="e.g. Footwear" />
                <TextField
                    label="Base price"
                    value=base_price
                    input_type="number"
                    required=true
                    error=field_message(field_errors, "basePrice")
                />
            </div>
            <Textarea label="Description" value=description placeholder="Optional" rows=4 />
            <Checkbox label="Published" checked=published />

            <StepActions submitting on_submit=Callback::new(move |_| submit()) />
        </div>
    }
}
