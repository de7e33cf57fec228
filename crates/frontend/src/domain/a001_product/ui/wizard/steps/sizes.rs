//! Step 2: attaches size labels to the product.
//!
//! Skipped entirely when the user never touched the step or entered no
//! usable label. Labels the catalog does not know yet are registered
//! best-effort before the bulk attach.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::wizard::{SizesPayload, StepPayload};
use contracts::domain::a005_size::aggregate::{Size, SizeDto};
use contracts::domain::common::FieldError;

use super::{StepActions, StepError, ValidationSummary};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::domain::a005_size::api as size_api;
use crate::shared::components::ui::{Button, TextField};
use crate::shared::icons::icon;

#[component]
pub fn StepSizes(state: RwSignal<WizardState>) -> impl IntoView {
    let rows = RwSignal::new(vec![RwSignal::new(String::new())]);
    let touched = RwSignal::new(false);
    let known = RwSignal::new(Vec::<Size>::new());

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    if let Some(StepPayload::Sizes(p)) = state.read_untracked().payload(2) {
        rows.set(p.sizes.iter().map(|s| RwSignal::new(s.clone())).collect());
        touched.set(true);
    }

    // Catalog labels, offered as one-click suggestions.
    spawn_local(async move {
        match size_api::fetch_sizes().await {
            Ok(sizes) => known.set(sizes),
            Err(e) => log::warn!("failed to load size catalog: {}", e),
        }
    });

    let add_row = move |label: String| {
        rows.update(|r| r.push(RwSignal::new(label)));
        touched.set(true);
    };

    let submit = move || {
        let entered: Vec<String> = rows
            .get_untracked()
            .iter()
            .map(|r| r.get_untracked().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Untouched or empty: nothing to attach, move on without a call.
        if !touched.get_untracked() || entered.is_empty() {
            state.update(|s| {
                s.skip_step(2);
                s.advance();
            });
            return;
        }

        let payload = SizesPayload { sizes: entered };
        match payload.validate() {
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
            Ok(()) => field_errors.set(Vec::new()),
        }
        let Some(product_id) = state.read_untracked().product_id() else {
            error.set(Some("Create the product in step 1 first".to_string()));
            return;
        };
        error.set(None);
        submitting.set(true);

        spawn_local(async move {
            let known_labels: Vec<String> =
                known.get_untracked().iter().map(|s| s.label.clone()).collect();
            for label in payload.sizes.iter().filter(|l| !known_labels.contains(l)) {
                // Best effort: a failed catalog registration does not block
                // attaching the label to this product.
                if let Err(e) = size_api::create_size(&SizeDto {
                    label: label.clone(),
                })
                .await
                {
                    log::warn!("failed to register size label {}: {}", label, e);
                }
            }
            match api::bulk_add_sizes(product_id, &payload).await {
                Ok(()) => {
                    state.update(|s| {
                        s.complete_step(2, StepPayload::Sizes(payload));
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
            <h3 class="wizard-step__title">"Sizes"</h3>
            <p class="wizard-step__hint">"Leave empty to skip this step."</p>
            <StepError error />
            <ValidationSummary errors=field_errors />

            {move || {
                rows.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| {
                        view! {
                            <div class="form__row form__row--inline">
                                <TextField
                                    value=row
                                    placeholder="e.g. M"
                                    on_input=Callback::new(move |_| touched.set(true))
                                />
                                <Button
                                    variant="ghost"
                                    on_click=Callback::new(move |_| {
                                        rows.update(|r| {
                                            r.remove(index);
                                        });
                                        touched.set(true);
                                    })
                                >
                                    {icon("delete")}
                                </Button>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <Button variant="secondary" on_click=Callback::new(move |_| add_row(String::new()))>
                {icon("plus")}
                "Add size"
            </Button>

            {move || {
                let suggestions = known.get();
                (!suggestions.is_empty())
                    .then(|| {
                        view! {
                            <div class="chip-row">
                                {suggestions
                                    .into_iter()
                                    .map(|size| {
                                        let label = size.label.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class="chip"
                                                on:click=move |_| add_row(label.clone())
                                            >
                                                {size.label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}
