//! Step 7: marketing feature lines. Skipped when the step was never
//! touched or no row has content; a half-filled row blocks submission.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::aggregate::ProductFeature;
use contracts::domain::a001_product::wizard::{FeaturesPayload, StepPayload};
use contracts::domain::common::FieldError;

use super::{StepActions, StepError, ValidationSummary};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::shared::components::ui::{Button, TextField};
use crate::shared::icons::icon;

#[derive(Clone, Copy)]
struct FeatureRow {
    title: RwSignal<String>,
    description: RwSignal<String>,
}

impl FeatureRow {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: RwSignal::new(title.to_string()),
            description: RwSignal::new(description.to_string()),
        }
    }
}

#[component]
pub fn StepFeatures(state: RwSignal<WizardState>) -> impl IntoView {
    let rows = RwSignal::new(vec![FeatureRow::new("", "")]);
    let touched = RwSignal::new(false);

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    if let Some(StepPayload::Features(p)) = state.read_untracked().payload(7) {
        rows.set(
            p.features
                .iter()
                .map(|f| FeatureRow::new(&f.title, &f.description))
                .collect(),
        );
        touched.set(true);
    }

    let mark_touched = Callback::new(move |_: String| touched.set(true));

    let submit = move || {
        let features: Vec<ProductFeature> = rows
            .get_untracked()
            .iter()
            .map(|r| ProductFeature {
                title: r.title.get_untracked().trim().to_string(),
                description: r.description.get_untracked().trim().to_string(),
            })
            .filter(|f| !f.title.is_empty() || !f.description.is_empty())
            .collect();

        // Untouched or all rows blank: nothing to save.
        if !touched.get_untracked() || features.is_empty() {
            state.update(|s| {
                s.skip_step(7);
                s.advance();
            });
            return;
        }

        let payload = FeaturesPayload { features };
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
            match api::bulk_add_features(product_id, &payload.features).await {
                Ok(()) => {
                    state.update(|s| {
                        s.complete_step(7, StepPayload::Features(payload));
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
            <h3 class="wizard-step__title">"Features"</h3>
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
                                    value=row.title
                                    placeholder="Feature title"
                                    on_input=mark_touched
                                />
                                <TextField
                                    value=row.description
                                    placeholder="Short description"
                                    on_input=mark_touched
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

            <Button
                variant="secondary"
                on_click=Callback::new(move |_| rows.update(|r| r.push(FeatureRow::new("", ""))))
            >
                {icon("plus")}
                "Add feature"
            </Button>

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}
