//! Step 9: question/answer pairs. Skipped when no row has content; a
//! row with only one side filled blocks submission.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::aggregate::ProductFaq;
use contracts::domain::a001_product::wizard::{FaqsPayload, StepPayload};
use contracts::domain::common::FieldError;

use super::{StepActions, StepError, ValidationSummary};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::shared::components::ui::{Button, TextField};
use crate::shared::icons::icon;

#[derive(Clone, Copy)]
struct FaqRow {
    question: RwSignal<String>,
    answer: RwSignal<String>,
}

impl FaqRow {
    fn new(question: &str, answer: &str) -> Self {
        Self {
            question: RwSignal::new(question.to_string()),
            answer: RwSignal::new(answer.to_string()),
        }
    }
}

#[component]
pub fn StepFaqs(state: RwSignal<WizardState>) -> impl IntoView {
    let rows = RwSignal::new(vec![FaqRow::new("", "")]);

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    if let Some(StepPayload::Faqs(p)) = state.read_untracked().payload(9) {
        rows.set(
            p.faqs
                .iter()
                .map(|f| FaqRow::new(&f.question, &f.answer))
                .collect(),
        );
    }

    let submit = move || {
        let faqs: Vec<ProductFaq> = rows
            .get_untracked()
            .iter()
            .map(|r| ProductFaq {
                question: r.question.get_untracked().trim().to_string(),
                answer: r.answer.get_untracked().trim().to_string(),
            })
            .filter(|f| !f.question.is_empty() || !f.answer.is_empty())
            .collect();

        // All rows blank: nothing to save.
        if faqs.is_empty() {
            state.update(|s| {
                s.skip_step(9);
                s.advance();
            });
            return;
        }

        let payload = FaqsPayload { faqs };
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
            match api::bulk_add_faqs(product_id, &payload.faqs).await {
                Ok(()) => {
                    state.update(|s| {
                        s.complete_step(9, StepPayload::Faqs(payload));
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
            <h3 class="wizard-step__title">"FAQs"</h3>
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
                                <TextField value=row.question placeholder="Question" />
                                <TextField value=row.answer placeholder="Answer" />
                                <Button
                                    variant="ghost"
                                    on_click=Callback::new(move |_| {
                                        rows.update(|r| {
                                            r.remove(index);
                                        });
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
                on_click=Callback::new(move |_| rows.update(|r| r.push(FaqRow::new("", ""))))
            >
                {icon("plus")}
                "Add FAQ"
            </Button>

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}
