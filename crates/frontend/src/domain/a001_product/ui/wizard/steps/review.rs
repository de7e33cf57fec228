//! Step 10: review and finish. No network call; the product was built up
//! step by step. Finishing requires an explicit confirmation and returns
//! to the product list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use contracts::domain::a001_product::wizard::{ReviewPayload, StepPayload, STEP_COUNT};
use contracts::domain::common::FieldError;

use super::{field_message, StepActions};
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::domain::a001_product::ui::wizard::step_title;
use crate::shared::components::ui::Checkbox;

/// One line per completed step, for the summary list.
fn summarize(state: &WizardState) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();
    for step in 1..STEP_COUNT {
        let Some(payload) = state.payload(step) else {
            continue;
        };
        let value = match payload {
            StepPayload::BasicInfo(p) => {
                format!("{} ({}) at {:.2}", p.title, p.sku, p.base_price)
            }
            StepPayload::Sizes(p) => p.sizes.join(", "),
            StepPayload::Colors(p) => format!("{} selected", p.color_ids.len()),
            StepPayload::PricingQuantities(p) => format!("{} variant rows", p.rows.len()),
            StepPayload::Images(p) => format!("{} uploaded", p.urls.len()),
            StepPayload::Videos(p) => format!("{} embedded", p.urls.len()),
            StepPayload::Features(p) => format!("{} features", p.features.len()),
            StepPayload::Metatags(p) => p.meta_title.clone(),
            StepPayload::Faqs(p) => format!("{} FAQs", p.faqs.len()),
            StepPayload::Review(_) => continue,
        };
        lines.push((step_title(step), value));
    }
    lines
}

#[component]
pub fn StepReview(state: RwSignal<WizardState>) -> impl IntoView {
    let confirmed = RwSignal::new(false);
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let navigate = use_navigate();

    if let Some(StepPayload::Review(p)) = state.read_untracked().payload(10) {
        confirmed.set(p.confirmed);
    }

    let finish = move || {
        let payload = ReviewPayload {
            confirmed: confirmed.get_untracked(),
        };
        match payload.validate() {
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
            Ok(()) => field_errors.set(Vec::new()),
        }
        state.update(|s| s.complete_step(10, StepPayload::Review(payload)));
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="wizard-step">
            <h3 class="wizard-step__title">"Review"</h3>

            <dl class="review-list">
                {move || {
                    summarize(&state.read())
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="review-list__row">
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </dl>

            <Checkbox label="The product data above is correct" checked=confirmed />
            {move || {
                field_message(field_errors, "confirmed")
                    .get()
                    .map(|message| view! { <span class="form__error">{message}</span> })
            }}

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submit_label="Finish"
                on_submit=Callback::new(move |_| finish())
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::wizard::{BasicInfoPayload, SizesPayload};

    #[test]
    fn summary_covers_completed_steps_only() {
        let mut state = WizardState::new();
        state.complete_step(
            1,
            StepPayload::BasicInfo(BasicInfoPayload {
                title: "Trail runner".to_string(),
                sku: "TR-1".to_string(),
                base_price: 89.0,
                published: true,
                ..Default::default()
            }),
        );
        state.complete_step(
            2,
            StepPayload::Sizes(SizesPayload {
                sizes: vec!["41".to_string(), "42".to_string()],
            }),
        );

        let lines = summarize(&state);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, "Basic info");
        assert!(lines[0].1.contains("Trail runner"));
        assert!(lines[0].1.contains("TR-1"));
        assert_eq!(lines[1].1, "41, 42");
    }

    #[test]
    fn empty_state_has_no_summary() {
        assert!(summarize(&WizardState::new()).is_empty());
    }
}
