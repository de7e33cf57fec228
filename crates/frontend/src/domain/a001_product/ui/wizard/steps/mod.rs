//! One module per wizard step, plus small pieces shared by all of them.

pub mod basic_info;
pub mod colors;
pub mod faqs;
pub mod features;
pub mod images;
pub mod metatags;
pub mod pricing;
pub mod review;
pub mod sizes;
pub mod videos;

use contracts::domain::common::FieldError;
use leptos::prelude::*;

use crate::shared::components::ui::Button;

pub use crate::shared::forms::field_message;

/// Back / submit row at the bottom of every step.
#[component]
pub fn StepActions(
    #[prop(optional)] on_back: Option<Callback<()>>,
    #[prop(optional, into)] submitting: MaybeProp<bool>,
    #[prop(optional, into)] submit_label: MaybeProp<String>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="wizard__actions">
            {on_back.map(|back| {
                view! {
                    <Button variant="secondary" on_click=Callback::new(move |_| back.run(()))>
                        "Back"
                    </Button>
                }
            })}
            <Button loading=submitting on_click=Callback::new(move |_| on_submit.run(()))>
                {move || submit_label.get().unwrap_or_else(|| "Save & continue".to_string())}
            </Button>
        </div>
    }
}

/// Blocking submission failure shown above the step's form.
#[component]
pub fn StepError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|message| {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon" aria-hidden="true">"⚠"</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                    }
                })
        }}
    }
}

/// Aggregated validation messages for steps whose errors target repeated
/// rows rather than single named fields.
#[component]
pub fn ValidationSummary(#[prop(into)] errors: Signal<Vec<FieldError>>) -> impl IntoView {
    view! {
        {move || {
            let list = errors.get();
            (!list.is_empty())
                .then(|| {
                    view! {
                        <ul class="warning-box warning-box--validation">
                            {list
                                .into_iter()
                                .map(|e| view! { <li>{e.message}</li> })
                                .collect_view()}
                        </ul>
                    }
                })
        }}
    }
}

