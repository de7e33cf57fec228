//! Step 8: SEO metadata. Unlike the other optional steps this one has no
//! skip gate: once valid it always submits, and a revisit re-sends the
//! current values (the backend keeps one record per product).

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::aggregate::Metatag;
use contracts::domain::a001_product::wizard::{MetatagsPayload, StepPayload};
use contracts::domain::common::FieldError;

use super::{field_message, StepActions, StepError};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::shared::components::ui::{TextField, Textarea};

/// "a, b, c" -> ["a", "b", "c"]; blanks dropped.
fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

#[component]
pub fn StepMetatags(state: RwSignal<WizardState>) -> impl IntoView {
    let meta_title = RwSignal::new(String::new());
    let meta_description = RwSignal::new(String::new());
    let keywords = RwSignal::new(String::new());

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    if let Some(StepPayload::Metatags(p)) = state.read_untracked().payload(8) {
        meta_title.set(p.meta_title.clone());
        meta_description.set(p.meta_description.clone());
        keywords.set(p.keywords.join(", "));
    }

    let submit = move || {
        let payload = MetatagsPayload {
            meta_title: meta_title.get_untracked().trim().to_string(),
            meta_description: meta_description.get_untracked().trim().to_string(),
            keywords: parse_keywords(&keywords.get_untracked()),
        };
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

        let metatag = Metatag {
            meta_title: payload.meta_title.clone(),
            meta_description: payload.meta_description.clone(),
            keywords: payload.keywords.clone(),
        };
        spawn_local(async move {
            match api::save_metatags(product_id, &metatag).await {
                Ok(()) => {
                    state.update(|s| {
                        s.complete_step(8, StepPayload::Metatags(payload));
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
            <h3 class="wizard-step__title">"Metatags"</h3>
            <StepError error />

            <TextField
                label="Meta title"
                value=meta_title
                required=true
                error=field_message(field_errors, "metaTitle")
            />
            <Textarea label="Meta description" value=meta_description />
            <TextField
                label="Keywords"
                value=keywords
                placeholder="comma, separated, keywords"
            />

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_split_on_commas_and_drop_blanks() {
        assert_eq!(
            parse_keywords("shoes, running , , summer"),
            vec!["shoes", "running", "summer"]
        );
        assert!(parse_keywords("  ").is_empty());
    }
}
