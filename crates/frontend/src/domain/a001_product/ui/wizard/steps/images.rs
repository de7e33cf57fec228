//! Step 5: CDN image upload.
//!
//! Files go to the CDN first; only the secure URLs come back here. On
//! submit, URLs already persisted on the product are filtered out and
//! only the remainder is sent to the image endpoint. No new uploads
//! means no call at all.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use contracts::domain::a001_product::wizard::{ImagesPayload, StepPayload};
use contracts::domain::common::FieldError;

use super::{StepActions, StepError, ValidationSummary};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::shared::icons::icon;
use crate::shared::upload::{newly_uploaded, upload_images};

#[component]
pub fn StepImages(state: RwSignal<WizardState>) -> impl IntoView {
    let persisted = RwSignal::new(Vec::<String>::new());
    let uploaded = RwSignal::new(Vec::<String>::new());
    let uploading = RwSignal::new(false);

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    // Images saved on an earlier visit are shown but never resubmitted.
    spawn_local(async move {
        let Some(product_id) = state.read_untracked().product_id() else {
            return;
        };
        match api::fetch_product(product_id).await {
            Ok(product) => {
                persisted.set(product.images.into_iter().map(|i| i.url).collect());
            }
            Err(e) => log::warn!("failed to load persisted images: {}", e),
        }
    });

    let handle_files = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file_list) = input.files() else {
            return;
        };
        let mut files = Vec::new();
        for i in 0..file_list.length() {
            if let Some(file) = file_list.get(i) {
                files.push(file);
            }
        }
        if files.is_empty() {
            return;
        }
        input.set_value("");
        error.set(None);
        uploading.set(true);
        spawn_local(async move {
            match upload_images(files).await {
                Ok(urls) => uploaded.update(|list| list.extend(urls)),
                Err(e) => error.set(Some(e)),
            }
            uploading.set(false);
        });
    };

    let submit = move || {
        let fresh = newly_uploaded(&persisted.get_untracked(), &uploaded.get_untracked());

        // Nothing uploaded in this session: skip the backend call.
        if fresh.is_empty() {
            state.update(|s| {
                s.skip_step(5);
                s.advance();
            });
            return;
        }

        let payload = ImagesPayload { urls: fresh };
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
            match api::bulk_add_images(product_id, &payload).await {
                Ok(()) => {
                    // The just-saved URLs count as persisted from now on.
                    persisted.update(|list| list.extend(payload.urls.iter().cloned()));
                    uploaded.set(Vec::new());
                    state.update(|s| {
                        s.complete_step(5, StepPayload::Images(payload));
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
            <h3 class="wizard-step__title">"Images"</h3>
            <p class="wizard-step__hint">"Upload nothing to skip this step."</p>
            <StepError error />
            <ValidationSummary errors=field_errors />

            <label class="upload-zone" class:upload-zone--busy=move || uploading.get()>
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    on:change=handle_files
                />
                {icon("upload")}
                {move || {
                    if uploading.get() { "Uploading..." } else { "Choose images" }
                }}
            </label>

            <div class="image-grid">
                {move || {
                    persisted
                        .get()
                        .into_iter()
                        .map(|url| {
                            view! {
                                <figure class="image-grid__item image-grid__item--saved">
                                    <img src=url />
                                    <figcaption>"saved"</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    uploaded
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <figure class="image-grid__item">
                                    <img src=url />
                                    <button
                                        type="button"
                                        class="image-grid__remove"
                                        on:click=move |_| {
                                            uploaded.update(|list| {
                                                list.remove(index);
                                            });
                                        }
                                    >
                                        "×"
                                    </button>
                                </figure>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}
