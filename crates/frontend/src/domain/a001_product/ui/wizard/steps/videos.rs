//! Step 6: YouTube video URLs.
//!
//! The OAuth connection status gates only the connect/disconnect
//! affordance; embedding submits regardless of connection state. No URLs
//! entered means no call.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::wizard::{StepPayload, VideosPayload};
use contracts::domain::common::FieldError;
use contracts::system::youtube::YoutubeStatus;

use super::{StepActions, StepError, ValidationSummary};
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::shared::components::ui::{Button, TextField};
use crate::shared::icons::icon;
use crate::system::youtube::api as youtube_api;

#[component]
pub fn StepVideos(state: RwSignal<WizardState>) -> impl IntoView {
    let rows = RwSignal::new(vec![RwSignal::new(String::new())]);
    let status = RwSignal::new(Option::<YoutubeStatus>::None);

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    if let Some(StepPayload::Videos(p)) = state.read_untracked().payload(6) {
        rows.set(p.urls.iter().map(|u| RwSignal::new(u.clone())).collect());
    }

    // A failed status fetch just leaves the affordance hidden.
    spawn_local(async move {
        match youtube_api::fetch_status().await {
            Ok(s) => status.set(Some(s)),
            Err(e) => log::warn!("failed to load youtube status: {}", e),
        }
    });

    let connect = move || {
        if let Err(e) = youtube_api::open_connect_window() {
            log::warn!("failed to open youtube consent window: {}", e);
        }
    };

    let disconnect = move || {
        spawn_local(async move {
            match youtube_api::disconnect().await {
                Ok(()) => status.set(Some(YoutubeStatus {
                    connected: false,
                    channel_title: None,
                })),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let submit = move || {
        let urls: Vec<String> = rows
            .get_untracked()
            .iter()
            .map(|r| r.get_untracked().trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();

        // No URLs entered: nothing to embed.
        if urls.is_empty() {
            state.update(|s| {
                s.skip_step(6);
                s.advance();
            });
            return;
        }

        let payload = VideosPayload { urls };
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
            match youtube_api::embed_product_videos(product_id, payload.urls.clone()).await {
                Ok(()) => {
                    state.update(|s| {
                        s.complete_step(6, StepPayload::Videos(payload));
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
            <h3 class="wizard-step__title">"Videos"</h3>
            <p class="wizard-step__hint">"Leave empty to skip this step."</p>
            <StepError error />
            <ValidationSummary errors=field_errors />

            {move || {
                status
                    .get()
                    .map(|s| {
                        if s.connected {
                            let channel = s.channel_title.unwrap_or_else(|| "YouTube".to_string());
                            view! {
                                <div class="connection-banner connection-banner--connected">
                                    <span>{format!("Connected as {}", channel)}</span>
                                    <Button
                                        variant="ghost"
                                        on_click=Callback::new(move |_| disconnect())
                                    >
                                        "Disconnect"
                                    </Button>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="connection-banner">
                                    <span>"Not connected to YouTube"</span>
                                    <Button
                                        variant="secondary"
                                        on_click=Callback::new(move |_| connect())
                                    >
                                        "Connect"
                                    </Button>
                                </div>
                            }
                            .into_any()
                        }
                    })
            }}

            {move || {
                rows.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| {
                        view! {
                            <div class="form__row form__row--inline">
                                <TextField
                                    value=row
                                    placeholder="https://www.youtube.com/watch?v=..."
                                />
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
                on_click=Callback::new(move |_| rows.update(|r| r.push(RwSignal::new(String::new()))))
            >
                {icon("plus")}
                "Add video URL"
            </Button>

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}
