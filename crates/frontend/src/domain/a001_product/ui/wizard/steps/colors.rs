//! Step 3: links catalog colors to the product.
//!
//! Skipped when no color is selected. New colors can be created inline
//! and are selected immediately.

use std::collections::HashSet;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::wizard::{ColorsPayload, StepPayload};
use contracts::domain::a004_color::aggregate::{Color, ColorDto, ColorId};
use contracts::domain::common::FieldError;

use super::{field_message, StepActions, StepError};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::domain::a004_color::api as color_api;
use crate::shared::components::ui::{Button, TextField};

#[component]
pub fn StepColors(state: RwSignal<WizardState>) -> impl IntoView {
    let colors = RwSignal::new(Vec::<Color>::new());
    let selected = RwSignal::new(HashSet::<ColorId>::new());

    let new_name = RwSignal::new(String::new());
    let new_hex = RwSignal::new(String::new());
    let create_errors = RwSignal::new(Vec::<FieldError>::new());
    let creating = RwSignal::new(false);

    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    if let Some(StepPayload::Colors(p)) = state.read_untracked().payload(3) {
        selected.set(p.color_ids.iter().copied().collect());
    }

    spawn_local(async move {
        match color_api::fetch_colors().await {
            Ok(list) => colors.set(list),
            Err(e) => error.set(Some(e)),
        }
    });

    let toggle = move |id: ColorId| {
        selected.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let create_color = move || {
        let hex = new_hex.get_untracked().trim().to_string();
        let dto = ColorDto {
            name: new_name.get_untracked().trim().to_string(),
            hex_code: (!hex.is_empty()).then_some(hex),
        };
        match dto.validate() {
            Err(errors) => {
                create_errors.set(errors);
                return;
            }
            Ok(()) => create_errors.set(Vec::new()),
        }
        creating.set(true);
        spawn_local(async move {
            match color_api::create_color(&dto).await {
                Ok(color) => {
                    selected.update(|set| {
                        set.insert(color.id);
                    });
                    colors.update(|list| list.push(color));
                    new_name.set(String::new());
                    new_hex.set(String::new());
                }
                Err(e) => error.set(Some(e)),
            }
            creating.set(false);
        });
    };

    let submit = move || {
        let color_ids: Vec<ColorId> = {
            let set = selected.get_untracked();
            colors
                .get_untracked()
                .iter()
                .map(|c| c.id)
                .filter(|id| set.contains(id))
                .collect()
        };

        // Nothing selected: the product simply has no color variants.
        if color_ids.is_empty() {
            state.update(|s| {
                s.skip_step(3);
                s.advance();
            });
            return;
        }

        let payload = ColorsPayload { color_ids };
        if let Err(errors) = payload.validate() {
            error.set(errors.into_iter().next().map(|e| e.message));
            return;
        }
        let Some(product_id) = state.read_untracked().product_id() else {
            error.set(Some("Create the product in step 1 first".to_string()));
            return;
        };
        error.set(None);
        submitting.set(true);

        spawn_local(async move {
            match api::bulk_add_colors(product_id, &payload).await {
                Ok(()) => {
                    state.update(|s| {
                        s.complete_step(3, StepPayload::Colors(payload));
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
            <h3 class="wizard-step__title">"Colors"</h3>
            <p class="wizard-step__hint">"Select none to skip this step."</p>
            <StepError error />

            <div class="color-grid">
                {move || {
                    colors
                        .get()
                        .into_iter()
                        .map(|color| {
                            let id = color.id;
                            let swatch = color.hex_code.clone().unwrap_or_default();
                            view! {
                                <label
                                    class="color-grid__item"
                                    class:color-grid__item--selected=move || {
                                        selected.read().contains(&id)
                                    }
                                >
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.read().contains(&id)
                                        on:change=move |_| toggle(id)
                                    />
                                    <span
                                        class="color-grid__swatch"
                                        style:background-color=swatch
                                    ></span>
                                    {color.name}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="form__row form__row--inline">
                <TextField
                    label="New color"
                    value=new_name
                    placeholder="Name"
                    error=field_message(create_errors, "name")
                />
                <TextField value=new_hex placeholder="#rrggbb" />
                <Button
                    variant="secondary"
                    loading=creating
                    on_click=Callback::new(move |_| create_color())
                >
                    "Create"
                </Button>
            </div>

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}
