//! Delivery-area settings page: list with active-only filter, create
//! form, inline edit, delete and the active toggle.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a003_delivery_area::aggregate::{
    DeliveryArea, DeliveryAreaDto, DeliveryAreaId,
};
use contracts::domain::common::FieldError;

use crate::domain::a003_delivery_area::api;
use crate::shared::forms::field_message;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::loading::LoadingIndicator;
use crate::shared::components::ui::{Badge, Button, TextField};
use crate::shared::icons::icon;

fn parse_dto(name: &str, charge: &str) -> Result<DeliveryAreaDto, Vec<FieldError>> {
    let mut errors = Vec::new();
    let charge = match charge.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            errors.push(FieldError::new("charge", "Charge must be a number"));
            0.0
        }
    };
    let dto = DeliveryAreaDto {
        name: name.trim().to_string(),
        charge,
    };
    if let Err(mut validation) = dto.validate() {
        errors.append(&mut validation);
    }
    if errors.is_empty() {
        Ok(dto)
    } else {
        Err(errors)
    }
}

#[component]
pub fn DeliveryAreaSettings() -> impl IntoView {
    let areas = RwSignal::new(Vec::<DeliveryArea>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let active_only = RwSignal::new(false);
    let notice = RwSignal::new(Option::<String>::None);

    let new_name = RwSignal::new(String::new());
    let new_charge = RwSignal::new(String::new());
    let create_errors = RwSignal::new(Vec::<FieldError>::new());
    let creating = RwSignal::new(false);

    let editing_id = RwSignal::new(Option::<DeliveryAreaId>::None);
    let edit_name = RwSignal::new(String::new());
    let edit_charge = RwSignal::new(String::new());
    let edit_errors = RwSignal::new(Vec::<FieldError>::new());
    let saving_edit = RwSignal::new(false);

    let show_notice = move |text: &str| {
        let text = text.to_string();
        notice.set(Some(text));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_500).await;
            notice.set(None);
        });
    };

    let fetch = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = if active_only.get_untracked() {
                api::fetch_active_delivery_areas().await
            } else {
                api::fetch_delivery_areas().await
            };
            match result {
                Ok(list) => areas.set(list),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };
    fetch();

    let create = move || {
        let dto = match parse_dto(&new_name.get_untracked(), &new_charge.get_untracked()) {
            Ok(dto) => {
                create_errors.set(Vec::new());
                dto
            }
            Err(errors) => {
                create_errors.set(errors);
                return;
            }
        };
        creating.set(true);
        spawn_local(async move {
            match api::create_delivery_area(&dto).await {
                Ok(_) => {
                    new_name.set(String::new());
                    new_charge.set(String::new());
                    show_notice("Delivery area created");
                    fetch();
                }
                Err(e) => error.set(Some(e)),
            }
            creating.set(false);
        });
    };

    // Re-read the record before editing in case another session changed it.
    let start_edit = move |id: DeliveryAreaId| {
        spawn_local(async move {
            match api::fetch_delivery_area(id).await {
                Ok(area) => {
                    edit_name.set(area.name);
                    edit_charge.set(area.charge.to_string());
                    edit_errors.set(Vec::new());
                    editing_id.set(Some(id));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let save_edit = move || {
        let Some(id) = editing_id.get_untracked() else {
            return;
        };
        let dto = match parse_dto(&edit_name.get_untracked(), &edit_charge.get_untracked()) {
            Ok(dto) => {
                edit_errors.set(Vec::new());
                dto
            }
            Err(errors) => {
                edit_errors.set(errors);
                return;
            }
        };
        saving_edit.set(true);
        spawn_local(async move {
            match api::update_delivery_area(id, &dto).await {
                Ok(updated) => {
                    areas.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|a| a.id == id) {
                            *slot = updated;
                        }
                    });
                    editing_id.set(None);
                    show_notice("Delivery area updated");
                }
                Err(e) => error.set(Some(e)),
            }
            saving_edit.set(false);
        });
    };

    let toggle = move |id: DeliveryAreaId| {
        spawn_local(async move {
            match api::toggle_delivery_area_status(id).await {
                Ok(()) => {
                    areas.update(|list| {
                        if let Some(index) = list.iter().position(|a| a.id == id) {
                            let area = list.remove(index);
                            list.insert(index, area.with_toggled_active());
                        }
                    });
                    show_notice("Status toggled");
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete = move |id: DeliveryAreaId| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this delivery area?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_delivery_area(id).await {
                Ok(()) => {
                    show_notice("Delivery area deleted");
                    fetch();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Delivery areas"</h1>
                <div class="header__actions">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || active_only.get()
                            on:change=move |ev| {
                                active_only.set(event_target_checked(&ev));
                                fetch();
                            }
                        />
                        "Active only"
                    </label>
                    <Button variant="ghost" on_click=Callback::new(move |_| fetch())>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            {move || {
                notice
                    .get()
                    .map(|text| view! { <div class="toast">{text}</div> })
            }}

            <section class="details-section">
                <h3 class="details-section__title">"New area"</h3>
                <div class="form__row form__row--inline">
                    <TextField
                        label="Name"
                        value=new_name
                        error=field_message(create_errors, "name")
                    />
                    <TextField
                        label="Charge"
                        value=new_charge
                        input_type="number"
                        error=field_message(create_errors, "charge")
                    />
                    <Button loading=creating on_click=Callback::new(move |_| create())>
                        {icon("plus")}
                        "Create"
                    </Button>
                </div>
            </section>

            {move || {
                if loading.get() {
                    return view! { <LoadingIndicator /> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <ErrorPanel message on_retry=Callback::new(move |_| fetch()) />
                    }
                    .into_any();
                }
                let list = areas.get();
                if list.is_empty() {
                    return view! { <p class="page__empty">"No delivery areas yet."</p> }
                        .into_any();
                }
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Charge"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|area| {
                                    let id = area.id;
                                    let is_editing = move || editing_id.get() == Some(id);
                                    view! {
                                        <tr>
                                            {move || {
                                                if is_editing() {
                                                    view! {
                                                        <td>
                                                            <TextField
                                                                value=edit_name
                                                                error=field_message(edit_errors, "name")
                                                            />
                                                        </td>
                                                        <td>
                                                            <TextField
                                                                value=edit_charge
                                                                input_type="number"
                                                                error=field_message(edit_errors, "charge")
                                                            />
                                                        </td>
                                                    }
                                                        .into_any()
                                                } else {
                                                    let current = areas
                                                        .read()
                                                        .iter()
                                                        .find(|a| a.id == id)
                                                        .cloned();
                                                    let (name, charge) = current
                                                        .map(|a| (a.name, format!("{:.2}", a.charge)))
                                                        .unwrap_or_default();
                                                    view! {
                                                        <td>{name}</td>
                                                        <td>{charge}</td>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                            <td>
                                                {move || {
                                                    let active = areas
                                                        .read()
                                                        .iter()
                                                        .find(|a| a.id == id)
                                                        .map(|a| a.is_active)
                                                        .unwrap_or(false);
                                                    if active {
                                                        view! { <Badge text="active" modifier="ok" /> }
                                                    } else {
                                                        view! { <Badge text="inactive" modifier="muted" /> }
                                                    }
                                                }}
                                            </td>
                                            <td class="table__actions">
                                                {move || {
                                                    if is_editing() {
                                                        view! {
                                                            <Button
                                                                loading=saving_edit
                                                                on_click=Callback::new(move |_| save_edit())
                                                            >
                                                                "Save"
                                                            </Button>
                                                            <Button
                                                                variant="ghost"
                                                                on_click=Callback::new(move |_| {
                                                                    editing_id.set(None)
                                                                })
                                                            >
                                                                "Cancel"
                                                            </Button>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <Button
                                                                variant="secondary"
                                                                on_click=Callback::new(move |_| start_edit(id))
                                                            >
                                                                "Edit"
                                                            </Button>
                                                            <Button
                                                                variant="secondary"
                                                                on_click=Callback::new(move |_| toggle(id))
                                                            >
                                                                "Toggle"
                                                            </Button>
                                                            <Button
                                                                variant="ghost"
                                                                on_click=Callback::new(move |_| delete(id))
                                                            >
                                                                {icon("delete")}
                                                            </Button>
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_charge_gets_its_own_message() {
        let errors = parse_dto("Zone A", "not-a-number").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "charge");
        assert_eq!(errors[0].message, "Charge must be a number");
    }

    #[test]
    fn parsed_dto_trims_and_validates() {
        let ok = parse_dto(" Zone A ", "49.5").unwrap();
        assert_eq!(ok.name, "Zone A");
        assert_eq!(ok.charge, 49.5);

        let errors = parse_dto("", "-2").unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "charge"]);
    }
}
