//! Order detail page.
//!
//! The page works on a staged copy of the order. Saving the status calls
//! the backend; customer, shipping and item edits stay local until their
//! backend writes are wired up.

pub mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a002_order::aggregate::{Order, OrderId, OrderStatus};

use crate::domain::a002_order::api;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::loading::LoadingIndicator;
use crate::shared::components::ui::{Badge, Button, Select, TextField};
use view_model::stage_item_quantity;
use view_model::stage_item_removal;

#[component]
pub fn OrderDetails() -> impl IntoView {
    let params = use_params_map();
    let order = RwSignal::new(Option::<Order>::None);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let navigate = StoredValue::new(use_navigate());

    let status_value = RwSignal::new(String::new());
    let saving_status = RwSignal::new(false);

    let editing_customer = RwSignal::new(false);
    let customer_name = RwSignal::new(String::new());
    let customer_email = RwSignal::new(String::new());
    let customer_phone = RwSignal::new(String::new());

    let editing_shipping = RwSignal::new(false);
    let shipping_address = RwSignal::new(String::new());
    let shipping_city = RwSignal::new(String::new());
    let shipping_postal = RwSignal::new(String::new());
    let shipping_country = RwSignal::new(String::new());

    let show_notice = move |text: &str| {
        let text = text.to_string();
        notice.set(Some(text));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_500).await;
            notice.set(None);
        });
    };

    let order_id = move || -> Option<OrderId> {
        params
            .get_untracked()
            .get("id")
            .and_then(|raw| Uuid::parse_str(&raw).ok())
            .map(OrderId::new)
    };

    let fetch = move || {
        let Some(id) = order_id() else {
            loading.set(false);
            error.set(Some("Invalid order id".to_string()));
            return;
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_order(id).await {
                Ok(fetched) => {
                    status_value.set(fetched.status.as_str().to_string());
                    order.set(Some(fetched));
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };
    fetch();

    let save_status = move || {
        let Some(id) = order_id() else {
            return;
        };
        let Some(status) = OrderStatus::from_str(&status_value.get_untracked()) else {
            return;
        };
        saving_status.set(true);
        spawn_local(async move {
            match api::update_order_status(id, status).await {
                Ok(()) => {
                    order.update(|o| {
                        if let Some(o) = o {
                            o.status = status;
                        }
                    });
                    show_notice("Status updated");
                }
                Err(e) => error.set(Some(e)),
            }
            saving_status.set(false);
        });
    };

    let start_customer_edit = move || {
        if let Some(o) = order.read_untracked().as_ref() {
            customer_name.set(o.customer.name.clone());
            customer_email.set(o.customer.email.clone());
            customer_phone.set(o.customer.phone.clone());
            editing_customer.set(true);
        }
    };

    let save_customer = move || {
        // Local staging only; the backend write for customer info is not
        // wired up yet.
        order.update(|o| {
            if let Some(o) = o {
                o.customer.name = customer_name.get_untracked();
                o.customer.email = customer_email.get_untracked();
                o.customer.phone = customer_phone.get_untracked();
            }
        });
        editing_customer.set(false);
        show_notice("Customer info staged locally");
    };

    let start_shipping_edit = move || {
        if let Some(o) = order.read_untracked().as_ref() {
            shipping_address.set(o.shipping.address.clone());
            shipping_city.set(o.shipping.city.clone());
            shipping_postal.set(o.shipping.postal_code.clone());
            shipping_country.set(o.shipping.country.clone());
            editing_shipping.set(true);
        }
    };

    let save_shipping = move || {
        // Local staging only, same as customer info.
        order.update(|o| {
            if let Some(o) = o {
                o.shipping.address = shipping_address.get_untracked();
                o.shipping.city = shipping_city.get_untracked();
                o.shipping.postal_code = shipping_postal.get_untracked();
                o.shipping.country = shipping_country.get_untracked();
            }
        });
        editing_shipping.set(false);
        show_notice("Shipping info staged locally");
    };

    let delete = move || {
        let Some(id) = order_id() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this order?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_order(id).await {
                Ok(()) => {
                    navigate.with_value(|go| go("/orders", NavigateOptions::default()));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let status_options: Vec<(String, String)> = OrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    view! {
        <div class="page">
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
                let Some(current) = order.get() else {
                    return view! { <p class="page__empty">"Order not found."</p> }.into_any();
                };
                let options = status_options.clone();
                view! {
                    <div class="header">
                        <div class="header__content">
                            <h1 class="header__title">
                                {format!("Order #{}", &current.id.value().to_string()[..8])}
                            </h1>
                            <Badge
                                text=current.status.label()
                                modifier=current.status.as_str()
                            />
                        </div>
                        <div class="header__actions">
                            <Button variant="ghost" on_click=Callback::new(move |_| delete())>
                                "Delete order"
                            </Button>
                        </div>
                    </div>

                    {move || {
                        notice
                            .get()
                            .map(|text| view! { <div class="toast">{text}</div> })
                    }}

                    <section class="details-section">
                        <h3 class="details-section__title">"Status"</h3>
                        <div class="form__row form__row--inline">
                            <Select value=status_value options />
                            <Button
                                loading=saving_status
                                on_click=Callback::new(move |_| save_status())
                            >
                                "Save status"
                            </Button>
                        </div>
                    </section>

                    <section class="details-section">
                        <h3 class="details-section__title">"Customer"</h3>
                        {move || {
                            if editing_customer.get() {
                                view! {
                                    <div class="form__row">
                                        <TextField label="Name" value=customer_name />
                                        <TextField label="Email" value=customer_email />
                                        <TextField label="Phone" value=customer_phone />
                                    </div>
                                    <Button on_click=Callback::new(move |_| save_customer())>
                                        "Apply"
                                    </Button>
                                }
                                    .into_any()
                            } else {
                                let customer = order
                                    .read()
                                    .as_ref()
                                    .map(|o| o.customer.clone())
                                    .unwrap_or_default();
                                view! {
                                    <p>{customer.name}</p>
                                    <p>{customer.email}</p>
                                    <p>{customer.phone}</p>
                                    <Button
                                        variant="secondary"
                                        on_click=Callback::new(move |_| start_customer_edit())
                                    >
                                        "Edit"
                                    </Button>
                                }
                                    .into_any()
                            }
                        }}
                    </section>

                    <section class="details-section">
                        <h3 class="details-section__title">"Shipping"</h3>
                        {move || {
                            if editing_shipping.get() {
                                view! {
                                    <div class="form__row">
                                        <TextField label="Address" value=shipping_address />
                                        <TextField label="City" value=shipping_city />
                                        <TextField label="Postal code" value=shipping_postal />
                                        <TextField label="Country" value=shipping_country />
                                    </div>
                                    <Button on_click=Callback::new(move |_| save_shipping())>
                                        "Apply"
                                    </Button>
                                }
                                    .into_any()
                            } else {
                                let shipping = order
                                    .read()
                                    .as_ref()
                                    .map(|o| o.shipping.clone())
                                    .unwrap_or_default();
                                view! {
                                    <p>{shipping.address}</p>
                                    <p>
                                        {format!(
                                            "{} {} {}",
                                            shipping.postal_code,
                                            shipping.city,
                                            shipping.country,
                                        )}
                                    </p>
                                    <Button
                                        variant="secondary"
                                        on_click=Callback::new(move |_| start_shipping_edit())
                                    >
                                        "Edit"
                                    </Button>
                                }
                                    .into_any()
                            }
                        }}
                    </section>

                    <section class="details-section">
                        <h3 class="details-section__title">"Items"</h3>
                        <table class="table table--compact">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Size"</th>
                                    <th>"Price"</th>
                                    <th>"Quantity"</th>
                                    <th>"Subtotal"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    order
                                        .read()
                                        .as_ref()
                                        .map(|o| o.items.clone())
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|item| {
                                            let item_id = item.id;
                                            view! {
                                                <tr>
                                                    <td>{item.product_title.clone()}</td>
                                                    <td>{item.size.clone().unwrap_or_default()}</td>
                                                    <td>{format!("{:.2}", item.price)}</td>
                                                    <td>
                                                        <input
                                                            class="form__input form__input--narrow"
                                                            type="number"
                                                            min="1"
                                                            prop:value=item.quantity.to_string()
                                                            on:change=move |ev| {
                                                                let parsed = event_target_value(&ev)
                                                                    .trim()
                                                                    .parse::<i64>()
                                                                    .unwrap_or(1);
                                                                order.update(|o| {
                                                                    if let Some(o) = o {
                                                                        stage_item_quantity(o, item_id, parsed);
                                                                    }
                                                                });
                                                            }
                                                        />
                                                    </td>
                                                    <td>{format!("{:.2}", item.subtotal())}</td>
                                                    <td>
                                                        <Button
                                                            variant="ghost"
                                                            on_click=Callback::new(move |_| {
                                                                order.update(|o| {
                                                                    if let Some(o) = o {
                                                                        stage_item_removal(o, item_id);
                                                                    }
                                                                });
                                                            })
                                                        >
                                                            "Remove"
                                                        </Button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                        <p class="details-section__total">
                            {move || {
                                format!(
                                    "Total: {:.2}",
                                    order.read().as_ref().map(Order::total_amount).unwrap_or(0.0),
                                )
                            }}
                        </p>
                        <p class="details-section__note">
                            "Item changes are staged locally and not yet persisted."
                        </p>
                    </section>
                }
                .into_any()
            }}
        </div>
    }
}
