//! Order list page. Rows link into the detail view.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a002_order::aggregate::{Order, OrderId, OrderStatus};

use crate::domain::a002_order::api;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::loading::LoadingIndicator;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;

struct OrderRow {
    id: OrderId,
    customer: String,
    status: OrderStatus,
    items: usize,
    total: String,
    created_at: String,
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer: order.customer.name.clone(),
            status: order.status,
            items: order.items.len(),
            total: format!("{:.2}", order.total_amount()),
            created_at: order
                .created_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let navigate = use_navigate();

    let fetch = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(list) => orders.set(list),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };
    fetch();

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Orders"</h1>
                <div class="header__actions">
                    <Button variant="ghost" on_click=Callback::new(move |_| fetch())>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

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
                let rows: Vec<OrderRow> = orders.get().into_iter().map(OrderRow::from).collect();
                if rows.is_empty() {
                    return view! { <p class="page__empty">"No orders yet."</p> }.into_any();
                }
                let navigate = navigate.clone();
                view! {
                    <table class="table table--clickable">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Customer"</th>
                                <th>"Status"</th>
                                <th>"Items"</th>
                                <th>"Total"</th>
                                <th>"Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let navigate = navigate.clone();
                                    let id = row.id;
                                    let short_id = row.id.value().to_string()[..8].to_string();
                                    view! {
                                        <tr on:click=move |_| {
                                            navigate(
                                                &format!("/orders/{}", id),
                                                NavigateOptions::default(),
                                            )
                                        }>
                                            <td>{format!("#{}", short_id)}</td>
                                            <td>{row.customer}</td>
                                            <td>
                                                <Badge
                                                    text=row.status.label()
                                                    modifier=row.status.as_str()
                                                />
                                            </td>
                                            <td>{row.items}</td>
                                            <td>{row.total}</td>
                                            <td>{row.created_at}</td>
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
    use contracts::domain::a002_order::aggregate::{CustomerInfo, OrderItem, ShippingInfo};
    use contracts::domain::a001_product::aggregate::ProductId;
    use uuid::Uuid;

    #[test]
    fn row_totals_and_counts_items() {
        let order = Order {
            id: OrderId::new(Uuid::new_v4()),
            status: OrderStatus::Confirmed,
            customer: CustomerInfo {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: String::new(),
            },
            shipping: ShippingInfo::default(),
            items: vec![
                OrderItem {
                    id: Uuid::new_v4(),
                    product_id: ProductId::new(Uuid::new_v4()),
                    product_title: String::new(),
                    color_id: None,
                    size: None,
                    quantity: 2,
                    price: 10.0,
                },
            ],
            created_at: None,
        };
        let row = OrderRow::from(order);
        assert_eq!(row.customer, "Ada");
        assert_eq!(row.items, 1);
        assert_eq!(row.total, "20.00");
    }
}
