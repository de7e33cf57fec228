//! Product list page: fetch on mount, multi-select delete, entry point
//! into the creation wizard.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::aggregate::{Product, ProductId};
use thaw::Input;

use crate::domain::a001_product::api;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::loading::LoadingIndicator;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;

struct ProductRow {
    id: ProductId,
    title: String,
    sku: String,
    category: String,
    price: String,
    published: bool,
    created_at: String,
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            sku: product.sku,
            category: product.category,
            price: format!("{:.2}", product.base_price),
            published: product.published,
            created_at: product
                .created_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Delete ids in order, stopping at the first failure so the remaining
/// products stay listed and the error can be shown.
async fn delete_products<F, Fut>(ids: Vec<ProductId>, delete: F) -> Result<(), String>
where
    F: Fn(ProductId) -> Fut,
    Fut: std::future::Future<Output = Result<(), String>>,
{
    for id in ids {
        delete(id).await?;
    }
    Ok(())
}

fn matches_search(product: &Product, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    product.title.to_lowercase().contains(&query) || product.sku.to_lowercase().contains(&query)
}

#[component]
pub fn ProductList() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let selected = RwSignal::new(HashSet::<ProductId>::new());
    let deleting = RwSignal::new(false);
    let navigate = use_navigate();

    let fetch = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    products.set(list);
                    selected.set(HashSet::new());
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };
    fetch();

    let toggle = move |id: ProductId| {
        selected.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<ProductId> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {} product(s)?", ids.len()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            let result = delete_products(ids, api::delete_product).await;
            deleting.set(false);
            match result {
                // Refetch only on success; a refetch after a failure
                // would clear the error before the user sees it.
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("product delete failed: {}", e);
                    error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Products"</h1>
                <div class="header__actions">
                    <Input value=search placeholder="Search title or SKU" />
                    <Button variant="ghost" on_click=Callback::new(move |_| fetch())>
                        {icon("refresh")}
                    </Button>
                    <Button
                        variant="secondary"
                        loading=deleting
                        disabled=Signal::derive(move || selected.read().is_empty())
                        on_click=Callback::new(move |_| delete_selected())
                    >
                        {icon("delete")}
                        "Delete selected"
                    </Button>
                    <Button on_click=Callback::new(move |_| {
                        navigate("/products/new", NavigateOptions::default())
                    })>{icon("plus")} "New product"</Button>
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
                let query = search.get();
                let rows: Vec<ProductRow> = products
                    .get()
                    .into_iter()
                    .filter(|p| matches_search(p, &query))
                    .map(ProductRow::from)
                    .collect();
                if rows.is_empty() {
                    return view! {
                        <p class="page__empty">"No products match. Create the first one."</p>
                    }
                    .into_any();
                }
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>"Title"</th>
                                <th>"SKU"</th>
                                <th>"Category"</th>
                                <th>"Price"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    view! {
                                        <tr>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || selected.read().contains(&id)
                                                    on:change=move |_| toggle(id)
                                                />
                                            </td>
                                            <td>{row.title}</td>
                                            <td>{row.sku}</td>
                                            <td>{row.category}</td>
                                            <td>{row.price}</td>
                                            <td>
                                                {if row.published {
                                                    view! { <Badge text="published" modifier="ok" /> }
                                                } else {
                                                    view! { <Badge text="draft" modifier="muted" /> }
                                                }}
                                            </td>
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
    use uuid::Uuid;

    #[test]
    fn row_formats_price_and_missing_timestamp() {
        let product = Product {
            id: ProductId::new(Uuid::new_v4()),
            title: "T".to_string(),
            description: String::new(),
            sku: "S1".to_string(),
            category: String::new(),
            base_price: 10.0,
            published: false,
            sizes: Vec::new(),
            images: Vec::new(),
            created_at: None,
        };
        let row = ProductRow::from(product);
        assert_eq!(row.price, "10.00");
        assert_eq!(row.created_at, "");
    }

    #[test]
    fn delete_stops_at_first_failure_and_keeps_the_error() {
        let good = ProductId::new(Uuid::new_v4());
        let bad = ProductId::new(Uuid::new_v4());
        let never_reached = ProductId::new(Uuid::new_v4());
        let attempted = std::cell::RefCell::new(Vec::new());

        let result = futures::executor::block_on(delete_products(
            vec![good, bad, never_reached],
            |id| {
                attempted.borrow_mut().push(id);
                async move {
                    if id == bad {
                        Err("delete rejected".to_string())
                    } else {
                        Ok(())
                    }
                }
            },
        ));

        assert_eq!(result, Err("delete rejected".to_string()));
        assert_eq!(attempted.borrow().as_slice(), &[good, bad]);
    }

    #[test]
    fn search_matches_title_or_sku_case_insensitively() {
        let product = Product {
            id: ProductId::new(Uuid::new_v4()),
            title: "Trail Runner".to_string(),
            description: String::new(),
            sku: "TR-1".to_string(),
            category: String::new(),
            base_price: 10.0,
            published: false,
            sizes: Vec::new(),
            images: Vec::new(),
            created_at: None,
        };
        assert!(matches_search(&product, ""));
        assert!(matches_search(&product, "trail"));
        assert!(matches_search(&product, "tr-1"));
        assert!(!matches_search(&product, "boot"));
    }
}
