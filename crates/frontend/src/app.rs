use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a001_product::ui::wizard::ProductWizard;
use crate::domain::a002_order::ui::details::OrderDetails;
use crate::domain::a002_order::ui::list::OrderList;
use crate::domain::a003_delivery_area::ui::settings::DeliveryAreaSettings;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="page__empty">"Page not found"</p> }>
                    <Route path=path!("/") view=ProductList />
                    <Route path=path!("/products/new") view=ProductWizard />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/orders/:id") view=OrderDetails />
                    <Route path=path!("/settings/delivery-areas") view=DeliveryAreaSettings />
                </Routes>
            </Shell>
        </Router>
    }
}
