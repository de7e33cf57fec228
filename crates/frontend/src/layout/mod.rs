use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Application frame: fixed sidebar on the left, routed content on the right.
#[component]
#[allow(non_snake_case)]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">{children()}</main>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Catalog Admin"</div>
            <ul class="sidebar__menu">
                <li class="sidebar__item">
                    <A href="/" attr:class="sidebar__link">
                        {icon("products")}
                        <span>"Products"</span>
                    </A>
                </li>
                <li class="sidebar__item">
                    <A href="/orders" attr:class="sidebar__link">
                        {icon("orders")}
                        <span>"Orders"</span>
                    </A>
                </li>
                <li class="sidebar__item">
                    <A href="/settings/delivery-areas" attr:class="sidebar__link">
                        {icon("truck")}
                        <span>"Delivery areas"</span>
                    </A>
                </li>
            </ul>
        </nav>
    }
}
