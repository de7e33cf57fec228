use leptos::prelude::*;

/// Small colored label, e.g. an order status or an active/inactive flag.
/// The modifier becomes a `badge--<modifier>` CSS class.
#[component]
pub fn Badge(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] modifier: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--{}", modifier.get())>{move || text.get()}</span>
    }
}
