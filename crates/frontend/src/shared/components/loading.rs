use leptos::prelude::*;

/// Centered loading indicator shown while a page's initial fetch is
/// pending.
#[component]
pub fn LoadingIndicator(
    #[prop(optional, into)] label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">
                {move || label.get().unwrap_or_else(|| "Loading...".to_string())}
            </span>
        </div>
    }
}
