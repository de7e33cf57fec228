use crate::shared::components::ui::Button;
use leptos::prelude::*;

/// Centered load-failure state with a manual retry control.
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-panel">
            <span class="error-panel__icon" aria-hidden="true">"⚠"</span>
            <p class="error-panel__message">{move || message.get()}</p>
            {on_retry.map(|retry| view! {
                <Button variant="secondary" on_click=Callback::new(move |_| retry.run(()))>
                    "Retry"
                </Button>
            })}
        </div>
    }
}
