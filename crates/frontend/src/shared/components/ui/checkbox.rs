use leptos::prelude::*;

/// Labelled checkbox bound to an `RwSignal<bool>`.
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state, two-way bound
    #[prop(into)]
    checked: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-wrapper">
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
