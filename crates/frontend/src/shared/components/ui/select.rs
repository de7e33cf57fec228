use leptos::prelude::*;

/// Native select bound to an `RwSignal<String>` holding the selected
/// option value.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Selected option value, two-way bound
    #[prop(into)]
    value: RwSignal<String>,
    /// Options as (value, label) pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <select
                class="form__select"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
