use leptos::prelude::*;

/// Labelled input bound to an `RwSignal<String>`, with an inline
/// per-field validation message below the control.
#[component]
pub fn TextField(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value, two-way bound
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Validation message for this field (reactive)
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Fired after the bound value updates (used for dirty tracking)
    #[prop(optional)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}{required.then(|| " *")}</label>
            })}
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    let entered = event_target_value(&ev);
                    value.set(entered.clone());
                    if let Some(handler) = on_input {
                        handler.run(entered);
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
