//! Labelled text input bound to a string in page state.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    /// Current value, read reactively.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value on every keystroke.
    on_input: Callback<String>,
    #[prop(optional)] min_length: Option<u32>,
    /// Span both columns of the form grid.
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let class = if wide { "form-field form-field--wide" } else { "form-field" };
    view! {
        <label class=class>
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                minlength=min_length.map(|n| n.to_string())
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
