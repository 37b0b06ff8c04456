//! Form Field Component
//!
//! Labelled input with an inline validation message.

use leptos::prelude::*;

/// Labelled text input bound to `value`.
/// Typing clears the field's error.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let input_class = move || {
        if error.get().is_some() { "form-input invalid" } else { "form-input" }
    };

    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type=input_type
                class=input_class
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if error.get_untracked().is_some() {
                        error.set(None);
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <div class="field-error">
                    <span class="field-error-icon">"!"</span>
                    <span>{message}</span>
                </div>
            })}
        </div>
    }
}
