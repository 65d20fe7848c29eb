//! Inline form messages.

use leptos::prelude::*;

/// General error banner above a form; hidden while `message` is `None`.
#[component]
pub fn FormAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="form-alert" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Message under one input, linked through `aria-describedby`.
#[component]
pub fn FieldError(
    id: &'static str,
    #[prop(into)] message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p id=id class="field-error">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
