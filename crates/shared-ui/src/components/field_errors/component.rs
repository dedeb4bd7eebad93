use dioxus::prelude::*;

/// Live region listing the validation messages for one form field.
///
/// Every message renders as its own line in the order given. Lines are keyed
/// by position so identical messages all render. The region itself is always
/// present so `aria-describedby` on the input has a target.
#[component]
pub fn FieldErrors(
    /// DOM id referenced by the input's `aria-describedby`.
    id: String,
    #[props(default)] messages: Vec<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            id: "{id}",
            class: "field-errors",
            aria_live: "polite",
            aria_atomic: "true",
            for (index, message) in messages.iter().enumerate() {
                p { key: "{index}", class: "field-error", "{message}" }
            }
        }
    }
}

/// Live region for the whole-form summary message. Renders the message once
/// when it is present and non-empty.
#[component]
pub fn FormMessage(
    id: String,
    #[props(default)] message: Option<String>,
) -> Element {
    let message = message.filter(|m| !m.is_empty());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            id: "{id}",
            class: "form-message",
            aria_live: "polite",
            aria_atomic: "true",
            if let Some(message) = message {
                p { class: "form-message-text", "{message}" }
            }
        }
    }
}
