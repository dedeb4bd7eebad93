use dioxus::prelude::*;

/// Text input with an optional leading icon.
///
/// `name` and `step` are only emitted when non-empty. Global attributes such
/// as `id` and `aria_describedby` pass straight through to the `<input>`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] step: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] leading_icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_icon = leading_icon.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: if has_icon { "input-wrapper with-icon" } else { "input-wrapper" },
            input {
                r#type: "{input_type}",
                name: (!name.is_empty()).then(|| name.clone()),
                step: (!step.is_empty()).then(|| step.clone()),
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(icon) = leading_icon {
                span { class: "input-icon", {icon} }
            }
        }
    }
}
