use dioxus::prelude::*;

/// A native `<select>` for form fields.
///
/// Wraps the element with `appearance: none` styling and an optional leading
/// icon. Children should be `option { value: "...", "Label" }` elements.
/// Global attributes (`id`, `aria_describedby`, ...) land on the `<select>`.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Form field name submitted with the value.
    #[props(default)]
    name: String,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
    #[props(default)]
    leading_icon: Option<Element>,
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_icon = leading_icon.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: if has_icon { "form-select-wrapper with-icon" } else { "form-select-wrapper" },
            select {
                name: (!name.is_empty()).then(|| name.clone()),
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..merged,
                {children}
            }
            if let Some(icon) = leading_icon {
                span { class: "form-select-icon", {icon} }
            }
        }
    }
}
