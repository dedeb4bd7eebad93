use dioxus::prelude::*;

/// Form wrapper that prevents the browser's default submission and hands the
/// event to `onsubmit`, so submission goes through a server function instead
/// of a page load.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// One labelled input group inside a form.
#[component]
pub fn FormGroup(children: Element) -> Element {
    rsx! {
        div { class: "form-group", {children} }
    }
}

/// Right-aligned row of form buttons.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "form-actions", {children} }
    }
}
