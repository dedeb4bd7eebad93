use dioxus::prelude::*;

/// Rounded panel. With a non-empty `title` the body sits under a heading
/// row; without one the children fill the panel.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if !title.is_empty() {
                header { class: "card-header",
                    h3 { class: "card-title", "{title}" }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}
