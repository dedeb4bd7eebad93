use dioxus::prelude::*;

/// One step in a page's breadcrumb trail. The step without an `href` is the
/// current page.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Page title row with an optional breadcrumb trail above it and actions
/// on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] breadcrumbs: Vec<Breadcrumb>,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            if !breadcrumbs.is_empty() {
                nav { class: "breadcrumbs", aria_label: "Breadcrumb",
                    ol {
                        for (index, crumb) in breadcrumbs.iter().enumerate() {
                            li { key: "{index}",
                                if let Some(href) = &crumb.href {
                                    a { href: "{href}", "{crumb.label}" }
                                } else {
                                    span { aria_current: "page", "{crumb.label}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "page-header-row",
                h1 { class: "page-title", "{title}" }
                if let Some(actions) = actions {
                    div { class: "page-actions", {actions} }
                }
            }
        }
    }
}
