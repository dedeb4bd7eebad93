use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Success => "success",
        }
    }
}

/// Rounded pill for statuses, with an optional trailing icon.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] icon: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-style": variant.class(),
            {children}
            if let Some(icon) = icon {
                span { class: "badge-icon", aria_hidden: "true", {icon} }
            }
        }
    }
}
