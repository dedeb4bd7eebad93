use dioxus::prelude::*;

/// Visual variant for buttons and button-styled links.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
        }
    }
}

fn button_attributes(variant: ButtonVariant, extra: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    dioxus_primitives::merge_attributes(vec![base, extra])
}

/// Dashboard button. Defaults to `type="button"`; pass `button_type: "submit"`
/// to submit the enclosing form.
///
/// A `busy` button is disabled and marked `aria-busy` while an action it
/// started is still running.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] button_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] busy: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = button_attributes(variant, attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{button_type}",
            disabled: disabled || busy,
            aria_busy: if busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

/// An anchor styled as a button, for navigation actions such as "Cancel".
#[component]
pub fn LinkButton(
    href: String,
    #[props(default)] variant: ButtonVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = button_attributes(variant, attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        a {
            href: "{href}",
            ..merged,
            {children}
        }
    }
}
