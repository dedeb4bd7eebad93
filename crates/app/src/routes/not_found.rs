use dioxus::prelude::*;

use crate::routes::Route;

/// Fallback page for any path the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::warn!(%path, "no route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here" }
                p { class: "not-found-message",
                    "No dashboard page lives at "
                    code { "{path}" }
                    "."
                }
                div { class: "not-found-links",
                    Link { to: Route::InvoiceList {}, class: "not-found-link", "View invoices" }
                    Link { to: Route::InvoiceCreate {}, class: "not-found-link", "Create an invoice" }
                }
            }
        }
    }
}
