pub mod invoices;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdPlus};
use dioxus_free_icons::Icon;

use invoices::{InvoiceCreate, InvoiceList};
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::InvoiceList {})]
    #[layout(DashboardLayout)]
    #[route("/dashboard/invoices")]
    InvoiceList {},
    #[route("/dashboard/invoices/create")]
    InvoiceCreate {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "dashboard-link active"
    } else {
        "dashboard-link"
    }
}

/// Dashboard shell: top navigation and the routed page below it.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::InvoiceList {} => "Invoices",
        Route::InvoiceCreate {} => "Create Invoice",
        Route::NotFound { .. } => "Not Found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "{page_title} | Acme Dashboard" }

        div { class: "dashboard-shell",
            header { class: "dashboard-nav",
                span { class: "dashboard-brand", "Acme" }
                nav { class: "dashboard-links",
                    Link {
                        to: Route::InvoiceList {},
                        class: nav_link_class(matches!(route, Route::InvoiceList {})),
                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                        "Invoices"
                    }
                    Link {
                        to: Route::InvoiceCreate {},
                        class: nav_link_class(matches!(route, Route::InvoiceCreate {})),
                        Icon::<LdPlus> { icon: LdPlus, width: 18, height: 18 }
                        "New Invoice"
                    }
                }
            }
            main { class: "dashboard-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_paths_round_trip() {
        assert_eq!(Route::InvoiceList {}.to_string(), "/dashboard/invoices");
        assert_eq!(Route::InvoiceCreate {}.to_string(), "/dashboard/invoices/create");
        assert_eq!(
            "/dashboard/invoices/create".parse::<Route>().ok(),
            Some(Route::InvoiceCreate {})
        );
    }

    #[test]
    fn unknown_path_falls_through_to_not_found() {
        assert_eq!(
            "/nope/here".parse::<Route>().ok(),
            Some(Route::NotFound {
                route: vec!["nope".to_string(), "here".to_string()],
            })
        );
    }
}
