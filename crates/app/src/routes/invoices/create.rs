use dioxus::prelude::*;
use server::api::{create_invoice, list_customers};
use shared_types::AppError;
use shared_ui::components::{Breadcrumb, Button, ButtonVariant, Card, PageHeader};

use super::action::{resolve_outcome, InvoiceAction};
use super::create_form::InvoiceCreateForm;
use crate::routes::Route;

/// Create invoice page: loads the customers and wires the form to the
/// `create_invoice` server function.
#[component]
pub fn InvoiceCreate() -> Element {
    let mut customers = use_server_future(list_customers)?;
    let nav = navigator();

    let action = use_hook(|| {
        InvoiceAction::new(move |previous, fields| async move {
            let (state, created) = resolve_outcome(create_invoice(previous, fields).await);
            if let Some(invoice) = created {
                tracing::info!(invoice_id = %invoice.id, "invoice created");
                nav.push(Route::InvoiceList {});
            }
            state
        })
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Create Invoice",
                breadcrumbs: vec![
                    Breadcrumb::link("Invoices", Route::InvoiceList {}.to_string()),
                    Breadcrumb::current("Create Invoice"),
                ],
            }

            match customers() {
                None => rsx! {
                    div { class: "invoice-list-empty", "Loading customers..." }
                },
                Some(Err(err)) => {
                    let msg = AppError::friendly_message(&err.to_string());
                    rsx! {
                        Card { title: "Error",
                            p { "Failed to load customers: {msg}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| { customers.restart(); },
                                "Retry"
                            }
                        }
                    }
                }
                Some(Ok(list)) => rsx! {
                    InvoiceCreateForm { customers: list, action: action.clone() }
                },
            }
        }
    }
}
