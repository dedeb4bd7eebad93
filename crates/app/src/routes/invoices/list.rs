use dioxus::prelude::*;
use server::api::list_invoices;
use shared_types::{AppError, InvoiceResponse};
use shared_ui::components::{
    Badge, ButtonVariant, Card, DataTable, DataTableCell, DataTableEmpty,
    DataTableRow, LinkButton, PageHeader,
};

use super::{status_badge, status_icon};
use crate::format_helpers::{format_currency, format_date_human};
use crate::routes::Route;

const COLUMNS: [&str; 4] = ["Customer", "Amount", "Date", "Status"];

/// Invoice listing, newest first.
#[component]
pub fn InvoiceList() -> Element {
    let invoices = use_server_future(list_invoices)?;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./invoices.css") }

        div { class: "container",
            PageHeader {
                title: "Invoices",
                actions: rsx! {
                    LinkButton {
                        href: Route::InvoiceCreate {}.to_string(),
                        variant: ButtonVariant::Primary,
                        "Create Invoice"
                    }
                },
            }

            Card {
                match invoices() {
                    None => rsx! {
                        div { class: "invoice-list-empty", "Loading invoices..." }
                    },
                    Some(Err(err)) => {
                        let msg = AppError::friendly_message(&err.to_string());
                        rsx! {
                            div { class: "invoice-list-empty", "Error loading invoices: {msg}" }
                        }
                    }
                    Some(Ok(rows)) => rsx! { InvoiceTable { invoices: rows } },
                }
            }
        }
    }
}

#[component]
fn InvoiceTable(invoices: Vec<InvoiceResponse>) -> Element {
    rsx! {
        DataTable { columns: COLUMNS.map(String::from).to_vec(),
            if invoices.is_empty() {
                DataTableEmpty { columns: COLUMNS.len(), "No invoices yet." }
            }
            for invoice in invoices.iter() {
                DataTableRow { key: "{invoice.id}",
                    DataTableCell { "{invoice.customer_name}" }
                    DataTableCell { numeric: true, {format_currency(invoice.amount_in_cents)} }
                    DataTableCell { {format_date_human(&invoice.date)} }
                    DataTableCell {
                        Badge {
                            variant: status_badge(invoice.status),
                            icon: status_icon(invoice.status),
                            {invoice.status.label()}
                        }
                    }
                }
            }
        }
    }
}
