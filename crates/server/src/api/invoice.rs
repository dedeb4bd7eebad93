use dioxus::prelude::*;
use shared_types::{CreateInvoiceResult, FormState, InvoiceFormFields, InvoiceResponse};

// ═══════════════════════════════════════════════════════════════
// Invoice server functions
// ═══════════════════════════════════════════════════════════════

/// Submit the invoice create form.
///
/// Validation failures and store failures come back as
/// `CreateInvoiceResult::Rejected` carrying the next form state, not as
/// errors. `Err` is reserved for transport and server faults.
#[cfg_attr(feature = "server", tracing::instrument(skip(previous)))]
#[server]
pub async fn create_invoice(
    previous: FormState,
    fields: InvoiceFormFields,
) -> Result<CreateInvoiceResult, ServerFnError> {
    use crate::config::customers;
    use crate::repo::invoice_store;

    let today = chrono::Utc::now().date_naive();
    let result =
        crate::invoice::create_invoice(invoice_store(), customers(), &previous, &fields, today)
            .await;

    Ok(result)
}

/// List created invoices, newest first.
#[server]
pub async fn list_invoices() -> Result<Vec<InvoiceResponse>, ServerFnError> {
    use crate::config::customers;
    use crate::error_convert::AppErrorExt;
    use crate::repo::{invoice_store, InvoiceStore};

    let invoices = invoice_store()
        .list()
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(crate::invoice::to_responses(invoices, customers()))
}
