use chrono::NaiveDate;
use shared_types::{
    amount_to_cents, find_customer, CreateInvoiceRequest, CreateInvoiceResult, CustomerField,
    FormState, Invoice, InvoiceField, InvoiceFormFields, InvoiceResponse, InvoiceStatus,
};
use uuid::Uuid;

use crate::error_convert::ValidateRequest;
use crate::repo::InvoiceStore;

/// Summary shown when any field fails validation.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";

/// Summary shown when the store rejects the insert.
pub const DATABASE_ERROR_MESSAGE: &str = "Database Error: Failed to Create Invoice.";

/// Field message for a missing, non-positive or unrepresentable amount.
pub const AMOUNT_REQUIRED_MESSAGE: &str = "Please enter an amount greater than $0.";

/// Field message for an empty or unknown customer id.
pub const CUSTOMER_REQUIRED_MESSAGE: &str = "Please select a customer.";

/// An invoice that passed validation and is ready to store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInvoice {
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
}

/// Validate raw form fields against the known customers.
///
/// On failure the returned `FormState` carries every field message keyed by
/// the form's wire names, plus the missing-fields summary.
pub fn validate_fields(
    fields: &InvoiceFormFields,
    customers: &[CustomerField],
) -> Result<ValidInvoice, FormState> {
    let request = CreateInvoiceRequest::from(fields);
    let mut state = FormState::default();

    if let Err(err) = request.validate_request() {
        for (field, messages) in err.field_errors {
            let Some(field) = InvoiceField::from_struct_field(&field) else {
                continue;
            };
            for message in messages {
                state.push_field_error(field, message);
            }
        }
    }

    if !request.customer_id.is_empty() && find_customer(customers, &request.customer_id).is_none()
    {
        state.push_field_error(InvoiceField::CustomerId, CUSTOMER_REQUIRED_MESSAGE);
    }

    // Positivity applies to the rounded cents that get stored.
    let cents = request
        .amount
        .and_then(amount_to_cents)
        .filter(|cents| *cents > 0);
    if cents.is_none() && state.field_errors(InvoiceField::Amount).is_empty() {
        state.push_field_error(InvoiceField::Amount, AMOUNT_REQUIRED_MESSAGE);
    }

    match (cents, request.status) {
        (Some(amount_in_cents), Some(status)) if !state.has_field_errors() => Ok(ValidInvoice {
            customer_id: request.customer_id,
            amount_in_cents,
            status,
        }),
        _ => {
            state.message = Some(MISSING_FIELDS_MESSAGE.to_string());
            Err(state)
        }
    }
}

/// Validate and store a new invoice.
///
/// `previous` is the form state the submission was made from; it does not
/// influence the outcome.
pub async fn create_invoice<S: InvoiceStore>(
    store: &S,
    customers: &[CustomerField],
    previous: &FormState,
    fields: &InvoiceFormFields,
    today: NaiveDate,
) -> CreateInvoiceResult {
    tracing::debug!(
        had_errors = previous.has_field_errors(),
        "create invoice submission"
    );

    let valid = match validate_fields(fields, customers) {
        Ok(valid) => valid,
        Err(state) => {
            tracing::info!(fields = ?state.errors.keys().collect::<Vec<_>>(), "invoice rejected");
            return CreateInvoiceResult::Rejected { state };
        }
    };

    let invoice = Invoice {
        id: Uuid::new_v4(),
        customer_id: valid.customer_id,
        amount_in_cents: valid.amount_in_cents,
        status: valid.status,
        date: today,
    };

    match store.insert(invoice).await {
        Ok(stored) => {
            tracing::info!(id = %stored.id, amount_in_cents = stored.amount_in_cents, "invoice created");
            let name = find_customer(customers, &stored.customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            CreateInvoiceResult::Created {
                invoice: InvoiceResponse::from_invoice(stored, name),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "invoice insert failed");
            CreateInvoiceResult::Rejected {
                state: FormState::with_message(DATABASE_ERROR_MESSAGE),
            }
        }
    }
}

/// Join stored invoices with customer names for display.
pub fn to_responses(invoices: Vec<Invoice>, customers: &[CustomerField]) -> Vec<InvoiceResponse> {
    invoices
        .into_iter()
        .map(|invoice| {
            let name = find_customer(customers, &invoice.customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| invoice.customer_id.clone());
            InvoiceResponse::from_invoice(invoice, name)
        })
        .collect()
}
