use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::AppError;

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

/// The three inputs of the invoice create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    CustomerId,
    Amount,
    Status,
}

impl InvoiceField {
    /// Wire name of the field. The create action keys its errors off these.
    pub fn name(&self) -> &'static str {
        match self {
            InvoiceField::CustomerId => "customerId",
            InvoiceField::Amount => "amount",
            InvoiceField::Status => "status",
        }
    }

    /// DOM id of the error region that `aria-describedby` points at.
    pub fn error_region_id(&self) -> &'static str {
        match self {
            InvoiceField::CustomerId => "customer-error",
            InvoiceField::Amount => "amount-error",
            InvoiceField::Status => "status-error",
        }
    }

    /// Map a validator field key (snake_case struct field) to the form field.
    pub fn from_struct_field(field: &str) -> Option<Self> {
        match field {
            "customer_id" => Some(InvoiceField::CustomerId),
            "amount" => Some(InvoiceField::Amount),
            "status" => Some(InvoiceField::Status),
            _ => None,
        }
    }
}

/// Raw values submitted by the invoice create form.
///
/// Nothing is parsed on the client; the create action owns validation.
/// `status` is `None` when neither radio is checked, matching a browser
/// form submission that omits unchecked radios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormFields {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// View state of the invoice create form: an optional summary message and
/// per-field validation messages, replaced wholesale after every submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

impl FormState {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: HashMap::new(),
        }
    }

    /// Append a message to a field's error list. Duplicates are kept.
    pub fn push_field_error(&mut self, field: InvoiceField, message: impl Into<String>) {
        self.errors
            .entry(field.name().to_string())
            .or_default()
            .push(message.into());
    }

    /// Messages for one field in the order the action supplied them.
    pub fn field_errors(&self, field: InvoiceField) -> &[String] {
        self.errors
            .get(field.name())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Summary message, if present and non-empty.
    pub fn summary(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn has_field_errors(&self) -> bool {
        self.errors.values().any(|msgs| !msgs.is_empty())
    }
}

impl From<AppError> for FormState {
    fn from(err: AppError) -> Self {
        Self {
            message: Some(err.message),
            errors: err.field_errors,
        }
    }
}

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// Invoice status. Wire values are `pending` and `paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

/// Statuses in the order the form presents them.
pub const INVOICE_STATUSES: &[InvoiceStatus] = &[InvoiceStatus::Pending, InvoiceStatus::Paid];

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
        }
    }

    /// Parse a wire value. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// API response for an invoice, joined with the customer name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: String,
}

impl InvoiceResponse {
    pub fn from_invoice(invoice: Invoice, customer_name: impl Into<String>) -> Self {
        Self {
            id: invoice.id.to_string(),
            customer_id: invoice.customer_id,
            customer_name: customer_name.into(),
            amount_in_cents: invoice.amount_in_cents,
            status: invoice.status,
            date: invoice.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Outcome of the create-invoice server function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CreateInvoiceResult {
    Created { invoice: InvoiceResponse },
    Rejected { state: FormState },
}

/// Typed create request, parsed from [`InvoiceFormFields`] on the server.
///
/// An amount that does not parse as a number and an unknown status string
/// both become `None` so the `required` rules report them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateInvoiceRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please select a customer."))
    )]
    pub customer_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            required(message = "Please enter an amount greater than $0."),
            range(exclusive_min = 0.0, message = "Please enter an amount greater than $0.")
        )
    )]
    pub amount: Option<f64>,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Please select an invoice status."))
    )]
    pub status: Option<InvoiceStatus>,
}

impl From<&InvoiceFormFields> for CreateInvoiceRequest {
    fn from(fields: &InvoiceFormFields) -> Self {
        Self {
            customer_id: fields.customer_id.trim().to_string(),
            amount: parse_amount(&fields.amount),
            status: fields.status.as_deref().and_then(InvoiceStatus::parse),
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Convert a dollar amount to whole cents, rounding to the nearest cent.
///
/// Returns `None` when the rounded value does not fit in an `i64`.
pub fn amount_to_cents(amount: f64) -> Option<i64> {
    let cents = (amount * 100.0).round();
    if !cents.is_finite() || cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
        return None;
    }
    Some(cents as i64)
}
