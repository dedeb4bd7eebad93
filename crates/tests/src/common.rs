use chrono::NaiveDate;
use server::repo::InvoiceStore;
use shared_types::{AppError, CustomerField, FormState, Invoice, InvoiceFormFields};

/// Customers used across the invoice tests, in display order.
pub fn customers() -> Vec<CustomerField> {
    vec![
        CustomerField::new("3958dc9e-712f-4377-85e9-fec4b6a6442a", "Delba de Oliveira"),
        CustomerField::new("3958dc9e-742f-4377-85e9-fec4b6a6442a", "Lee Robinson"),
        CustomerField::new("3958dc9e-737f-4377-85e9-fec4b6a6442a", "Hector Simpson"),
    ]
}

pub fn customer_id(index: usize) -> String {
    customers()[index].id.clone()
}

pub fn fields(customer_id: &str, amount: &str, status: Option<&str>) -> InvoiceFormFields {
    InvoiceFormFields {
        customer_id: customer_id.to_string(),
        amount: amount.to_string(),
        status: status.map(String::from),
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn fresh_state() -> FormState {
    FormState::default()
}

/// Store whose writes always fail, standing in for an unavailable database.
pub struct FailingStore;

impl InvoiceStore for FailingStore {
    async fn insert(&self, _invoice: Invoice) -> Result<Invoice, AppError> {
        Err(AppError::database("connection refused"))
    }

    async fn list(&self) -> Result<Vec<Invoice>, AppError> {
        Err(AppError::database("connection refused"))
    }
}
