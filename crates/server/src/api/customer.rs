use dioxus::prelude::*;
use shared_types::CustomerField;

/// Customers the invoice form offers, in configured order.
#[server]
pub async fn list_customers() -> Result<Vec<CustomerField>, ServerFnError> {
    Ok(crate::config::customers().to_vec())
}
