use server::invoice::{validate_fields, CUSTOMER_REQUIRED_MESSAGE, MISSING_FIELDS_MESSAGE};
use shared_types::{InvoiceField, InvoiceStatus};

use crate::common;

const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0.";
const STATUS_MESSAGE: &str = "Please select an invoice status.";

#[test]
fn test_amount_inputs() {
    let customer = common::customer_id(0);
    let cases = [
        ("10", Some(1000)),
        ("0.01", Some(1)),
        ("157.95", Some(15795)),
        ("1e3", Some(100000)),
        ("  12.5 ", Some(1250)),
        ("", None),
        ("abc", None),
        ("0", None),
        ("-4.20", None),
        ("NaN", None),
        ("inf", None),
        ("0.004", None),
        ("1e300", None),
    ];

    for (amount, expected) in cases {
        let result = validate_fields(&common::fields(&customer, amount, Some("paid")), &common::customers());
        match expected {
            Some(cents) => {
                let valid = result.unwrap_or_else(|s| panic!("{amount:?} rejected: {s:?}"));
                assert_eq!(valid.amount_in_cents, cents, "amount {amount:?}");
            }
            None => {
                let state = result.expect_err(amount);
                assert_eq!(state.field_errors(InvoiceField::Amount), [AMOUNT_MESSAGE], "amount {amount:?}");
                assert_eq!(state.summary(), Some(MISSING_FIELDS_MESSAGE));
            }
        }
    }
}

#[test]
fn test_status_inputs() {
    let customer = common::customer_id(0);
    for (status, expected) in [
        (Some("pending"), Some(InvoiceStatus::Pending)),
        (Some("paid"), Some(InvoiceStatus::Paid)),
        (Some("overdue"), None),
        (Some("Paid"), None),
        (Some(""), None),
        (None, None),
    ] {
        let result = validate_fields(&common::fields(&customer, "5", status), &common::customers());
        match expected {
            Some(s) => assert_eq!(result.unwrap().status, s),
            None => {
                let state = result.expect_err("status should be rejected");
                assert_eq!(state.field_errors(InvoiceField::Status), [STATUS_MESSAGE]);
            }
        }
    }
}

#[test]
fn test_customer_inputs() {
    for customer in ["", "   ", "not-a-customer"] {
        let state = validate_fields(&common::fields(customer, "5", Some("paid")), &common::customers())
            .expect_err(customer);
        assert_eq!(
            state.field_errors(InvoiceField::CustomerId),
            [CUSTOMER_REQUIRED_MESSAGE],
            "customer {customer:?}"
        );
    }
}

#[test]
fn test_no_customers_configured_rejects_every_id() {
    let state = validate_fields(&common::fields(&common::customer_id(0), "5", Some("paid")), &[])
        .expect_err("no customers are known");
    assert_eq!(
        state.field_errors(InvoiceField::CustomerId),
        [CUSTOMER_REQUIRED_MESSAGE]
    );
}

#[test]
fn test_errors_use_wire_field_names() {
    let state = validate_fields(&common::fields("", "", None), &common::customers()).unwrap_err();
    let mut keys: Vec<&str> = state.errors.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["amount", "customerId", "status"]);
}
