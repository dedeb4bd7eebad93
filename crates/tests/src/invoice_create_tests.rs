use pretty_assertions::assert_eq;
use server::invoice::{create_invoice, DATABASE_ERROR_MESSAGE, MISSING_FIELDS_MESSAGE};
use server::repo::{InvoiceStore, MemoryInvoiceStore};
use shared_types::{CreateInvoiceResult, FormState, InvoiceField, InvoiceStatus};

use crate::common::{self, FailingStore};

#[tokio::test]
async fn test_create_invoice_success() {
    let store = MemoryInvoiceStore::new();
    let customers = common::customers();
    let fields = common::fields(&common::customer_id(1), "157.95", Some("paid"));

    let result = create_invoice(&store, &customers, &common::fresh_state(), &fields, common::today()).await;

    let CreateInvoiceResult::Created { invoice } = result else {
        panic!("expected created, got {result:?}");
    };
    assert_eq!(invoice.customer_id, common::customer_id(1));
    assert_eq!(invoice.customer_name, "Lee Robinson");
    assert_eq!(invoice.amount_in_cents, 15795);
    assert_eq!(invoice.status, InvoiceStatus::Paid);
    assert_eq!(invoice.date, "2026-10-19");

    let stored = store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id.to_string(), invoice.id);
}

#[tokio::test]
async fn test_create_invoice_rejects_empty_submission() {
    let store = MemoryInvoiceStore::new();
    let customers = common::customers();

    let result = create_invoice(
        &store,
        &customers,
        &common::fresh_state(),
        &common::fields("", "", None),
        common::today(),
    )
    .await;

    let CreateInvoiceResult::Rejected { state } = result else {
        panic!("expected rejected, got {result:?}");
    };
    assert_eq!(state.summary(), Some(MISSING_FIELDS_MESSAGE));
    assert_eq!(
        state.field_errors(InvoiceField::CustomerId),
        ["Please select a customer."]
    );
    assert_eq!(
        state.field_errors(InvoiceField::Amount),
        ["Please enter an amount greater than $0."]
    );
    assert_eq!(
        state.field_errors(InvoiceField::Status),
        ["Please select an invoice status."]
    );
    assert!(store.list().await.unwrap().is_empty(), "nothing should be stored");
}

#[tokio::test]
async fn test_create_invoice_reports_only_failing_fields() {
    let store = MemoryInvoiceStore::new();
    let customers = common::customers();
    let fields = common::fields(&common::customer_id(0), "0", Some("pending"));

    let result = create_invoice(&store, &customers, &common::fresh_state(), &fields, common::today()).await;

    let CreateInvoiceResult::Rejected { state } = result else {
        panic!("expected rejected, got {result:?}");
    };
    assert_eq!(state.errors.len(), 1);
    assert_eq!(state.field_errors(InvoiceField::Amount).len(), 1);
    assert!(state.field_errors(InvoiceField::CustomerId).is_empty());
    assert!(state.field_errors(InvoiceField::Status).is_empty());
}

#[tokio::test]
async fn test_create_invoice_store_failure_sets_summary_only() {
    let customers = common::customers();
    let fields = common::fields(&common::customer_id(2), "12.00", Some("pending"));

    let result = create_invoice(&FailingStore, &customers, &common::fresh_state(), &fields, common::today()).await;

    assert_eq!(
        result,
        CreateInvoiceResult::Rejected {
            state: FormState::with_message(DATABASE_ERROR_MESSAGE),
        }
    );
}

#[tokio::test]
async fn test_previous_state_does_not_affect_outcome() {
    let store = MemoryInvoiceStore::new();
    let customers = common::customers();
    let fields = common::fields(&common::customer_id(0), "9.99", Some("pending"));

    let mut previous = FormState::with_message(MISSING_FIELDS_MESSAGE);
    previous.push_field_error(InvoiceField::Amount, "Please enter an amount greater than $0.");

    let result = create_invoice(&store, &customers, &previous, &fields, common::today()).await;

    assert!(matches!(result, CreateInvoiceResult::Created { .. }));
}

#[tokio::test]
async fn test_created_invoices_list_newest_first() {
    let store = MemoryInvoiceStore::new();
    let customers = common::customers();

    for (index, amount) in ["1.00", "2.00", "3.00"].iter().enumerate() {
        let fields = common::fields(&common::customer_id(index), amount, Some("pending"));
        let result = create_invoice(&store, &customers, &common::fresh_state(), &fields, common::today()).await;
        assert!(matches!(result, CreateInvoiceResult::Created { .. }));
    }

    let responses = server::invoice::to_responses(store.list().await.unwrap(), &customers);
    let names: Vec<&str> = responses.iter().map(|r| r.customer_name.as_str()).collect();
    assert_eq!(names, ["Hector Simpson", "Lee Robinson", "Delba de Oliveira"]);
}

#[tokio::test]
async fn test_result_wire_format() {
    let customers = common::customers();
    let fields = common::fields(&common::customer_id(2), "12.00", Some("pending"));
    let result = create_invoice(&FailingStore, &customers, &common::fresh_state(), &fields, common::today()).await;

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["state"]["message"], DATABASE_ERROR_MESSAGE);
}
