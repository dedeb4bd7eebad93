use server::repo::{invoice_store, InvoiceStore, MemoryInvoiceStore};
use shared_types::{Invoice, InvoiceStatus};
use uuid::Uuid;

use crate::common;

fn invoice(customer_index: usize, cents: i64) -> Invoice {
    Invoice {
        id: Uuid::new_v4(),
        customer_id: common::customer_id(customer_index),
        amount_in_cents: cents,
        status: InvoiceStatus::Pending,
        date: common::today(),
    }
}

#[tokio::test]
async fn test_concurrent_inserts_are_all_kept() {
    let store = std::sync::Arc::new(MemoryInvoiceStore::new());
    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.insert(invoice(i % 3, 100 + i as i64)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(store.list().await.unwrap().len(), 16);
}

#[test]
fn test_shared_store_is_a_singleton() {
    assert!(std::ptr::eq(invoice_store(), invoice_store()));
}
