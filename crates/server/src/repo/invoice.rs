use shared_types::{AppError, Invoice};
use std::future::Future;
use std::sync::OnceLock;
use tokio::sync::RwLock;

/// Storage for created invoices.
pub trait InvoiceStore: Send + Sync {
    /// Insert a new invoice and return it as stored.
    fn insert(&self, invoice: Invoice) -> impl Future<Output = Result<Invoice, AppError>> + Send;

    /// List invoices, newest first.
    fn list(&self) -> impl Future<Output = Result<Vec<Invoice>, AppError>> + Send;
}

/// Process-local invoice store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryInvoiceStore {
    invoices: RwLock<Vec<Invoice>>,
}

impl MemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvoiceStore for MemoryInvoiceStore {
    async fn insert(&self, invoice: Invoice) -> Result<Invoice, AppError> {
        let mut invoices = self.invoices.write().await;
        if invoices.iter().any(|existing| existing.id == invoice.id) {
            return Err(AppError::database(format!(
                "Invoice {} already exists",
                invoice.id
            )));
        }
        invoices.push(invoice.clone());
        Ok(invoice)
    }

    async fn list(&self) -> Result<Vec<Invoice>, AppError> {
        let invoices = self.invoices.read().await;
        Ok(invoices.iter().rev().cloned().collect())
    }
}

static STORE: OnceLock<MemoryInvoiceStore> = OnceLock::new();

/// The store shared by the invoice server functions.
pub fn invoice_store() -> &'static MemoryInvoiceStore {
    STORE.get_or_init(MemoryInvoiceStore::new)
}
