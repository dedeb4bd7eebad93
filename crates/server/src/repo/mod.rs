pub mod invoice;

pub use invoice::{invoice_store, InvoiceStore, MemoryInvoiceStore};
