use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use shared_types::{AppError, CreateInvoiceResult, FormState, InvoiceFormFields, InvoiceResponse};

/// Boxed future returned by an [`InvoiceAction`].
pub type ActionFuture = Pin<Box<dyn Future<Output = FormState>>>;

/// The submission handler behind the invoice create form.
///
/// Receives the form state the user submitted from and the raw field values,
/// and resolves to the state the form renders next. The form never looks
/// inside; the page injects the server-backed handler and tests inject stubs.
#[derive(Clone)]
pub struct InvoiceAction {
    handler: Rc<dyn Fn(FormState, InvoiceFormFields) -> ActionFuture>,
}

impl InvoiceAction {
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(FormState, InvoiceFormFields) -> Fut + 'static,
        Fut: Future<Output = FormState> + 'static,
    {
        Self {
            handler: Rc::new(move |previous, fields| Box::pin(handler(previous, fields))),
        }
    }

    /// Invoke the handler once.
    pub async fn run(&self, previous: FormState, fields: InvoiceFormFields) -> FormState {
        (self.handler)(previous, fields).await
    }
}

impl PartialEq for InvoiceAction {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.handler), Rc::as_ptr(&other.handler))
    }
}

impl fmt::Debug for InvoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvoiceAction").finish_non_exhaustive()
    }
}

/// Turn the create server function's result into the next form state.
///
/// A created invoice resets the form and is returned so the caller can
/// navigate away. Transport and server faults become a summary message.
pub fn resolve_outcome<E: fmt::Display>(
    result: Result<CreateInvoiceResult, E>,
) -> (FormState, Option<InvoiceResponse>) {
    match result {
        Ok(CreateInvoiceResult::Created { invoice }) => (FormState::default(), Some(invoice)),
        Ok(CreateInvoiceResult::Rejected { state }) => (state, None),
        Err(e) => {
            let err = AppError::from_server_error_or_internal(&e.to_string());
            (FormState::from(err), None)
        }
    }
}
