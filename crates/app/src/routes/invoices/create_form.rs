use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDollarSign, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{
    CustomerField, FormState, InvoiceField, InvoiceFormFields, InvoiceStatus, INVOICE_STATUSES,
};
use shared_ui::components::{
    Badge, Button, ButtonVariant, Card, FieldErrors, Form, FormActions, FormGroup,
    FormMessage, FormSelect, Input, Label, LinkButton,
};

use super::action::InvoiceAction;
use super::{status_badge, status_icon};
use crate::routes::Route;

/// Id of the whole-form message region below the buttons.
pub const FORM_MESSAGE_ID: &str = "form-error";

/// Values the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceFormValues {
    pub customer_id: String,
    pub amount: String,
    pub status: Option<InvoiceStatus>,
}

impl InvoiceFormValues {
    /// The raw fields handed to the action, with their wire values.
    pub fn to_fields(&self) -> InvoiceFormFields {
        InvoiceFormFields {
            customer_id: self.customer_id.clone(),
            amount: self.amount.clone(),
            status: self.status.map(|s| s.as_str().to_string()),
        }
    }
}

/// Invoice create form.
///
/// Renders the customer, amount and status inputs and shows whatever
/// messages the last submission returned. All validation belongs to
/// `action`; the form only displays its result.
#[component]
pub fn InvoiceCreateForm(customers: Vec<CustomerField>, action: InvoiceAction) -> Element {
    let mut state = use_signal(FormState::default);
    let mut values = use_signal(InvoiceFormValues::default);
    let mut pending = use_signal(|| false);

    let handle_submit = move |_evt: FormEvent| {
        if pending() {
            return;
        }
        let action = action.clone();
        let previous = state();
        let fields = values().to_fields();
        pending.set(true);
        spawn(async move {
            let next = action.run(previous, fields).await;
            state.set(next);
            pending.set(false);
        });
    };

    let current = state();
    let InvoiceFormValues {
        customer_id: selected_customer,
        amount,
        status: selected_status,
    } = values();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./invoices.css") }

        Form { onsubmit: handle_submit,
            Card {
                FormGroup {
                    Label { html_for: "customer", "Choose customer" }
                    FormSelect {
                        id: "customer",
                        name: InvoiceField::CustomerId.name(),
                        value: selected_customer.clone(),
                        aria_describedby: InvoiceField::CustomerId.error_region_id(),
                        onchange: move |e: Event<FormData>| values.write().customer_id = e.value(),
                        leading_icon: rsx! {
                            Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                        },
                        option {
                            value: "",
                            disabled: true,
                            selected: selected_customer.is_empty(),
                            "Select a customer"
                        }
                        for customer in customers.iter() {
                            option {
                                key: "{customer.id}",
                                value: "{customer.id}",
                                selected: customer.id == selected_customer,
                                "{customer.name}"
                            }
                        }
                    }
                    FieldErrors {
                        id: InvoiceField::CustomerId.error_region_id(),
                        messages: current.field_errors(InvoiceField::CustomerId).to_vec(),
                    }
                }

                FormGroup {
                    Label { html_for: "amount", "Choose an amount" }
                    Input {
                        id: "amount",
                        name: InvoiceField::Amount.name(),
                        input_type: "number",
                        step: "0.01",
                        placeholder: "Enter USD amount",
                        value: amount,
                        aria_describedby: InvoiceField::Amount.error_region_id(),
                        on_input: move |e: FormEvent| values.write().amount = e.value(),
                        leading_icon: rsx! {
                            Icon::<LdDollarSign> { icon: LdDollarSign, width: 18, height: 18 }
                        },
                    }
                    FieldErrors {
                        id: InvoiceField::Amount.error_region_id(),
                        messages: current.field_errors(InvoiceField::Amount).to_vec(),
                    }
                }

                fieldset { class: "invoice-status",
                    legend { class: "label", "Set the invoice status" }
                    div { class: "invoice-status-options",
                        for status in INVOICE_STATUSES.iter().copied() {
                            label {
                                key: "{status}",
                                class: "invoice-status-option",
                                r#for: "{status}",
                                input {
                                    id: "{status}",
                                    name: InvoiceField::Status.name(),
                                    r#type: "radio",
                                    value: "{status}",
                                    checked: selected_status == Some(status),
                                    aria_describedby: InvoiceField::Status.error_region_id(),
                                    onchange: move |_| values.write().status = Some(status),
                                }
                                Badge { variant: status_badge(status), icon: status_icon(status),
                                    {status.label()}
                                }
                            }
                        }
                    }
                    FieldErrors {
                        id: InvoiceField::Status.error_region_id(),
                        messages: current.field_errors(InvoiceField::Status).to_vec(),
                    }
                }
            }

            FormActions {
                LinkButton {
                    href: Route::InvoiceList {}.to_string(),
                    variant: ButtonVariant::Secondary,
                    "Cancel"
                }
                Button {
                    button_type: "submit",
                    busy: pending(),
                    if pending() { "Creating..." } else { "Create Invoice" }
                }
            }

            FormMessage { id: FORM_MESSAGE_ID, message: current.message.clone() }
        }
    }
}
