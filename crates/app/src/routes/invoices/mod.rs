pub mod action;
pub mod create;
pub mod create_form;
pub mod list;

pub use action::InvoiceAction;
pub use create::InvoiceCreate;
pub use create_form::InvoiceCreateForm;
pub use list::InvoiceList;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdClock};
use dioxus_free_icons::Icon;
use shared_types::InvoiceStatus;
use shared_ui::components::BadgeVariant;

fn status_badge(status: InvoiceStatus) -> BadgeVariant {
    match status {
        InvoiceStatus::Pending => BadgeVariant::Neutral,
        InvoiceStatus::Paid => BadgeVariant::Success,
    }
}

fn status_icon(status: InvoiceStatus) -> Element {
    match status {
        InvoiceStatus::Pending => rsx! {
            Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
        },
        InvoiceStatus::Paid => rsx! {
            Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
        },
    }
}
