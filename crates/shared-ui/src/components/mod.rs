// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod field_errors;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod label;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use field_errors::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
