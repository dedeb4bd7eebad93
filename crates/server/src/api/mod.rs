mod customer;
pub use customer::*;

mod invoice;
pub use invoice::*;
