pub mod config;
pub mod customer;
pub mod error;
pub mod invoice;

pub use config::*;
pub use customer::*;
pub use error::*;
pub use invoice::*;
