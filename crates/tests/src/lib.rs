#[cfg(test)]
mod common;

#[cfg(test)]
mod invoice_create_tests;

#[cfg(test)]
mod invoice_validation_tests;

#[cfg(test)]
mod invoice_store_tests;

#[cfg(test)]
mod config_tests;
