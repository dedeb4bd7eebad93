use serde::{Deserialize, Serialize};

use crate::CustomerField;

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults so a missing or partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub customers: Vec<CustomerField>,
}
