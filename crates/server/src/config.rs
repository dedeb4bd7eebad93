use shared_types::{AppConfig, AppError, CustomerField};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "INVOICE_CONFIG";

/// Resolve the config file path, honouring `.env` and `INVOICE_CONFIG`.
pub fn config_path() -> String {
    let _ = dotenvy::dotenv();
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Parse the contents of a config file.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::bad_request(format!("Invalid config: {e}")))
}

/// Read a config file. A missing or unparseable file yields the default
/// (empty) config and a warning.
pub fn read_config(path: &str) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                tracing::info!(path, customers = config.customers.len(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "failed to parse config, using defaults");
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path, error = %e, "config not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Load the config into the global `OnceLock`. Safe to call multiple times,
/// only the first call reads the file.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| read_config(&config_path()))
}

/// Customers offered by the invoice form, in file order.
pub fn customers() -> &'static [CustomerField] {
    &load_config().customers
}
