use shared_types::{AppConfig, AppError};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read and parse a config file.
///
/// I/O failures are `InternalError`, malformed TOML is `BadRequest`.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, AppError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::internal(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| AppError::bad_request(format!("failed to parse {}: {e}", path.display())))
}

/// The process-wide config, loaded from `config.toml` on first use.
///
/// A missing or unparseable file falls back to `AppConfig::default()`.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match load_config(CONFIG_PATH) {
        Ok(config) => {
            info!(
                items = ?config.selector.items,
                fallback_role = %config.session.role,
                "loaded {CONFIG_PATH}"
            );
            config
        }
        Err(e) => {
            warn!(error = %e, "using default config");
            AppConfig::default()
        }
    })
}
