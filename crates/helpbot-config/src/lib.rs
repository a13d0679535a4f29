//! HelpBot configuration system.
//!
//! TOML-based configuration with environment overrides and validation.
//! Every section uses serde defaults so a partial file, or no file at all,
//! yields a working client pointed at a local backend.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use helpbot_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, apply_overrides, ENV_ADMIN_KEY, ENV_API_BASE};
pub use schema::{HelpbotConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use helpbot_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created with commented defaults if it does not
/// exist. Environment overrides are applied after the file is read, then
/// the result is validated.
pub fn load_config(path: Option<&Path>) -> Result<HelpbotConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string. The admin key is
/// masked.
pub fn config_to_json(config: &HelpbotConfig) -> String {
    let mut redacted = config.clone();
    if !redacted.admin.api_key.is_empty() {
        redacted.admin.api_key = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
