//! Environment variable overrides applied on top of the config file.

use tracing::debug;

use crate::schema::HelpbotConfig;

/// Overrides `api.base_url`.
pub const ENV_API_BASE: &str = "HELPBOT_API_BASE";
/// Overrides `admin.api_key`.
pub const ENV_ADMIN_KEY: &str = "HELPBOT_ADMIN_KEY";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut HelpbotConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` to resolve variable names. Empty values
/// are ignored.
pub fn apply_overrides<F>(config: &mut HelpbotConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
        debug!("api.base_url overridden by {ENV_API_BASE}");
        config.api.base_url = base.trim().to_string();
    }

    if let Some(key) = lookup(ENV_ADMIN_KEY).filter(|v| !v.is_empty()) {
        debug!("admin.api_key overridden by {ENV_ADMIN_KEY}");
        config.admin.api_key = key;
    }
}
