//! Validation for the `[api]` and `[admin]` sections.

use crate::schema::HelpbotConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &HelpbotConfig) {
    let base = config.api.base_url.trim();
    if base.is_empty() {
        errors.push("api.base_url must not be empty".into());
    } else if !(base.starts_with("http://") || base.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {base:?} must start with http:// or https://"
        ));
    }

    validate_range(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        config.api.request_timeout_secs,
        1,
        600,
    );

    validate_not_blank(errors, "admin.api_key", &config.admin.api_key);
}
