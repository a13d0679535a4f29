//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# HelpBot Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# HELPBOT_API_BASE and HELPBOT_ADMIN_KEY override the values below.

[api]
# base_url = "http://localhost:8000/api/v1"
# connect_timeout_secs = 10   # 1-60
# request_timeout_secs = 60   # 1-600

[admin]
# api_key = "admin-secret-key"

[chat]
# auto_start = false
# backend_unreachable_text = "⚠️ Could not reach backend."
# escalation_sent_text = "🔔 Escalation sent to human support."
# timestamp_format = "%H:%M:%S"
# queue_capacity = 32         # 1-1024
# history_limit = 50          # 1-500

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
}
