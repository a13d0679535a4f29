//! HTTP client configuration.

use std::fmt;
use std::time::Duration;

use helpbot_config::HelpbotConfig;

/// Connection settings for `HttpSupportClient`.
#[derive(Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub admin_key: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("base_url", &self.base_url)
            .field("admin_key", &self.admin_key.as_ref().map(|_| "[REDACTED]"))
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_key: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }

    /// Build from the loaded application config.
    pub fn from_config(config: &HelpbotConfig) -> Self {
        Self::new(config.api.base_url.trim())
            .with_admin_key(config.admin.api_key.clone())
            .with_connect_timeout(Duration::from_secs(config.api.connect_timeout_secs.into()))
            .with_request_timeout(Duration::from_secs(config.api.request_timeout_secs.into()))
    }

    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        self.admin_key = Some(key.into());
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
