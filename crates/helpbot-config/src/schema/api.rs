//! Backend connection settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base URL of a locally running support backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Support API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every endpoint path, without a trailing slash.
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
        }
    }
}

/// Admin endpoint credentials (metrics, FAQs, reindex).
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Sent verbatim as the `x-api-key` header.
    pub api_key: String,
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_key: "admin-secret-key".into(),
        }
    }
}
