//! Configuration schema types for HelpBot.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod chat;
mod system;

pub use api::*;
pub use chat::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for HelpBot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HelpbotConfig {
    pub api: ApiConfig,
    pub admin: AdminConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
