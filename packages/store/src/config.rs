//! # Client configuration (`draftly.toml`)
//!
//! Settings the web client needs at start-up: where the backend lives and how
//! outlines are generated. The file is embedded into the binary at build time
//! (there is no filesystem in the browser).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8081"
//! request_timeout_secs = 30
//!
//! [generation]
//! mode = "placeholder"   # or "http"
//! delay_ms = 2000        # placeholder only
//! timeout_secs = 60      # 0 disables the timeout
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DraftlyConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`ApiConfig`] | Backend base URL and per-request timeout. |
//! | [`GenerationConfig`] | Which [`GenerationMode`] to use, the placeholder delay, and the overall timeout. |
//!
//! Every field has a default, so a missing or empty file is the default
//! configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftlyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Source of generated outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Fabricate cards locally after a delay.
    #[default]
    Placeholder,
    /// Ask the backend outline endpoint.
    Http,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub mode: GenerationMode,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_generation_timeout() -> u64 {
    60
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            delay_ms: default_delay_ms(),
            timeout_secs: default_generation_timeout(),
        }
    }
}

impl GenerationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// `None` when the timeout is disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl DraftlyConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "draftly.toml"
    }

    /// Builder method to point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to select the generation mode.
    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.generation.mode = mode;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
