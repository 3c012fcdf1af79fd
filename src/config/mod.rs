//! Configuration management.
//!
//! With no configuration at all the probe runs the built-in DOAJ candidates
//! for "ancient rome". A TOML file can override any of that:
//!
//! ```toml
//! query = "ancient rome"
//! page_size = 5
//! timeout_secs = 10
//! user_agent = "Mozilla/5.0 (compatible; Academic Research Bot/1.0)"
//!
//! [[endpoints]]
//! url = "https://doaj.org/api/search/articles"
//! description = "DOAJ Base API - /api/search/articles"
//!
//! [[endpoints]]
//! url = "https://doaj.org/api/v2/search/articles"
//! description = "DOAJ v2 API - /api/v2/search/articles"
//! param_key = "query"
//! ```
//!
//! Settings are only read from a file named explicitly (`--config`); a run
//! without one always uses the built-in defaults. Scalar keys of a loaded
//! file can be overridden through `DOAJ_PROBE_*` environment variables
//! (e.g. `DOAJ_PROBE_TIMEOUT_SECS=30`).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::models::EndpointConfig;
use crate::sources::doaj::{CANDIDATES, DEFAULT_PAGE_SIZE, DEFAULT_QUERY};
use crate::utils::DEFAULT_USER_AGENT;

/// Runtime settings for a probe run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Query text sent to every endpoint
    #[serde(default = "default_query")]
    pub query: String,

    /// Page size sent to every endpoint
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Endpoints to probe, in order
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<EndpointEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            query: default_query(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            endpoints: default_endpoints(),
        }
    }
}

/// One endpoint as written in a settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointEntry {
    pub url: String,

    pub description: String,

    /// Parameter name the endpoint expects the query under
    #[serde(default = "default_param_key")]
    pub param_key: String,
}

fn default_query() -> String {
    DEFAULT_QUERY.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_param_key() -> String {
    "q".to_string()
}

fn default_endpoints() -> Vec<EndpointEntry> {
    CANDIDATES
        .iter()
        .map(|c| EndpointEntry {
            url: c.url(),
            description: c.description.to_string(),
            param_key: c.param_key.to_string(),
        })
        .collect()
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint configurations with the query and page size filled in.
    pub fn endpoint_configs(&self) -> Vec<EndpointConfig> {
        self.endpoints
            .iter()
            .map(|e| {
                EndpointConfig::search(
                    e.url.clone(),
                    &e.param_key,
                    &self.query,
                    self.page_size,
                    e.description.clone(),
                )
            })
            .collect()
    }

    /// Reject settings that could never produce a meaningful probe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be at least 1".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent must not be empty".into()));
        }
        if self.endpoints.is_empty() {
            return Err(ConfigError::Invalid("no endpoints configured".into()));
        }

        for endpoint in &self.endpoints {
            let parsed = url::Url::parse(&endpoint.url).map_err(|e| ConfigError::InvalidUrl {
                url: endpoint.url.clone(),
                reason: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl {
                    url: endpoint.url.clone(),
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
            if endpoint.param_key.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "empty param_key for {}",
                    endpoint.url
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load settings from a TOML file, with `DOAJ_PROBE_*` environment overrides
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .add_source(config::Environment::with_prefix("DOAJ_PROBE"))
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    Ok(settings)
}

/// Settings for a run: the named file when given, the defaults otherwise
pub fn resolve_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(get_config()),
    }
}

/// Get the default settings
pub fn get_config() -> Settings {
    Settings::default()
}
