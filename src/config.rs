//! Configuration for the Kinetic SDK
//!
//! Loaded from a TOML file with optional environment variable overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::models::Commitment;

/// Top-level SDK configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KineticConfig {
    /// Base URL of the Kinetic service, e.g. `https://sandbox.kinetic.host`
    pub endpoint: String,

    /// Cluster name the app is registered against (`devnet`, `mainnet`, ...)
    pub environment: String,

    /// App index assigned at registration; embedded in transaction memos
    pub index: u16,

    /// Commitment level sent with API requests
    #[serde(default)]
    pub commitment: Commitment,

    /// HTTP configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Optional program id overrides for non-mainnet deployments
    #[serde(default)]
    pub programs: ProgramIdOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_http_timeout(),
        }
    }
}

/// Program ids as base58 strings; unset fields fall back to mainnet ids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramIdOverrides {
    pub token_program: Option<String>,
    pub associated_token_program: Option<String>,
    pub system_program: Option<String>,
    pub rent_sysvar: Option<String>,
    pub memo_program: Option<String>,
}

// Default value functions
fn default_http_timeout() -> u64 {
    30
}

impl KineticConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: KineticConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    ///
    /// `KINETIC_ENDPOINT`, `KINETIC_ENVIRONMENT` and `KINETIC_INDEX` take
    /// precedence over the file contents.
    pub fn from_file_with_env(path: &str) -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::from_file(path)?;
        if let Ok(endpoint) = std::env::var("KINETIC_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(environment) = std::env::var("KINETIC_ENVIRONMENT") {
            config.environment = environment;
        }
        if let Ok(index) = std::env::var("KINETIC_INDEX") {
            config.index = index
                .parse()
                .context("KINETIC_INDEX must be an integer in 0..=65535")?;
        }
        Ok(config)
    }

    /// Validate config values before constructing a client
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must be an http(s) URL, got '{}'", self.endpoint);
        }
        if self.environment.is_empty() {
            anyhow::bail!("environment must not be empty");
        }
        if self.http.timeout_secs == 0 {
            anyhow::bail!("http.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
