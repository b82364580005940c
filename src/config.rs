//! @ai:module:intent Configuration structs and credentials for the listing sync
//! @ai:module:layer infrastructure
//! @ai:module:public_api SyncConfig, ApiConfig, RunConfig, Credentials
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_VAR: &str = "ETSY_API_KEY";
pub const SHOP_ID_VAR: &str = "ETSY_SHOP_ID";
pub const ACCESS_TOKEN_VAR: &str = "ETSY_ACCESS_TOKEN";

/// @ai:intent Main configuration for the sync tool
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// @ai:intent Remote API settings for the Etsy gateway
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// @ai:intent Settings for a single sync pass
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            delay_ms: default_delay_ms(),
            dry_run: false,
        }
    }
}

fn default_base_url() -> String {
    "https://openapi.etsy.com/v3/application".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_input() -> PathBuf {
    PathBuf::from("products.csv")
}

fn default_delay_ms() -> u64 {
    500
}

impl ApiConfig {
    /// @ai:intent Request timeout applied to every gateway call
    /// @ai:effects pure
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl RunConfig {
    /// @ai:intent Pause inserted after each row
    /// @ai:effects pure
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl SyncConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Reject settings the gateway cannot work with
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".to_string()));
        }

        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be greater than zero".to_string()));
        }

        Ok(())
    }
}

/// @ai:intent Fixed credential set read once at startup
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub shop_id: String,
    pub access_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("shop_id", &self.shop_id)
            .field("access_token", &"***")
            .finish()
    }
}

impl Credentials {
    /// @ai:intent Read credentials from the process environment
    /// @ai:pre ETSY_API_KEY, ETSY_SHOP_ID, ETSY_ACCESS_TOKEN are set and non-empty
    /// @ai:effects env
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// @ai:intent Build credentials from an arbitrary variable lookup
    /// @ai:post Err lists every missing or empty variable
    /// @ai:effects pure
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut fetch = |name: &'static str| {
            let value = lookup(name).filter(|v| !v.is_empty());

            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let api_key = fetch(API_KEY_VAR);
        let shop_id = fetch(SHOP_ID_VAR);
        let access_token = fetch(ACCESS_TOKEN_VAR);

        if !missing.is_empty() {
            return Err(Error::MissingCredentials(missing));
        }

        Ok(Self {
            api_key,
            shop_id,
            access_token,
        })
    }
}
