use serde::{Deserialize, Serialize};

use super::MAX_REQUEST_LEN;
use crate::{Error, Result};

/// Secure random generator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Largest request, in bytes, the generator accepts.
    pub max_request_len: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            max_request_len: MAX_REQUEST_LEN,
        }
    }
}

impl RandomConfig {
    /// Loads configuration from `.env` file, TOML file, and environment variables.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables with `RANDOM_` prefix (e.g., `RANDOM_MAX_REQUEST_LEN=4096`)
    /// 2. TOML configuration file (if exists)
    /// 3. `.env` file (if exists)
    /// 4. Built-in defaults
    ///
    /// The TOML file path can be set via `RANDOM_CONFIG_PATH` environment variable.
    /// If not set, defaults to `./config/random.toml`. A missing file is skipped.
    ///
    /// # Errors
    /// Returns an error if the configuration is malformed or contains invalid values.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        use figment::Figment;
        use figment::providers::{Env, Format, Serialized, Toml};

        let _ = dotenvy::dotenv();

        let config_path = std::env::var("RANDOM_CONFIG_PATH")
            .unwrap_or_else(|_| "config/random.toml".to_string());

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("RANDOM_").ignore(&["config_path"]))
            .extract()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `max_request_len` exceeds the
    /// platform limit.
    pub fn validate(&self) -> Result<()> {
        if self.max_request_len > MAX_REQUEST_LEN {
            return Err(Error::InvalidConfig(format!(
                "max_request_len {} exceeds platform limit {}",
                self.max_request_len, MAX_REQUEST_LEN
            )));
        }

        Ok(())
    }
}
