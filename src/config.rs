use std::env;

use crate::error::{ConfigError, PmsError};
use crate::store::PropertyStore;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Start from the sample property instead of an empty one.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl Config {
    /// Reads `PMS_HOST`, `PMS_PORT` and `PMS_SEED` from the process
    /// environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("PMS_HOST") {
            if host.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: "PMS_HOST",
                    value: host,
                });
            }
            config.host = host;
        }

        if let Some(port) = lookup("PMS_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PMS_PORT",
                value: port.clone(),
            })?;
        }

        if let Some(seed) = lookup("PMS_SEED") {
            config.seed = match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "PMS_SEED",
                        value: seed,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn initial_store(&self) -> Result<PropertyStore, PmsError> {
        if self.seed {
            PropertyStore::seeded()
        } else {
            Ok(PropertyStore::default())
        }
    }
}
