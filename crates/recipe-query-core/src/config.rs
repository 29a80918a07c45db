//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars,
//! read from `$APP_CONFIG_DIR` when set. Provides a helper to expand `~` and
//! `${VAR}` in user-provided paths.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        let base = env::var("APP_CONFIG_DIR").map(expand_path).unwrap_or_else(|_| PathBuf::from("."));

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    /// Build a config from an inline TOML document, without files or env.
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        let config = Self { figment: Figment::new().merge(Toml::string(toml)) };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    fn validate(&self) -> anyhow::Result<()> {
        SessionSettings::from_config(self)?;
        Ok(())
    }
}

/// Tunables for a search session, read from the `[session]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSettings {
    pub history_capacity: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { history_capacity: DEFAULT_HISTORY_CAPACITY }
    }
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        let history_capacity = if config.figment.contains("session.history_capacity") {
            config
                .get::<usize>("session.history_capacity")
                .map_err(|e| Error::InvalidConfig(e.to_string()))?
        } else {
            DEFAULT_HISTORY_CAPACITY
        };
        if history_capacity == 0 {
            return Err(Error::InvalidConfig("session.history_capacity must be at least 1".to_string()));
        }
        Ok(Self { history_capacity })
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
