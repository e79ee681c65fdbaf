//! Configuration management for the investment tracker.
//!
//! Loaded with figment from serialized defaults, an optional TOML file and
//! `INVEST_` environment variables.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use investment_tracker_core::InvestmentTracker;

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the platform config dir.
const CONFIG_DIR_NAME: &str = "investment-tracker";

/// Environment variable prefix. Nested keys are split on `__`,
/// e.g. `INVEST_SHELL__PROMPT`.
const ENV_PREFIX: &str = "INVEST_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `INVEST_`)
/// 2. TOML config file at `<config_dir>/investment-tracker/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Investment book configuration.
    pub store: StoreConfig,
    /// Interactive shell configuration.
    pub shell: ShellConfig,
}

/// Investment book configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with the three sample investments.
    pub seed_demo_data: bool,
}

/// Interactive shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Text shown before each command.
    pub prompt: String,
    /// Ask for confirmation before deleting.
    pub confirm_deletes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "invest> ".to_string(),
            confirm_deletes: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell prompt is empty.
    pub fn validate(&self) -> Result<()> {
        if self.shell.prompt.trim().is_empty() {
            return Err(Error::config_validation("shell.prompt must not be empty"));
        }
        Ok(())
    }

    /// Build the in-memory tracker this configuration describes.
    #[must_use]
    pub fn build_tracker(&self) -> InvestmentTracker {
        if self.store.seed_demo_data {
            InvestmentTracker::with_demo_data()
        } else {
            InvestmentTracker::create_new()
        }
    }
}
