//! Layered CLI settings
//!
//! Precedence, lowest first: built-in defaults, `ltikit.toml` (or the file
//! given with `--config`), `LTIKIT_*` environment variables, command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use ltikit_core::logging_facility::Profile;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "ltikit.toml";
pub const DEFAULT_HOST: &str = "http://localhost";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_PROFILE: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub host: String,
    pub fetch_timeout_secs: u64,
    pub log_profile: String,
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
    pub log_profile: Option<String>,
}

impl Settings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// # Errors
    ///
    /// Fails when the configured profile name is not recognised.
    pub fn profile(&self) -> Result<Profile> {
        self.log_profile
            .parse::<Profile>()
            .map_err(anyhow::Error::msg)
    }
}

/// Load settings.
///
/// An explicit `config_path` must exist; the default `ltikit.toml` in the
/// working directory is optional.
///
/// # Errors
///
/// Fails on an unreadable or malformed config file, or values of the wrong type.
pub fn load(config_path: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let (path, required) = match config_path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    let settings = Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("fetch_timeout_secs", DEFAULT_FETCH_TIMEOUT_SECS)?
        .set_default("log_profile", DEFAULT_LOG_PROFILE)?
        .add_source(File::from(path).required(required))
        .add_source(Environment::with_prefix("LTIKIT").try_parsing(true))
        .set_override_option("host", overrides.host.clone())?
        .set_override_option("fetch_timeout_secs", overrides.fetch_timeout_secs)?
        .set_override_option("log_profile", overrides.log_profile.clone())?
        .build()
        .with_context(|| format!("failed to load settings from {}", path.display()))?;

    settings
        .try_deserialize::<Settings>()
        .context("invalid settings")
}
