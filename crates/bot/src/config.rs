// Copyright 2025 Bench Bot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bot configuration.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional `benchbot.toml`, then `BENCHBOT_*` environment variables. An env
//! file is loaded with `dotenvy` first so its variables take part in the
//! environment layer.
//!
//! # Example
//!
//! ```no_run
//! use benchbot::config::BotConfig;
//!
//! let config = BotConfig::load()?;
//! println!("listening for {}", config.trigger);
//! # Ok::<(), benchbot::BotError>(())
//! ```

use crate::error::{BotError, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "BENCHBOT";

/// Variable naming an env file to load instead of `.env`.
pub const ENV_FILE_VAR: &str = "BENCHBOT_ENV_FILE";

/// Token variable read by earlier versions of the bot.
pub const LEGACY_TOKEN_VAR: &str = "DISCORD_RUST_TOKEN";

/// Base name of the optional settings file (`benchbot.toml`).
pub const CONFIG_FILE: &str = "benchbot";

/// Default command that starts a benchmark.
pub const DEFAULT_TRIGGER: &str = "?benchmark";

/// Default message sent before the benchmark runs.
pub const DEFAULT_ACKNOWLEDGEMENT: &str = "Exécution du benchmark...";

#[derive(Debug, Deserialize)]
struct RawConfig {
    token: Option<String>,
    trigger: String,
    acknowledgement: String,
    log_level: String,
    log_json: bool,
}

/// Runtime configuration, loaded once at startup and passed to the client.
#[derive(Clone)]
pub struct BotConfig {
    token: String,
    /// Command text that starts a benchmark.
    pub trigger: String,
    /// Message sent before the benchmark runs.
    pub acknowledgement: String,
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Emit logs as JSON lines.
    pub log_json: bool,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("trigger", &self.trigger)
            .field("acknowledgement", &self.acknowledgement)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl BotConfig {
    /// Load the env file, then build settings from file and environment.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(ENV_FILE_VAR).map(PathBuf::from);
        if let Some(path) = load_env_file(explicit)? {
            debug!(path = %path.display(), "loaded env file");
        }

        let settings = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Self::from_settings(settings, std::env::var(LEGACY_TOKEN_VAR).ok())
    }

    /// Settings builder pre-populated with defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("trigger", DEFAULT_TRIGGER)?
            .set_default("acknowledgement", DEFAULT_ACKNOWLEDGEMENT)?
            .set_default("log_level", "info")?
            .set_default("log_json", false)?)
    }

    /// Build from already-layered settings.
    ///
    /// `legacy_token` is used only when the settings carry no token.
    pub fn from_settings(settings: Config, legacy_token: Option<String>) -> Result<Self> {
        let raw: RawConfig = settings.try_deserialize()?;

        let token = raw
            .token
            .or(legacy_token)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(BotError::MissingToken)?;

        Ok(Self {
            token,
            trigger: raw.trigger.trim().to_string(),
            acknowledgement: raw.acknowledgement,
            log_level: raw.log_level,
            log_json: raw.log_json,
        })
    }

    /// The bot token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Load variables from an env file into the process environment.
///
/// An explicit path must exist. Without one, `.env` is looked up from the
/// working directory upwards and silently skipped when absent. Variables
/// already set in the environment are not overridden.
pub fn load_env_file(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            dotenvy::from_path(&path).map_err(|source| BotError::EnvFile {
                path: path.clone(),
                source,
            })?;
            Ok(Some(path))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(source) => Err(BotError::EnvFile {
                path: PathBuf::from(".env"),
                source,
            }),
        },
    }
}
