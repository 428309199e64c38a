// Copyright 2025 Bench Bot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error type for the bot shell.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running the bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// Configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An explicitly requested env file could not be loaded
    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        /// Path that was requested
        path: PathBuf,
        /// Underlying loader error
        #[source]
        source: dotenvy::Error,
    },

    /// No bot token was configured
    #[error("Bot token not set (BENCHBOT_TOKEN or DISCORD_RUST_TOKEN)")]
    MissingToken,

    /// Sending a message to a channel failed
    #[error("Message delivery failed: {0}")]
    Delivery(#[source] serenity::Error),

    /// Client construction or gateway failure
    #[error("Discord client error: {0}")]
    Client(#[source] serenity::Error),

    /// The benchmark worker task did not complete
    #[error("Benchmark worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;
