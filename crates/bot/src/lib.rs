// Copyright 2025 Bench Bot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Discord bot that answers `?benchmark` with a CPU benchmark report.
//!
//! # Modules
//!
//! - [`config`] - Layered settings and token loading
//! - [`command`] - Trigger matching
//! - [`handler`] - Gateway event handler and reply flow
//! - [`telemetry`] - Log subscriber setup
//! - [`error`] - The crate error type

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod handler;
pub mod telemetry;

pub use crate::config::BotConfig;
pub use error::{BotError, Result};
pub use handler::Handler;

use serenity::prelude::{Client, GatewayIntents};
use std::sync::Arc;
use tracing::info;

/// Gateway intents the bot needs to read commands in guilds and DMs.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Connect to the gateway and serve events until the client stops.
pub async fn run(config: BotConfig) -> Result<()> {
    let config = Arc::new(config);

    let mut client = Client::builder(config.token(), intents())
        .event_handler(Handler::new(Arc::clone(&config)))
        .await
        .map_err(BotError::Client)?;

    info!(trigger = %config.trigger, "starting Discord client");
    client.start().await.map_err(BotError::Client)
}
