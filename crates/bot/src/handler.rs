// Copyright 2025 Bench Bot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Gateway event handling.
//!
//! The handler reacts to a single command. Replies go through [`ReplySink`]
//! so the command flow can run without a live gateway.

use crate::command::is_trigger;
use crate::config::BotConfig;
use crate::error::{BotError, Result};
use async_trait::async_trait;
use benchbot_benchmarks::run_benchmark;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::prelude::{Context, EventHandler};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Destination for the bot's replies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Send one message.
    async fn send(&self, text: String) -> Result<()>;
}

/// Replies into a Discord channel over HTTP.
pub struct ChannelSink<'a> {
    http: &'a Http,
    channel_id: ChannelId,
}

impl<'a> ChannelSink<'a> {
    /// Sink for `channel_id`.
    pub fn new(http: &'a Http, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ReplySink for ChannelSink<'_> {
    async fn send(&self, text: String) -> Result<()> {
        self.channel_id
            .say(self.http, text)
            .await
            .map(|_| ())
            .map_err(BotError::Delivery)
    }
}

/// Acknowledge, run the benchmark off the async workers, post the report.
///
/// Stops at the first delivery failure: if the acknowledgement cannot be
/// sent the benchmark is not run.
pub async fn run_command(sink: &dyn ReplySink, acknowledgement: &str) -> Result<()> {
    sink.send(acknowledgement.to_string()).await?;

    let report = tokio::task::spawn_blocking(run_benchmark).await?;
    debug!(bytes = report.len(), "benchmark report ready");

    sink.send(report).await
}

/// Event handler registered with the Discord client.
pub struct Handler {
    config: Arc<BotConfig>,
}

impl Handler {
    /// Create a handler using `config` for the trigger and replies.
    pub fn new(config: Arc<BotConfig>) -> Self {
        Self { config }
    }

    /// Whether a message should start a benchmark.
    ///
    /// Messages from bots, including this one, are never answered.
    pub fn should_respond(&self, author_is_bot: bool, content: &str) -> bool {
        !author_is_bot && is_trigger(content, &self.config.trigger)
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if !self.should_respond(msg.author.bot, &msg.content) {
            return;
        }

        info!(
            channel = %msg.channel_id,
            author = %msg.author.name,
            "benchmark requested"
        );

        let sink = ChannelSink::new(&ctx.http, msg.channel_id);
        if let Err(e) = run_command(&sink, &self.config.acknowledgement).await {
            warn!(channel = %msg.channel_id, error = %e, "benchmark command failed");
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            trigger = %self.config.trigger,
            "bot connected"
        );
    }
}
