// Copyright 2025 Bench Bot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bench Bot entry point.

use benchbot::{telemetry, BotConfig};
use tracing::error;

#[tokio::main]
async fn main() {
    let config = match BotConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    telemetry::init(&config.log_level, config.log_json);

    if let Err(e) = benchbot::run(config).await {
        error!(error = %e, "bot stopped");
        std::process::exit(1);
    }
}
