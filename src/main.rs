// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SmartTracker API Server
//!
//! Keeps activities recorded by the mobile app in memory and stores their
//! photos on local disk.

use smart_tracker::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting SmartTracker API");

    let state = Arc::new(AppState::new(config.clone()));

    // Uploads are served straight from disk, so the directory must exist first
    state.uploads.ensure_dir().await?;
    tracing::info!(path = %state.uploads.dir().display(), "Upload directory ready");

    let app = smart_tracker::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        address = %addr,
        public_url = %config.public_base_url,
        "Server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), tracing_subscriber::filter::ParseError> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("smart_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
