// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! SmartTracker: backend for a mobile activity tracker.
//!
//! This crate provides a small REST API that keeps activities in memory and
//! stores photo uploads on local disk.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::ActivityStore;
use services::UploadService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ActivityStore,
    pub uploads: UploadService,
}

impl AppState {
    /// Build state for `config` with an empty store.
    pub fn new(config: Config) -> Self {
        let uploads = UploadService::new(
            config.upload_dir.clone(),
            config.public_base_url.clone(),
        );
        Self {
            config,
            store: ActivityStore::new(),
            uploads,
        }
    }
}
