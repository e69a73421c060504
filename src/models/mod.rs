// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod lenient;
pub mod timestamp;

pub use activity::{Activity, ActivityPatch, Location};
pub use lenient::Lenient;
pub use timestamp::ActivityTime;
