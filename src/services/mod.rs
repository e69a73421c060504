// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic outside the activity store.

pub mod uploads;

pub use uploads::{StoredUpload, UploadError, UploadService};
