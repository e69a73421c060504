// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer (in-memory).

pub mod memory;
pub mod query;

pub use memory::ActivityStore;
