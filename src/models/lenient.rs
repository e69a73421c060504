// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Known fields that tolerate any JSON type.
//!
//! Clients are not validated: a field the server reads, such as
//! `description`, may arrive as a number or an array. Such values are kept
//! as raw JSON and echoed back unchanged, and the server treats the field as
//! missing wherever it needs the typed value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A field value that is either the expected type or raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Lenient<T> {
    /// The value, if it had the expected type.
    pub fn typed(&self) -> Option<&T> {
        match self {
            Lenient::Typed(value) => Some(value),
            Lenient::Raw(_) => None,
        }
    }
}

impl Lenient<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.typed().map(String::as_str)
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Typed(value)
    }
}
