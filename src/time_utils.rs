// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 with millisecond precision and a `Z`
/// suffix (the format mobile clients get from `Date.toISOString()`).
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current server time, formatted for `createdAt`/`updatedAt` fields.
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}
