// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Listing query: search filter and ordering.
//!
//! Kept free of locking so it can be benchmarked and tested without a store.

use crate::models::Activity;
use std::cmp::Reverse;

/// Normalize a `search` parameter. An empty value means "no filter".
pub fn search_needle(search: Option<&str>) -> Option<String> {
    search.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

/// Keep activities matching `search` and sort newest first.
///
/// Activities without a parseable timestamp go last. The sort is stable, so
/// ties and undated records keep insertion order.
pub fn filter_and_sort(activities: Vec<Activity>, search: Option<&str>) -> Vec<Activity> {
    let mut result: Vec<Activity> = match search_needle(search) {
        Some(needle) => activities
            .into_iter()
            .filter(|a| a.matches(&needle))
            .collect(),
        None => activities,
    };

    result.sort_by_cached_key(|a| Reverse(a.timestamp.as_ref().and_then(|t| t.instant())));
    result
}
