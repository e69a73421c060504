// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process activity store.
//!
//! Activities live in a single insertion-ordered `Vec` behind an async
//! `RwLock`. Each operation holds the lock for one short critical section, so
//! every request applies as a single atomic step. Nothing survives a restart.

use crate::db::query;
use crate::models::{Activity, ActivityPatch};
use crate::time_utils::now_rfc3339;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the activity collection. Cloning is cheap.
#[derive(Clone, Default)]
pub struct ActivityStore {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored activities.
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Whether the store holds no activities.
    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// List activities, optionally filtered by `search`, newest first.
    pub async fn list(&self, search: Option<&str>) -> Vec<Activity> {
        let snapshot = self.activities.read().await.clone();
        query::filter_and_sort(snapshot, search)
    }

    /// Get an activity by ID.
    pub async fn get(&self, id: &str) -> Option<Activity> {
        self.activities
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Create an activity from client input.
    ///
    /// If the client supplied an ID that is already stored, the existing
    /// record is replaced in place so IDs stay unique.
    pub async fn create(&self, patch: ActivityPatch) -> Activity {
        let activity = Activity::create(patch, &now_rfc3339());

        let mut activities = self.activities.write().await;
        match activities.iter_mut().find(|a| a.id == activity.id) {
            Some(existing) => {
                tracing::debug!(id = %activity.id, "Replacing activity with same id");
                *existing = activity.clone();
            }
            None => activities.push(activity.clone()),
        }

        activity
    }

    /// Merge client input into an existing activity.
    ///
    /// Returns `None` (and changes nothing) if the ID is unknown.
    pub async fn update(&self, id: &str, patch: ActivityPatch) -> Option<Activity> {
        let mut activities = self.activities.write().await;
        let activity = activities.iter_mut().find(|a| a.id == id)?;
        activity.apply(patch, &now_rfc3339());
        Some(activity.clone())
    }

    /// Remove an activity. Returns `false` if the ID is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        let mut activities = self.activities.write().await;
        match activities.iter().position(|a| a.id == id) {
            Some(index) => {
                activities.remove(index);
                true
            }
            None => false,
        }
    }
}
