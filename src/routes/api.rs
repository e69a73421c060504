// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity CRUD routes.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityPatch};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}",
            get(get_activity)
                .put(update_activity)
                .delete(delete_activity),
        )
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Case-insensitive match on address or description
    search: Option<String>,
}

/// List activities, newest first, optionally filtered.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Json<Vec<Activity>> {
    let activities = state.store.list(params.search.as_deref()).await;

    tracing::debug!(
        search = ?params.search,
        count = activities.len(),
        "Listed activities"
    );

    Json(activities)
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    state
        .store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(AppError::activity_not_found)
}

/// Create an activity. Always succeeds.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ActivityPatch>,
) -> (StatusCode, Json<Activity>) {
    let activity = state.store.create(patch).await;

    tracing::info!(id = %activity.id, "Activity created");

    (StatusCode::CREATED, Json(activity))
}

/// Shallow-merge fields into an existing activity.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ActivityPatch>,
) -> Result<Json<Activity>> {
    let activity = state
        .store
        .update(&id, patch)
        .await
        .ok_or_else(AppError::activity_not_found)?;

    tracing::debug!(id = %activity.id, "Activity updated");

    Ok(Json(activity))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !state.store.delete(&id).await {
        return Err(AppError::activity_not_found());
    }

    tracing::info!(id = %id, "Activity deleted");

    Ok(StatusCode::NO_CONTENT)
}
