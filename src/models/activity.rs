// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity record model for storage and API.
//!
//! The mobile client owns most of the record's shape, so besides the fields
//! the server reads or stamps, every other key is kept in `extra` and written
//! back at the top level. Known fields of an unexpected JSON type are kept
//! raw (see [`Lenient`]) rather than rejected.

use crate::models::lenient::Lenient;
use crate::models::timestamp::ActivityTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Stored activity record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Opaque identifier, unique within the store
    pub id: String,
    /// Where the activity took place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Lenient<Location>>,
    /// Free-form description (searchable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Lenient<String>>,
    /// When the activity happened, as sent by the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<ActivityTime>,
    /// Whether the server has acknowledged this record
    pub is_synced: Lenient<bool>,
    /// Server time of creation (RFC3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Lenient<String>>,
    /// Server time of the last update (RFC3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Lenient<String>>,
    /// Any other client-supplied fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Location attached to an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable address (searchable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Lenient<String>>,
    /// Coordinates and anything else the client records
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Client input for create and update: every known field is optional.
///
/// JSON `null` on a known field reads as "not supplied". Any other value is
/// accepted; one of the wrong type is stored raw.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    pub id: Option<Lenient<String>>,
    pub location: Option<Lenient<Location>>,
    pub description: Option<Lenient<String>>,
    pub timestamp: Option<ActivityTime>,
    pub is_synced: Option<Lenient<bool>>,
    pub created_at: Option<Lenient<String>>,
    pub updated_at: Option<Lenient<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Activity {
    /// Build a new record from client input.
    ///
    /// A non-empty client `id` is kept, and a numeric one is kept in its
    /// decimal form; otherwise a fresh UUID is assigned. `isSynced` is forced
    /// to true and `createdAt` is set to `now`.
    pub fn create(patch: ActivityPatch, now: &str) -> Self {
        let id = match patch.id {
            Some(Lenient::Typed(id)) if !id.is_empty() => id,
            Some(Lenient::Raw(Value::Number(n))) => n.to_string(),
            _ => uuid::Uuid::new_v4().to_string(),
        };

        Self {
            id,
            location: patch.location,
            description: patch.description,
            timestamp: patch.timestamp,
            is_synced: Lenient::Typed(true),
            created_at: Some(now.to_string().into()),
            updated_at: patch.updated_at,
            extra: patch.extra,
        }
    }

    /// Shallow-merge client input over this record and stamp `updatedAt`.
    ///
    /// The patch's `id` is ignored so a record can never be renamed onto
    /// another record's id.
    pub fn apply(&mut self, patch: ActivityPatch, now: &str) {
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(timestamp) = patch.timestamp {
            self.timestamp = Some(timestamp);
        }
        if let Some(is_synced) = patch.is_synced {
            self.is_synced = is_synced;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = Some(created_at);
        }
        self.extra.extend(patch.extra);
        self.updated_at = Some(now.to_string().into());
    }

    /// The description, if it is a string.
    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().and_then(Lenient::as_str)
    }

    /// The location's address, if both are well-formed.
    pub fn address(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(Lenient::typed)
            .and_then(|l| l.address.as_ref())
            .and_then(Lenient::as_str)
    }

    /// Case-insensitive substring match on address or description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [self.address(), self.description()]
            .into_iter()
            .flatten()
            .any(|haystack| haystack.to_lowercase().contains(needle))
    }
}
