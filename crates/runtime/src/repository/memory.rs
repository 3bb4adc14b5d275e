//! In-memory SnapshotRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::repository::snapshot::SessionSnapshot;
use crate::repository::{RepositoryError, Result, SnapshotRepository};

/// In-memory implementation of [`SnapshotRepository`].
///
/// Stores each snapshot record as a JSON value under its own key,
/// mirroring the layout of the file-backed store.
pub struct InMemorySnapshotRepository {
    records: RwLock<HashMap<&'static str, Value>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySnapshotRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| RepositoryError::Json(e.to_string()))
}

fn from_value<T: serde::de::DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if let Some(stats) = &snapshot.stats {
            records.insert("stats", to_value(stats)?);
        }
        if let Some(inventory) = &snapshot.inventory {
            records.insert("inventory", to_value(inventory)?);
        }
        if let Some(flags) = &snapshot.flags {
            records.insert("flags", to_value(flags)?);
        }
        if let Some(notifications) = &snapshot.notifications {
            records.insert("notifications", to_value(notifications)?);
        }
        if let Some(scene) = &snapshot.scene {
            records.insert("scene", to_value(scene)?);
        }
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionSnapshot>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if records.is_empty() {
            return Ok(None);
        }

        Ok(Some(SessionSnapshot {
            stats: records.get("stats").and_then(from_value),
            inventory: records.get("inventory").and_then(from_value),
            flags: records.get("flags").and_then(from_value),
            notifications: records.get("notifications").and_then(from_value),
            scene: records.get("scene").and_then(from_value),
        }))
    }

    fn clear(&self) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.clear();
        Ok(())
    }
}
