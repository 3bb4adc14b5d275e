//! The persisted shape of a session.
//!
//! A snapshot is five independently keyed records rather than one blob,
//! so a corrupt or missing record degrades only its own slice of state:
//! the remaining records still load and the gap falls back to defaults.

use serde::{Deserialize, Serialize};

use pet_core::state::{
    GameFlags, GameState, InventoryState, Notification, NotificationState, SceneKind, Stats,
};

/// Stable keys for the snapshot records.
pub const RECORD_KEYS: [&str; 5] = ["stats", "inventory", "flags", "notifications", "scene"];

/// One persisted session. Every field is optional on load; missing or
/// unreadable records are replaced by defaults when rebuilding state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub stats: Option<Stats>,
    pub inventory: Option<InventoryState>,
    pub flags: Option<GameFlags>,
    pub notifications: Option<Vec<Notification>>,
    pub scene: Option<SceneKind>,
}

impl SessionSnapshot {
    /// Captures the full state.
    pub fn capture(state: &GameState) -> Self {
        Self {
            stats: Some(state.stats),
            inventory: Some(state.inventory.clone()),
            flags: Some(state.flags),
            notifications: Some(state.notifications.entries.clone()),
            scene: Some(state.scene),
        }
    }

    /// Rebuilds a state, substituting defaults for missing records. The
    /// notification id allocator is restored past the highest loaded id.
    pub fn into_state(self, now_ms: u64) -> GameState {
        GameState::new(
            self.stats.unwrap_or_default(),
            self.inventory
                .unwrap_or_else(pet_content::default_inventory),
            self.flags.unwrap_or_else(|| GameFlags::new(now_ms)),
            self.notifications
                .map(NotificationState::from_entries)
                .unwrap_or_default(),
            self.scene.unwrap_or_default(),
        )
    }

    /// A snapshot with every record missing.
    pub fn empty() -> Self {
        Self {
            stats: None,
            inventory: None,
            flags: None,
            notifications: None,
            scene: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_none()
            && self.inventory.is_none()
            && self.flags.is_none()
            && self.notifications.is_none()
            && self.scene.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::state::{Severity, StatKind};

    #[test]
    fn capture_then_rebuild_is_lossless() {
        let mut state = pet_content::default_state(1_000);
        state.notifications.raise(
            Severity::Warning,
            "Hunger is getting low.".into(),
            Some(StatKind::Hunger),
            2_000,
        );
        state.scene = SceneKind::Park;

        let rebuilt = SessionSnapshot::capture(&state).into_state(9_999);
        assert_eq!(rebuilt, state);
    }

    #[test]
    fn missing_records_fall_back_to_defaults() {
        let snapshot = SessionSnapshot {
            stats: Some(Stats::new(10.0, 20.0, 30.0, 40.0)),
            inventory: None,
            flags: None,
            notifications: None,
            scene: None,
        };

        let state = snapshot.into_state(5_000);
        assert_eq!(state.stats.hunger, 10.0);
        // Defaults fill the gaps.
        assert!(state.inventory.usable_food("kibble"));
        assert_eq!(state.flags.last_played_at_ms, 5_000);
        assert_eq!(state.scene, SceneKind::Home);
    }

    #[test]
    fn restored_notification_ids_do_not_collide() {
        let mut state = pet_content::default_state(0);
        state
            .notifications
            .raise(Severity::Info, "a".into(), None, 0);
        state
            .notifications
            .raise(Severity::Info, "b".into(), None, 0);

        let mut rebuilt = SessionSnapshot::capture(&state).into_state(0);
        let next = rebuilt
            .notifications
            .raise(Severity::Info, "c".into(), None, 0);
        assert_eq!(next.id.0, 2);
    }
}
