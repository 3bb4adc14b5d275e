//! Authoritative session state.
//!
//! One pet, one inventory, one flags record, one notification list per
//! session. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.

pub mod flags;
pub mod inventory;
pub mod notifications;
pub mod stats;

pub use flags::GameFlags;
pub use inventory::{InventoryItem, InventoryState, ItemCategory};
pub use notifications::{Notification, NotificationId, NotificationState, Severity};
pub use stats::{DecayRates, StatKind, Stats, clamp_stat};

/// Scene selector persisted for the host UI. No rules attach to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SceneKind {
    Home,
    Park,
    Kitchen,
    Bedroom,
    Bathroom,
}

impl Default for SceneKind {
    fn default() -> Self {
        SceneKind::Home
    }
}

/// Canonical snapshot of the session state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub stats: Stats,
    pub inventory: InventoryState,
    pub flags: GameFlags,
    pub notifications: NotificationState,
    pub scene: SceneKind,
}

impl GameState {
    pub fn new(
        stats: Stats,
        inventory: InventoryState,
        flags: GameFlags,
        notifications: NotificationState,
        scene: SceneKind,
    ) -> Self {
        Self {
            stats,
            inventory,
            flags,
            notifications,
            scene,
        }
    }

    /// Empty session anchored at the given wall-clock time; hosts normally
    /// start from `pet-content`'s defaults instead.
    pub fn empty(now_ms: u64) -> Self {
        Self {
            stats: Stats::default(),
            inventory: InventoryState::default(),
            flags: GameFlags::new(now_ms),
            notifications: NotificationState::new(),
            scene: SceneKind::default(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty(0)
    }
}
