//! Starting state for a freshly adopted pet.

use pet_core::state::{
    GameFlags, GameState, InventoryItem, InventoryState, ItemCategory, NotificationState,
    SceneKind, Stats,
};

/// Default stat vector for a new session.
pub fn default_stats() -> Stats {
    Stats::default()
}

/// Default starter inventory: a bag of kibble and one ball.
pub fn default_inventory() -> InventoryState {
    InventoryState::new(vec![
        InventoryItem::new("kibble", "Dog Kibble", "🍖", ItemCategory::Food, 5),
        InventoryItem::new("ball", "Tennis Ball", "🎾", ItemCategory::Toy, 1),
    ])
}

/// Default session flags anchored at `now_ms`.
pub fn default_flags(now_ms: u64) -> GameFlags {
    GameFlags::new(now_ms)
}

/// Complete starting state for a new session anchored at `now_ms`.
pub fn default_state(now_ms: u64) -> GameState {
    GameState::new(
        default_stats(),
        default_inventory(),
        default_flags(now_ms),
        NotificationState::new(),
        SceneKind::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_inventory_has_kibble_and_a_ball() {
        let inventory = default_inventory();
        assert_eq!(inventory.get("kibble").map(|i| i.quantity), Some(5));
        assert_eq!(inventory.get("ball").map(|i| i.quantity), Some(1));
        assert!(inventory.usable_food("kibble"));
        assert!(inventory.has_toy("ball"));
    }

    #[test]
    fn default_state_is_awake_and_unvisited() {
        let state = default_state(42_000);
        assert!(state.flags.first_visit);
        assert!(!state.flags.sleeping);
        assert_eq!(state.flags.last_played_at_ms, 42_000);
        assert_eq!(state.scene, SceneKind::Home);
        assert!(state.notifications.entries.is_empty());
    }
}
