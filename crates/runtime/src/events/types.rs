//! Event types for different topics.

use serde::{Deserialize, Serialize};

use pet_core::action::{Action, ActionResult};
use pet_core::engine::TransitionPhase;
use pet_core::state::{Notification, SceneKind, Stats};

/// Events about state mutation: executed and rejected actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StateEvent {
    /// An action went through the engine and (possibly) changed state.
    ActionExecuted {
        action: Action,
        result: ActionResult,
        /// Stat vector after execution, for cheap UI refreshes.
        stats: Stats,
    },

    /// The transition guard rejected a pet interaction.
    ActionRejected {
        action: Action,
        phase: TransitionPhase,
        /// Player-facing rejection text.
        message: String,
    },
}

/// Events about the notification list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationEvent {
    /// A threshold crossing raised this alert.
    Raised(Notification),

    /// A cleanup sweep removed this many dismissed notifications.
    Swept { removed: usize },
}

/// Session lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// A snapshot was written to the repository.
    Saved { at_ms: u64 },

    /// The pet fell asleep; a wake-up is scheduled after `wake_after_ms`.
    Slept { wake_after_ms: u64 },

    /// The pet woke up.
    Woke,

    /// The host switched scenes.
    SceneChanged(SceneKind),
}
