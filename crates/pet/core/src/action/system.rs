//! Session bookkeeping actions.
//!
//! These run without a transition guard and cannot fail, so they use
//! [`Infallible`] as their error type. The engine still routes them
//! through the same pipeline as pet interactions.

use core::convert::Infallible;

use crate::action::{ActionTransition, ApplyOutcome};
use crate::config::{CRITICAL_THRESHOLD, WARNING_THRESHOLD};
use crate::env::GameEnv;
use crate::state::{
    DecayRates, GameState, Notification, NotificationId, SceneKind, Severity, StatKind,
};

/// Applies one decay tick. Suppressed entirely while the pet sleeps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecayTickAction {
    pub rates: DecayRates,
}

impl ActionTransition for DecayTickAction {
    type Error = Infallible;
    type Result = ApplyOutcome;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        if state.flags.sleeping {
            return Ok(ApplyOutcome::NoEffect);
        }
        state.stats = state.stats.apply(&self.rates);
        Ok(ApplyOutcome::Applied)
    }
}

/// Advances the in-game clock by a fixed amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceClockAction {
    pub delta_ms: u64,
}

impl ActionTransition for AdvanceClockAction {
    type Error = Infallible;
    type Result = ();

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        state.flags.game_clock_ms = state.flags.game_clock_ms.wrapping_add(self.delta_ms);
        Ok(())
    }
}

/// Accumulates elapsed play time and stamps the last-played time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartbeatAction {
    pub now_ms: u64,
}

impl ActionTransition for HeartbeatAction {
    type Error = Infallible;
    type Result = ();

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        state.flags.record_heartbeat(self.now_ms);
        Ok(())
    }
}

/// Stamps a successful save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkSavedAction {
    pub now_ms: u64,
}

impl ActionTransition for MarkSavedAction {
    type Error = Infallible;
    type Result = ();

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        state.flags.last_saved_at_ms = self.now_ms;
        Ok(())
    }
}

/// Flips the sound preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleSoundAction;

impl ActionTransition for ToggleSoundAction {
    type Error = Infallible;
    type Result = ();

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        state.flags.sound_enabled = !state.flags.sound_enabled;
        Ok(())
    }
}

/// Marks the tutorial finished and ends the first visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteTutorialAction;

impl ActionTransition for CompleteTutorialAction {
    type Error = Infallible;
    type Result = ();

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        state.flags.tutorial_completed = true;
        state.flags.first_visit = false;
        Ok(())
    }
}

/// Clears the sleeping flag. The flag is read at execution time, so a
/// wake-up scheduled before a restore only applies if the restored state
/// is still sleeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WakeUpAction;

impl ActionTransition for WakeUpAction {
    type Error = Infallible;
    type Result = ApplyOutcome;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        if !state.flags.sleeping {
            return Ok(ApplyOutcome::NoEffect);
        }
        state.flags.sleeping = false;
        Ok(ApplyOutcome::Applied)
    }
}

/// Marks one notification dismissed. Unknown ids are a silent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DismissNotificationAction {
    pub id: NotificationId,
}

impl ActionTransition for DismissNotificationAction {
    type Error = Infallible;
    type Result = ApplyOutcome;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        if state.notifications.dismiss(self.id) {
            Ok(ApplyOutcome::Applied)
        } else {
            Ok(ApplyOutcome::NoEffect)
        }
    }
}

/// Scans every stat against the warning and critical thresholds and
/// raises deduplicated notifications for crossings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckNotifyAction {
    pub now_ms: u64,
}

impl ActionTransition for CheckNotifyAction {
    type Error = Infallible;
    type Result = Vec<Notification>;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let mut raised = Vec::new();
        for stat in StatKind::ALL {
            let value = state.stats.get(stat);
            let severity = if value <= CRITICAL_THRESHOLD {
                Severity::Critical
            } else if value <= WARNING_THRESHOLD {
                Severity::Warning
            } else {
                continue;
            };

            if state.notifications.recently_raised(stat, self.now_ms) {
                continue;
            }

            let message = Notification::threshold_message(stat, severity);
            raised.push(
                state
                    .notifications
                    .raise(severity, message, Some(stat), self.now_ms),
            );
        }
        Ok(raised)
    }
}

/// Removes dismissed notifications past their retention window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepNotificationsAction {
    pub now_ms: u64,
}

impl ActionTransition for SweepNotificationsAction {
    type Error = Infallible;
    type Result = usize;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        Ok(state.notifications.sweep(self.now_ms))
    }
}

/// Switches the persisted scene selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeSceneAction {
    pub scene: SceneKind,
}

impl ActionTransition for ChangeSceneAction {
    type Error = Infallible;
    type Result = ();

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        state.scene = self.scene;
        Ok(())
    }
}
