//! Action domain - every state mutation is an action.
//!
//! Player interactions (feed/play/clean/rest) and system bookkeeping
//! (decay ticks, clock advance, notification checks, timestamps) share
//! one execution pipeline so the engine is the single write path.
//!
//! # Module Structure
//!
//! - `guard`: transition preconditions and their rejection messages
//! - `feed` / `play` / `clean` / `rest`: the guarded pet interactions
//! - `system`: unguarded session bookkeeping actions

pub mod clean;
pub mod feed;
pub mod guard;
pub mod play;
pub mod rest;
pub mod system;

pub use clean::CleanAction;
pub use feed::FeedAction;
pub use guard::{GuardError, PetActionKind, is_valid_transition, transition_error};
pub use play::PlayAction;
pub use rest::RestAction;
pub use system::{
    AdvanceClockAction, ChangeSceneAction, CheckNotifyAction, CompleteTutorialAction,
    DecayTickAction, DismissNotificationAction, HeartbeatAction, MarkSavedAction,
    SweepNotificationsAction, ToggleSoundAction, WakeUpAction,
};

use crate::env::GameEnv;
use crate::state::{GameState, Notification};

/// Defines how a concrete action variant mutates session state.
///
/// The pipeline runs `pre_validate` (the transition guard) against the
/// state before mutation, then `apply`, then `post_validate`. A rejected
/// action must leave all state untouched, which holds by construction
/// because `apply` only runs after `pre_validate` succeeds.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the session state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Whether an action changed anything. Unknown ids, missing inventory,
/// and sleep-suppressed decay are silent no-ops, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplyOutcome {
    Applied,
    NoEffect,
}

/// Guarded player interactions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PetAction {
    Feed(FeedAction),
    Play(PlayAction),
    Clean(CleanAction),
    Rest(RestAction),
}

impl PetAction {
    pub fn kind(&self) -> PetActionKind {
        match self {
            PetAction::Feed(_) => PetActionKind::Feed,
            PetAction::Play(_) => PetActionKind::Play,
            PetAction::Clean(_) => PetActionKind::Clean,
            PetAction::Rest(_) => PetActionKind::Rest,
        }
    }
}

/// Unguarded session bookkeeping actions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemAction {
    DecayTick(DecayTickAction),
    AdvanceClock(AdvanceClockAction),
    Heartbeat(HeartbeatAction),
    MarkSaved(MarkSavedAction),
    ToggleSound(ToggleSoundAction),
    CompleteTutorial(CompleteTutorialAction),
    WakeUp(WakeUpAction),
    DismissNotification(DismissNotificationAction),
    CheckNotify(CheckNotifyAction),
    SweepNotifications(SweepNotificationsAction),
    ChangeScene(ChangeSceneAction),
}

/// Top-level action enum routed through the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Pet(PetAction),
    System(SystemAction),
}

impl Action {
    pub fn feed(food_id: impl Into<String>) -> Self {
        Action::Pet(PetAction::Feed(FeedAction::new(food_id)))
    }

    pub fn play(toy_id: Option<String>) -> Self {
        Action::Pet(PetAction::Play(PlayAction::new(toy_id)))
    }

    /// Omitted routine id falls back to the standard bath.
    pub fn clean(routine_id: Option<String>) -> Self {
        let routine_id = routine_id.unwrap_or_else(|| clean::DEFAULT_ROUTINE.to_owned());
        Action::Pet(PetAction::Clean(CleanAction::new(routine_id)))
    }

    /// Omitted cycle id falls back to a full sleep.
    pub fn rest(cycle_id: Option<String>) -> Self {
        let cycle_id = cycle_id.unwrap_or_else(|| rest::DEFAULT_CYCLE.to_owned());
        Action::Pet(PetAction::Rest(RestAction::new(cycle_id)))
    }
}

/// Action-specific execution result returned by the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// A pet interaction ran; `NoEffect` marks the silent no-op cases.
    Pet {
        kind: PetActionKind,
        outcome: ApplyOutcome,
    },
    /// A decay tick ran; `NoEffect` while the pet sleeps.
    Decay(ApplyOutcome),
    /// A notification check ran, emitting these alerts (possibly none).
    Notifications(Vec<Notification>),
    /// A cleanup sweep ran, removing this many notifications.
    Swept(usize),
    /// Other system bookkeeping completed.
    System,
}
