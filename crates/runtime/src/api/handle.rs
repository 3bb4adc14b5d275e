//! Cloneable façade for issuing commands to the runtime.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! every interaction and bookkeeping operation, plus event streaming
//! from specific topics.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use pet_core::action::{Action, ActionResult, SystemAction, system};
use pet_core::derived::{DayPhase, Mood, calculate_day_phase, calculate_mood};
use pet_core::state::{DecayRates, GameState, Notification, NotificationId, SceneKind};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::runtime::RuntimeConfig;
use crate::workers::{Command, now_ms};

/// Client-facing handle to interact with the session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    config: Arc<RuntimeConfig>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        config: Arc<RuntimeConfig>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            config,
        }
    }

    /// Execute an action and wait for its result.
    pub async fn execute(&self, action: Action) -> Result<ActionResult> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Feed the pet one unit of a food item.
    pub async fn feed(&self, food_id: impl Into<String>) -> Result<ActionResult> {
        self.execute(Action::feed(food_id)).await
    }

    /// Play with the pet, optionally with an inventory toy.
    pub async fn play(&self, toy_id: Option<String>) -> Result<ActionResult> {
        self.execute(Action::play(toy_id)).await
    }

    /// Run a cleaning routine. `None` picks the standard bath.
    pub async fn clean(&self, routine_id: Option<String>) -> Result<ActionResult> {
        self.execute(Action::clean(routine_id)).await
    }

    /// Put the pet down for a rest cycle. `None` picks a full sleep.
    pub async fn rest(&self, cycle_id: Option<String>) -> Result<ActionResult> {
        self.execute(Action::rest(cycle_id)).await
    }

    /// Wake the pet immediately, ahead of the scheduled wake-up.
    pub async fn wake_up(&self) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::WakeUp(system::WakeUpAction)))
            .await
    }

    /// Apply one decay tick with the configured rates.
    pub async fn decay_tick(&self) -> Result<ActionResult> {
        self.decay_tick_with(self.config.decay.rates).await
    }

    /// Apply one decay tick with caller-supplied rates.
    pub async fn decay_tick_with(&self, rates: DecayRates) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::DecayTick(
            system::DecayTickAction { rates },
        )))
        .await
    }

    /// Advance the game clock by the configured step.
    pub async fn advance_clock(&self) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::AdvanceClock(
            system::AdvanceClockAction {
                delta_ms: self.config.timers.clock_step_ms,
            },
        )))
        .await
    }

    /// Record a session heartbeat at the current wall-clock time.
    pub async fn heartbeat(&self) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::Heartbeat(
            system::HeartbeatAction { now_ms: now_ms() },
        )))
        .await
    }

    /// Flip the sound preference.
    pub async fn toggle_sound(&self) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::ToggleSound(
            system::ToggleSoundAction,
        )))
        .await
    }

    /// Mark the tutorial finished.
    pub async fn complete_tutorial(&self) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::CompleteTutorial(
            system::CompleteTutorialAction,
        )))
        .await
    }

    /// Dismiss one notification by id.
    pub async fn dismiss_notification(&self, id: NotificationId) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::DismissNotification(
            system::DismissNotificationAction { id },
        )))
        .await
    }

    /// Scan stats against the thresholds; returns the newly raised
    /// notifications (deduplicated, possibly empty).
    pub async fn check_and_notify(&self) -> Result<Vec<Notification>> {
        let result = self
            .execute(Action::System(SystemAction::CheckNotify(
                system::CheckNotifyAction { now_ms: now_ms() },
            )))
            .await?;

        match result {
            ActionResult::Notifications(raised) => Ok(raised),
            _ => Ok(Vec::new()),
        }
    }

    /// Remove dismissed notifications past the retention window; returns
    /// how many were removed.
    pub async fn cleanup_notifications(&self) -> Result<usize> {
        let result = self
            .execute(Action::System(SystemAction::SweepNotifications(
                system::SweepNotificationsAction { now_ms: now_ms() },
            )))
            .await?;

        match result {
            ActionResult::Swept(removed) => Ok(removed),
            _ => Ok(0),
        }
    }

    /// Switch the persisted scene.
    pub async fn change_scene(&self, scene: SceneKind) -> Result<ActionResult> {
        self.execute(Action::System(SystemAction::ChangeScene(
            system::ChangeSceneAction { scene },
        )))
        .await
    }

    /// Persist a snapshot now.
    pub async fn save(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Save {
                reply: Some(reply_tx),
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current session state (read-only snapshot).
    pub async fn state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Current mood, derived from the stat vector.
    pub async fn mood(&self) -> Result<Mood> {
        Ok(calculate_mood(&self.state().await?.stats))
    }

    /// Current day phase, derived from the game clock.
    pub async fn day_phase(&self) -> Result<DayPhase> {
        Ok(calculate_day_phase(self.state().await?.flags.game_clock_ms))
    }

    /// Subscribe to events from a specific topic.
    ///
    /// # Topics
    ///
    /// - `Topic::State` - executed and rejected actions
    /// - `Topic::Notification` - threshold alerts and sweeps
    /// - `Topic::Lifecycle` - saves, sleep/wake, scene changes
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
