//! Session worker that owns the authoritative [`pet_core::GameState`].
//!
//! Receives commands from [`SessionHandle`], executes actions via
//! [`pet_core::GameEngine`], persists snapshots, and publishes events.
//! Commands are processed one at a time, so every read-compute-write
//! cycle inside an action is atomic with respect to every other command.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use pet_core::action::{Action, ActionResult, ApplyOutcome, PetAction, SystemAction, system};
use pet_core::engine::{ExecuteError, GameEngine, TransitionPhase};
use pet_core::state::GameState;
use tracing::{debug, warn};

use crate::api::Result;
use crate::events::{Event, EventBus, LifecycleEvent, NotificationEvent, StateEvent};
use crate::oracle::OracleManager;
use crate::repository::{SessionSnapshot, SnapshotRepository};
use crate::runtime::RuntimeConfig;
use crate::workers::{Command, now_ms};

/// Background task that processes session commands.
pub(crate) struct SessionWorker {
    state: GameState,
    oracles: OracleManager,
    repository: Arc<dyn SnapshotRepository>,
    config: RuntimeConfig,
    command_rx: mpsc::Receiver<Command>,
    /// Used by the scheduled wake-up task to enqueue its own command.
    /// Weak so a pending wake never keeps the command channel alive.
    command_tx: mpsc::WeakSender<Command>,
    event_bus: EventBus,
    /// Pending auto-wake; replaced when a new rest starts.
    wake_task: Option<JoinHandle<()>>,
    /// Bumped on every rest. A wake command carrying an older value was
    /// scheduled by a superseded rest and is ignored, even if its task
    /// enqueued the command before being aborted.
    wake_generation: u64,
}

impl SessionWorker {
    pub(crate) fn new(
        state: GameState,
        oracles: OracleManager,
        repository: Arc<dyn SnapshotRepository>,
        config: RuntimeConfig,
        command_rx: mpsc::Receiver<Command>,
        command_tx: mpsc::WeakSender<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            state,
            oracles,
            repository,
            config,
            command_rx,
            command_tx,
            event_bus,
            wake_task: None,
            wake_generation: 0,
        }
    }

    /// Main worker loop. Ends when every command sender is dropped.
    pub(crate) async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        if let Some(task) = self.wake_task.take() {
            task.abort();
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { action, reply } => {
                let result = self.execute_action(&action);
                let _ = reply.send(result);
            }
            Command::Tick { action } => {
                if let Err(error) = self.execute_action(&action) {
                    debug!(
                        target: "runtime::worker",
                        action = ?action,
                        error = %error,
                        "Background action rejected"
                    );
                }
            }
            Command::AutoWake { generation } => {
                if generation != self.wake_generation {
                    debug!(
                        target: "runtime::worker",
                        generation,
                        current = self.wake_generation,
                        "Stale wake-up ignored"
                    );
                    return;
                }
                let action = Action::System(SystemAction::WakeUp(system::WakeUpAction));
                let _ = self.execute_action(&action);
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
            Command::Save { reply } => {
                let result = self.save_snapshot();
                if let Some(reply) = reply {
                    let _ = reply.send(result);
                } else if let Err(error) = result {
                    warn!(target: "runtime::worker", error = %error, "Autosave failed");
                }
            }
        }
    }

    /// Executes against a cloned state so a failure never leaves a
    /// partial mutation behind, then commits and publishes events.
    fn execute_action(&mut self, action: &Action) -> Result<ActionResult> {
        let env = self.oracles.as_game_env();
        let was_sleeping = self.state.flags.sleeping;

        let mut engine = GameEngine::new(self.state.clone());
        match engine.execute(&env, action) {
            Ok(result) => {
                self.state = engine.into_state();
                self.publish_effects(action, &result, was_sleeping);
                Ok(result)
            }
            Err(error) => {
                self.handle_execute_error(action, &error);
                Err(error.into())
            }
        }
    }

    fn publish_effects(&mut self, action: &Action, result: &ActionResult, was_sleeping: bool) {
        self.event_bus.publish(Event::State(StateEvent::ActionExecuted {
            action: action.clone(),
            result: result.clone(),
            stats: self.state.stats,
        }));

        match result {
            ActionResult::Pet {
                outcome: ApplyOutcome::Applied,
                ..
            } => {
                if let Action::Pet(PetAction::Rest(_)) = action {
                    self.schedule_wake();
                }
            }
            ActionResult::Notifications(raised) => {
                for notification in raised {
                    self.event_bus.publish(Event::Notification(
                        NotificationEvent::Raised(notification.clone()),
                    ));
                }
            }
            ActionResult::Swept(removed) if *removed > 0 => {
                self.event_bus
                    .publish(Event::Notification(NotificationEvent::Swept {
                        removed: *removed,
                    }));
            }
            _ => {}
        }

        match action {
            Action::System(SystemAction::WakeUp(_))
                if was_sleeping && !self.state.flags.sleeping =>
            {
                self.event_bus
                    .publish(Event::Lifecycle(LifecycleEvent::Woke));
            }
            Action::System(SystemAction::ChangeScene(change)) => {
                self.event_bus
                    .publish(Event::Lifecycle(LifecycleEvent::SceneChanged(change.scene)));
            }
            _ => {}
        }
    }

    /// Schedules (or reschedules) the automatic wake-up after the
    /// configured real-time delay. The wake executes against the state
    /// current at fire time, so a manual wake in the meantime stays
    /// authoritative, and the generation tag keeps a wake enqueued by a
    /// superseded rest from ending a newer one early.
    fn schedule_wake(&mut self) {
        let delay_ms = self.config.rest_wake_delay_ms;
        self.wake_generation += 1;
        let generation = self.wake_generation;

        if let Some(previous) = self.wake_task.take() {
            previous.abort();
        }

        let command_tx = self.command_tx.clone();
        self.wake_task = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            let Some(command_tx) = command_tx.upgrade() else {
                return;
            };
            let _ = command_tx.send(Command::AutoWake { generation }).await;
        }));

        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Slept {
                wake_after_ms: delay_ms,
            }));
    }

    fn save_snapshot(&mut self) -> Result<()> {
        let snapshot = SessionSnapshot::capture(&self.state);
        self.repository.save(&snapshot)?;

        let at_ms = now_ms();
        let env = self.oracles.as_game_env();
        let mark = Action::System(SystemAction::MarkSaved(system::MarkSavedAction {
            now_ms: at_ms,
        }));
        let mut engine = GameEngine::new(self.state.clone());
        if engine.execute(&env, &mark).is_ok() {
            self.state = engine.into_state();
        }

        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Saved { at_ms }));
        debug!(target: "runtime::worker", at_ms, "Snapshot saved");
        Ok(())
    }

    fn handle_execute_error(&self, action: &Action, error: &ExecuteError) {
        let ExecuteError::Rejected { phase, source, .. } = error;
        let message = source.to_string();

        if *phase == TransitionPhase::PreValidate {
            debug!(
                target: "runtime::worker",
                action = ?action,
                error = %message,
                "Action rejected during pre-validate"
            );
        } else {
            warn!(
                target: "runtime::worker",
                action = ?action,
                phase = %phase,
                error = %message,
                "Action execution failed"
            );
        }

        self.event_bus.publish(Event::State(StateEvent::ActionRejected {
            action: action.clone(),
            phase: *phase,
            message,
        }));
    }
}
