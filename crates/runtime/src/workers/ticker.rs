//! Interval tasks driving the session's background cadence.
//!
//! Each ticker owns one interval and sends fire-and-forget commands to
//! the session worker. Tickers stop on their own when the command
//! channel closes.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};

use pet_core::action::{Action, SystemAction, system};

use crate::runtime::RuntimeConfig;
use crate::workers::{Command, now_ms};

/// Spawns the background tickers configured for this session: decay,
/// game clock, heartbeat, notification checks, autosave, and cleanup.
pub(crate) fn spawn_tickers(
    config: &RuntimeConfig,
    command_tx: mpsc::Sender<Command>,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::new();

    if config.decay.enabled {
        let rates = config.decay.rates;
        handles.push(spawn_action_ticker(
            config.decay.interval_ms,
            command_tx.clone(),
            move || {
                Action::System(SystemAction::DecayTick(system::DecayTickAction { rates }))
            },
        ));
        // Notification checks ride the decay cadence: stats only move on
        // decay ticks and interactions, and interactions check inline.
        handles.push(spawn_action_ticker(
            config.decay.interval_ms,
            command_tx.clone(),
            || {
                Action::System(SystemAction::CheckNotify(system::CheckNotifyAction {
                    now_ms: now_ms(),
                }))
            },
        ));
    }

    let step = config.timers.clock_step_ms;
    handles.push(spawn_action_ticker(
        config.timers.clock_tick_ms,
        command_tx.clone(),
        move || {
            Action::System(SystemAction::AdvanceClock(system::AdvanceClockAction {
                delta_ms: step,
            }))
        },
    ));

    handles.push(spawn_action_ticker(
        config.timers.heartbeat_ms,
        command_tx.clone(),
        || {
            Action::System(SystemAction::Heartbeat(system::HeartbeatAction {
                now_ms: now_ms(),
            }))
        },
    ));

    handles.push(spawn_action_ticker(
        config.timers.notification_sweep_ms,
        command_tx.clone(),
        || {
            Action::System(SystemAction::SweepNotifications(
                system::SweepNotificationsAction { now_ms: now_ms() },
            ))
        },
    ));

    // Autosave uses the Save command rather than an action.
    let autosave_tx = command_tx;
    let autosave_ms = config.timers.autosave_ms;
    handles.push(tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(autosave_ms.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await; // first tick fires immediately, skip it
        loop {
            ticker.tick().await;
            if autosave_tx.send(Command::Save { reply: None }).await.is_err() {
                break;
            }
        }
    }));

    handles
}

fn spawn_action_ticker(
    period_ms: u64,
    command_tx: mpsc::Sender<Command>,
    make_action: impl Fn() -> Action + Send + 'static,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(period_ms.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let action = make_action();
            if command_tx.send(Command::Tick { action }).await.is_err() {
                break;
            }
        }
    })
}
