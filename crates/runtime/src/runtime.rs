//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker and background tickers, wires up
//! command/event channels, and exposes a builder-based API. Clients
//! interact through the cloneable [`SessionHandle`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use pet_content::SessionSettings;
use pet_core::state::{DecayRates, GameState};

use crate::api::{Result, SessionHandle};
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::repository::{InMemorySnapshotRepository, SnapshotRepository};
use crate::workers::{Command, SessionWorker, now_ms, spawn_tickers};

/// Stat decay configuration.
#[derive(Debug, Clone, Copy)]
pub struct DecayConfig {
    pub enabled: bool,
    pub interval_ms: u64,
    pub rates: DecayRates,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 5_000,
            rates: DecayRates::new(-1.0, -0.5, -0.3, -0.2),
        }
    }
}

/// Background ticker cadences.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    pub clock_tick_ms: u64,
    pub clock_step_ms: u64,
    pub heartbeat_ms: u64,
    pub autosave_ms: u64,
    pub notification_sweep_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            clock_tick_ms: 60_000,
            clock_step_ms: 60_000,
            heartbeat_ms: 60_000,
            autosave_ms: 120_000,
            notification_sweep_ms: 300_000,
        }
    }
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub decay: DecayConfig,
    pub timers: TimerConfig,
    /// Real-time delay before a resting pet wakes automatically.
    pub rest_wake_delay_ms: u64,
    /// Disable to drive every tick manually (tests, turn-based hosts).
    pub background_tickers: bool,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            decay: DecayConfig::default(),
            timers: TimerConfig::default(),
            rest_wake_delay_ms: 3_000,
            background_tickers: true,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl From<SessionSettings> for RuntimeConfig {
    fn from(settings: SessionSettings) -> Self {
        Self {
            decay: DecayConfig {
                enabled: settings.decay.enabled,
                interval_ms: settings.decay.interval_ms,
                rates: DecayRates::new(
                    settings.decay.hunger,
                    settings.decay.happiness,
                    settings.decay.cleanliness,
                    settings.decay.energy,
                ),
            },
            timers: TimerConfig {
                clock_tick_ms: settings.timers.clock_tick_ms,
                clock_step_ms: settings.timers.clock_step_ms,
                heartbeat_ms: settings.timers.heartbeat_ms,
                autosave_ms: settings.timers.autosave_ms,
                notification_sweep_ms: settings.timers.notification_sweep_ms,
            },
            rest_wake_delay_ms: settings.rest_wake_delay_ms,
            ..Self::default()
        }
    }
}

/// Main runtime that hosts one pet session.
///
/// Design: the runtime owns the worker and tickers; [`SessionHandle`]
/// provides a cloneable façade for clients.
pub struct Runtime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
    ticker_handles: Vec<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully: stop the tickers, drop the
    /// command channel, and wait for the worker to drain.
    pub async fn shutdown(self) -> Result<()> {
        for ticker in &self.ticker_handles {
            ticker.abort();
        }
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(crate::api::RuntimeError::WorkerJoin)?;
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn SnapshotRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            oracles: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial session state, bypassing the repository load.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the oracle manager. Defaults to the built-in catalogs.
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the snapshot repository. Defaults to an in-memory store.
    pub fn repository(mut self, repository: Arc<dyn SnapshotRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the runtime.
    ///
    /// Initial state comes from, in order: the explicit state, the
    /// repository's stored snapshot, or the content defaults.
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.unwrap_or_else(OracleManager::builtin);
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemorySnapshotRepository::new()));

        let initial_state = match self.state {
            Some(state) => state,
            None => match repository.load()? {
                Some(snapshot) => snapshot.into_state(now_ms()),
                None => pet_content::default_state(now_ms()),
            },
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = SessionHandle::new(
            command_tx.clone(),
            event_bus.clone(),
            Arc::new(self.config.clone()),
        );

        let worker = SessionWorker::new(
            initial_state,
            oracles,
            repository,
            self.config.clone(),
            command_rx,
            command_tx.downgrade(),
            event_bus,
        );
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        let ticker_handles = if self.config.background_tickers {
            spawn_tickers(&self.config, command_tx)
        } else {
            Vec::new()
        };

        Ok(Runtime {
            handle,
            worker_handle,
            ticker_handles,
        })
    }
}
