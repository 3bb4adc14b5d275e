//! Runtime orchestration for a virtual pet session.
//!
//! This crate wires together the rules engine, content oracles, snapshot
//! repositories, and background tickers into a cohesive runtime API.
//! Consumers embed [`Runtime`] to host a session and interact with it
//! through [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides a topic-based event bus for flexible routing
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] and [`repository`] provide data adapters

pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, SessionHandle};
pub use events::{Event, EventBus, LifecycleEvent, NotificationEvent, StateEvent, Topic};
pub use oracle::{CatalogTables, OracleManager};
pub use repository::{
    FileSnapshotRepository, InMemorySnapshotRepository, RepositoryError, SessionSnapshot,
    SnapshotRepository,
};
pub use runtime::{DecayConfig, Runtime, RuntimeBuilder, RuntimeConfig, TimerConfig};
