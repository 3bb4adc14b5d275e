//! # pet-core
//!
//! Deterministic rules for a single virtual pet session: bounded stats,
//! mood and day-phase derivation, guarded interactions driven by effect
//! tables, sleep-suppressed decay, and threshold notifications.
//!
//! The crate is pure: no clocks, no I/O, no async. Hosts supply
//! wall-clock timestamps and effect catalogs (through [`env::TablesOracle`])
//! and drive every mutation through [`engine::GameEngine`]. Given the
//! same starting state, catalogs, and action sequence, execution is fully
//! deterministic.
//!
//! ## Module Structure
//!
//! - [`config`]: shared rule constants (thresholds, clock scale, windows)
//! - [`state`]: the authoritative session state and its collections
//! - [`derived`]: mood and day phase, recomputed on read
//! - [`env`]: read-only effect-table oracles
//! - [`action`]: the action domain and its transition pipeline
//! - [`engine`]: the single write path executing actions against state

pub mod action;
pub mod config;
pub mod derived;
pub mod engine;
pub mod env;
pub mod state;

pub use action::{Action, ActionResult, ApplyOutcome, GuardError, PetActionKind};
pub use derived::{DayPhase, Mood, calculate_day_phase, calculate_mood};
pub use engine::{ExecuteError, GameEngine, TransitionPhase};
pub use env::{GameEnv, TablesOracle};
pub use state::{GameState, Stats};
