//! Data-driven content for pet sessions.
//!
//! This crate houses the built-in effect catalogs and starting state,
//! plus loaders for RON/TOML data files:
//! - Effect catalogs: foods, toys, cleaning routines, rest cycles (RON)
//! - Session settings: decay rates and ticker cadences (TOML)
//!
//! Content is consumed by runtime oracles and never appears in session
//! state. Loaders deserialize directly into pet-core types via serde.

pub mod catalog;
pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, Catalogs};
pub use defaults::{default_flags, default_inventory, default_state, default_stats};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, DecaySettings, SessionSettings, TimerSettings};
