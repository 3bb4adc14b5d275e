//! Read-only environment accessed during action execution.
//!
//! Effect tables are content, not state: the engine reaches them through
//! the [`TablesOracle`] trait so hosts can swap catalogs without touching
//! the rules. `pet-content` provides the built-in tables.

mod tables;

pub use tables::{CleaningStep, FoodEffect, RestCycle, TablesOracle, ToyEffect};

/// Borrowed view over the oracles an action may consult.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    tables: &'a dyn TablesOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(tables: &'a dyn TablesOracle) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &dyn TablesOracle {
        self.tables
    }
}
