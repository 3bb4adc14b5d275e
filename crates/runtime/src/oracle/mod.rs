//! Runtime wrappers around static content catalogs.
//!
//! [`CatalogTables`] exposes `pet-core`'s [`TablesOracle`] trait over the
//! loaded [`pet_content::Catalogs`], and [`OracleManager`] bundles the
//! oracles so the worker can build [`GameEnv`] snapshots on demand. The
//! data is immutable at runtime; dynamic state lives in the worker.

use std::sync::Arc;

use pet_content::Catalogs;
use pet_core::env::{CleaningStep, FoodEffect, GameEnv, RestCycle, TablesOracle, ToyEffect};

/// [`TablesOracle`] implementation backed by loaded catalogs.
#[derive(Clone, Debug)]
pub struct CatalogTables {
    catalogs: Catalogs,
}

impl CatalogTables {
    pub fn new(catalogs: Catalogs) -> Self {
        Self { catalogs }
    }

    /// The built-in catalogs.
    pub fn builtin() -> Self {
        Self::new(Catalogs::builtin())
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }
}

impl TablesOracle for CatalogTables {
    fn food_effect(&self, id: &str) -> Option<FoodEffect> {
        self.catalogs.foods.get(id).copied()
    }

    fn toy_effect(&self, id: &str) -> Option<ToyEffect> {
        self.catalogs.toys.get(id).copied()
    }

    fn cleaning_step(&self, id: &str) -> Option<CleaningStep> {
        self.catalogs.cleaning.get(id).cloned()
    }

    fn rest_cycle(&self, id: &str) -> Option<RestCycle> {
        self.catalogs.rest.get(id).copied()
    }
}

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    tables: Arc<CatalogTables>,
}

impl OracleManager {
    pub fn new(tables: Arc<CatalogTables>) -> Self {
        Self { tables }
    }

    /// Oracle manager over the built-in catalogs.
    pub fn builtin() -> Self {
        Self::new(Arc::new(CatalogTables::builtin()))
    }

    /// Builds a borrowed environment for pet-core execution.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::new(self.tables.as_ref())
    }

    pub fn tables(&self) -> &CatalogTables {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_tables_serve_builtin_entries() {
        let oracles = OracleManager::builtin();
        let env = oracles.as_game_env();

        assert!(env.tables().food_effect("kibble").is_some());
        assert!(env.tables().toy_effect("ball").is_some());
        assert!(env.tables().cleaning_step("bath").is_some());
        assert_eq!(
            env.tables().rest_cycle("nap").map(|c| c.duration_ms),
            Some(1_800_000)
        );
        assert!(env.tables().food_effect("gravel").is_none());
    }
}
