//! Built-in effect catalogs.
//!
//! Content is keyed by stable string ids and consumed by the runtime's
//! oracle; nothing here appears in session state. `builtin()` is the
//! reference data set; file loaders overlay or replace individual tables.

use std::collections::BTreeMap;

use pet_core::env::{CleaningStep, FoodEffect, RestCycle, ToyEffect};

/// All four effect tables for one pet breed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalogs {
    pub foods: BTreeMap<String, FoodEffect>,
    pub toys: BTreeMap<String, ToyEffect>,
    pub cleaning: BTreeMap<String, CleaningStep>,
    pub rest: BTreeMap<String, RestCycle>,
}

impl Catalogs {
    /// The built-in catalogs. Ids referenced by the rules' defaults
    /// ("ball", "bath", "sleep") are always present here.
    pub fn builtin() -> Self {
        let mut foods = BTreeMap::new();
        foods.insert(
            "kibble".to_owned(),
            FoodEffect {
                hunger: 20.0,
                happiness: 5.0,
                energy: 0.0,
            },
        );
        foods.insert(
            "premium-food".to_owned(),
            FoodEffect {
                hunger: 30.0,
                happiness: 10.0,
                energy: 5.0,
            },
        );
        foods.insert(
            "treat".to_owned(),
            FoodEffect {
                hunger: 10.0,
                happiness: 15.0,
                energy: 0.0,
            },
        );
        foods.insert(
            "healthy-meal".to_owned(),
            FoodEffect {
                hunger: 25.0,
                happiness: 8.0,
                energy: 10.0,
            },
        );

        let mut toys = BTreeMap::new();
        toys.insert(
            "ball".to_owned(),
            ToyEffect {
                happiness: 15.0,
                energy: -10.0,
                hunger: -5.0,
                cleanliness: 0.0,
            },
        );
        toys.insert(
            "chew-toy".to_owned(),
            ToyEffect {
                happiness: 12.0,
                energy: -5.0,
                hunger: -3.0,
                cleanliness: 0.0,
            },
        );
        toys.insert(
            "frisbee".to_owned(),
            ToyEffect {
                happiness: 20.0,
                energy: -15.0,
                hunger: -8.0,
                cleanliness: 0.0,
            },
        );
        toys.insert(
            "plush-toy".to_owned(),
            ToyEffect {
                happiness: 10.0,
                energy: -3.0,
                hunger: 0.0,
                cleanliness: 0.0,
            },
        );

        let mut cleaning = BTreeMap::new();
        cleaning.insert(
            "bath".to_owned(),
            CleaningStep {
                name: "Bath".to_owned(),
                cleanliness: 30.0,
                happiness: 5.0,
                energy: -5.0,
            },
        );
        cleaning.insert(
            "groom".to_owned(),
            CleaningStep {
                name: "Grooming".to_owned(),
                cleanliness: 20.0,
                happiness: 10.0,
                energy: 0.0,
            },
        );
        cleaning.insert(
            "quick-clean".to_owned(),
            CleaningStep {
                name: "Quick Clean".to_owned(),
                cleanliness: 15.0,
                happiness: 3.0,
                energy: 0.0,
            },
        );
        cleaning.insert(
            "full-spa".to_owned(),
            CleaningStep {
                name: "Full Spa".to_owned(),
                cleanliness: 50.0,
                happiness: 15.0,
                energy: -10.0,
            },
        );

        let mut rest = BTreeMap::new();
        rest.insert(
            "nap".to_owned(),
            RestCycle {
                duration_ms: 1_800_000,
                energy: 25.0,
                hunger: -5.0,
            },
        );
        rest.insert(
            "sleep".to_owned(),
            RestCycle {
                duration_ms: 28_800_000,
                energy: 50.0,
                hunger: -15.0,
            },
        );
        rest.insert(
            "power-nap".to_owned(),
            RestCycle {
                duration_ms: 900_000,
                energy: 15.0,
                hunger: -2.0,
            },
        );

        Self {
            foods,
            toys,
            cleaning,
            rest,
        }
    }

    /// Structural validation for loaded catalogs: no empty tables, the
    /// default ids present, sane effect signs, and rest cycles with a
    /// positive duration.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.foods.is_empty()
            || self.toys.is_empty()
            || self.cleaning.is_empty()
            || self.rest.is_empty()
        {
            return Err(CatalogError::EmptyTable);
        }
        if !self.toys.contains_key("ball") {
            return Err(CatalogError::MissingDefault { id: "ball" });
        }
        if !self.cleaning.contains_key("bath") {
            return Err(CatalogError::MissingDefault { id: "bath" });
        }
        if !self.rest.contains_key("sleep") {
            return Err(CatalogError::MissingDefault { id: "sleep" });
        }
        if let Some((id, _)) = self.rest.iter().find(|(_, cycle)| cycle.duration_ms == 0) {
            return Err(CatalogError::ZeroDuration { id: id.clone() });
        }
        if let Some((id, _)) = self.cleaning.iter().find(|(_, step)| step.cleanliness <= 0.0) {
            return Err(CatalogError::NonPositiveEffect {
                table: "cleaning",
                id: id.clone(),
            });
        }
        if let Some((id, _)) = self.rest.iter().find(|(_, cycle)| cycle.energy <= 0.0) {
            return Err(CatalogError::NonPositiveEffect {
                table: "rest",
                id: id.clone(),
            });
        }
        Ok(())
    }
}

/// Validation failure for a loaded catalog set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has an empty effect table")]
    EmptyTable,

    #[error("catalog is missing the default entry '{id}'")]
    MissingDefault { id: &'static str },

    #[error("rest cycle '{id}' has a zero duration")]
    ZeroDuration { id: String },

    #[error("{table} entry '{id}' has a non-positive primary effect")]
    NonPositiveEffect { table: &'static str, id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs_validate() {
        let catalogs = Catalogs::builtin();
        assert!(catalogs.validate().is_ok());
        assert_eq!(catalogs.foods.len(), 4);
        assert_eq!(catalogs.toys.len(), 4);
        assert_eq!(catalogs.cleaning.len(), 4);
        assert_eq!(catalogs.rest.len(), 3);
    }

    #[test]
    fn builtin_contains_the_rule_defaults() {
        let catalogs = Catalogs::builtin();
        assert!(catalogs.toys.contains_key("ball"));
        assert!(catalogs.cleaning.contains_key("bath"));
        assert!(catalogs.rest.contains_key("sleep"));
    }

    #[test]
    fn validation_rejects_empty_tables() {
        let mut catalogs = Catalogs::builtin();
        catalogs.foods.clear();
        assert_eq!(catalogs.validate(), Err(CatalogError::EmptyTable));
    }

    #[test]
    fn validation_rejects_zero_duration_cycles() {
        let mut catalogs = Catalogs::builtin();
        if let Some(cycle) = catalogs.rest.get_mut("nap") {
            cycle.duration_ms = 0;
        }
        assert_eq!(
            catalogs.validate(),
            Err(CatalogError::ZeroDuration { id: "nap".into() })
        );
    }

    #[test]
    fn validation_rejects_a_draining_rest_cycle() {
        let mut catalogs = Catalogs::builtin();
        if let Some(cycle) = catalogs.rest.get_mut("nap") {
            cycle.energy = -5.0;
        }
        assert_eq!(
            catalogs.validate(),
            Err(CatalogError::NonPositiveEffect {
                table: "rest",
                id: "nap".into(),
            })
        );
    }
}
