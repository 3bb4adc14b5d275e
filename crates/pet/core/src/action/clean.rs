//! Cleaning routines: catalog-driven, energy-gated.

use crate::action::guard::{self, PetActionKind};
use crate::action::{ActionTransition, ApplyOutcome, GuardError};
use crate::env::GameEnv;
use crate::state::GameState;

/// Routine used when the player picks none.
pub const DEFAULT_ROUTINE: &str = "bath";

/// Run a cleaning routine from the catalog.
///
/// An unknown routine id is a silent no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleanAction {
    pub routine_id: String,
}

impl CleanAction {
    pub fn new(routine_id: impl Into<String>) -> Self {
        Self {
            routine_id: routine_id.into(),
        }
    }
}

impl ActionTransition for CleanAction {
    type Error = GuardError;
    type Result = ApplyOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match guard::transition_error(&state.stats, PetActionKind::Clean) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let Some(step) = env.tables().cleaning_step(&self.routine_id) else {
            return Ok(ApplyOutcome::NoEffect);
        };

        state.stats = step.apply_to(&state.stats);
        Ok(ApplyOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CleaningStep, FoodEffect, RestCycle, TablesOracle, ToyEffect};
    use crate::state::Stats;

    struct TestTables;

    impl TablesOracle for TestTables {
        fn food_effect(&self, _id: &str) -> Option<FoodEffect> {
            None
        }
        fn toy_effect(&self, _id: &str) -> Option<ToyEffect> {
            None
        }
        fn cleaning_step(&self, id: &str) -> Option<CleaningStep> {
            (id == "bath").then_some(CleaningStep {
                name: "Bath".into(),
                cleanliness: 30.0,
                happiness: 5.0,
                energy: -5.0,
            })
        }
        fn rest_cycle(&self, _id: &str) -> Option<RestCycle> {
            None
        }
    }

    #[test]
    fn cleaning_applies_the_routine_effect() {
        let tables = TestTables;
        let env = GameEnv::new(&tables);
        let mut state = GameState::default();
        state.stats = Stats::new(50.0, 50.0, 50.0, 50.0);

        let outcome = CleanAction::new("bath").apply(&mut state, &env).unwrap();

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(state.stats.cleanliness, 80.0);
        assert_eq!(state.stats.happiness, 55.0);
        assert_eq!(state.stats.energy, 45.0);
        assert_eq!(state.stats.hunger, 50.0);
    }

    #[test]
    fn unknown_routine_is_a_silent_noop() {
        let tables = TestTables;
        let env = GameEnv::new(&tables);
        let mut state = GameState::default();
        let before = state.clone();

        let outcome = CleanAction::new("mud-bath").apply(&mut state, &env).unwrap();

        assert_eq!(outcome, ApplyOutcome::NoEffect);
        assert_eq!(state, before);
    }

    #[test]
    fn exhausted_pet_is_rejected_before_apply() {
        let tables = TestTables;
        let env = GameEnv::new(&tables);
        let mut state = GameState::default();
        state.stats = Stats::new(50.0, 50.0, 50.0, 5.0);

        let error = CleanAction::new("bath").pre_validate(&state, &env);
        assert_eq!(error, Err(GuardError::TooTiredForCleaning));
    }
}
