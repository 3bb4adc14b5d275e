//! Feeding: consumes one unit of a food item and applies its effect.

use crate::action::guard::{self, PetActionKind};
use crate::action::{ActionTransition, ApplyOutcome, GuardError};
use crate::env::GameEnv;
use crate::state::GameState;

/// Feed the pet one unit of the identified food item.
///
/// The stat update and the inventory decrement commit together inside
/// `apply`; a missing item, zero quantity, or unknown effect id leaves
/// both untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedAction {
    pub food_id: String,
}

impl FeedAction {
    pub fn new(food_id: impl Into<String>) -> Self {
        Self {
            food_id: food_id.into(),
        }
    }
}

impl ActionTransition for FeedAction {
    type Error = GuardError;
    type Result = ApplyOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match guard::transition_error(&state.stats, PetActionKind::Feed) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let Some(effect) = env.tables().food_effect(&self.food_id) else {
            return Ok(ApplyOutcome::NoEffect);
        };
        if !state.inventory.usable_food(&self.food_id) {
            return Ok(ApplyOutcome::NoEffect);
        }

        // Both mutations commit together: consume cannot fail after the
        // usable_food check, and the effect application is total.
        state.inventory.consume(&self.food_id);
        state.stats = effect.apply_to(&state.stats);
        Ok(ApplyOutcome::Applied)
    }
}
