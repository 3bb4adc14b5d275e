//! Rest cycles: restore energy and mark the pet as sleeping.

use crate::action::guard::{self, PetActionKind};
use crate::action::{ActionTransition, ApplyOutcome, GuardError};
use crate::env::GameEnv;
use crate::state::GameState;

/// Cycle used when the player picks none.
pub const DEFAULT_CYCLE: &str = "sleep";

/// Put the pet down for a rest cycle from the catalog.
///
/// On success the sleeping flag is raised; the session layer schedules a
/// wake-up after a short real-time delay. An unknown cycle id is a silent
/// no-op and leaves the flag untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestAction {
    pub cycle_id: String,
}

impl RestAction {
    pub fn new(cycle_id: impl Into<String>) -> Self {
        Self {
            cycle_id: cycle_id.into(),
        }
    }
}

impl ActionTransition for RestAction {
    type Error = GuardError;
    type Result = ApplyOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match guard::transition_error(&state.stats, PetActionKind::Rest) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let Some(cycle) = env.tables().rest_cycle(&self.cycle_id) else {
            return Ok(ApplyOutcome::NoEffect);
        };

        state.stats = cycle.apply_to(&state.stats);
        state.flags.sleeping = true;
        Ok(ApplyOutcome::Applied)
    }
}
