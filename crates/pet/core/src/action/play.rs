//! Playing: optional toy, energy-gated.

use crate::action::guard::{self, PetActionKind};
use crate::action::{ActionTransition, ApplyOutcome, GuardError};
use crate::env::{GameEnv, ToyEffect};
use crate::state::GameState;

/// Id of the toy used when the player picks none.
const DEFAULT_TOY: &str = "ball";

/// Play with the pet, optionally with a toy from the inventory.
///
/// No toy id means bare-hands play (the default toy's effect when the
/// catalog has one). A toy id that is not in the inventory is a silent
/// no-op; a toy in the inventory but missing from the catalog falls back
/// to the bare-hands effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayAction {
    pub toy_id: Option<String>,
}

impl PlayAction {
    pub fn new(toy_id: Option<String>) -> Self {
        Self { toy_id }
    }
}

impl ActionTransition for PlayAction {
    type Error = GuardError;
    type Result = ApplyOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match guard::transition_error(&state.stats, PetActionKind::Play) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let effect = match &self.toy_id {
            Some(toy_id) => {
                if !state.inventory.has_toy(toy_id) {
                    return Ok(ApplyOutcome::NoEffect);
                }
                env.tables()
                    .toy_effect(toy_id)
                    .unwrap_or(ToyEffect::BARE_HANDS)
            }
            None => env
                .tables()
                .toy_effect(DEFAULT_TOY)
                .unwrap_or(ToyEffect::BARE_HANDS),
        };

        state.stats = effect.apply_to(&state.stats);
        Ok(ApplyOutcome::Applied)
    }
}
