//! The engine: the single write path for session state.
//!
//! Every mutation, player interaction or bookkeeping tick, goes through
//! [`GameEngine::execute`]. The engine drives each action through the
//! pre-validate / apply / post-validate pipeline and maps the typed
//! result into a uniform [`ActionResult`].

mod errors;

pub use errors::{ExecuteError, TransitionPhase};

use crate::action::{
    Action, ActionResult, ActionTransition, PetAction, PetActionKind, SystemAction,
};
use crate::env::GameEnv;
use crate::state::GameState;

/// Owns the authoritative [`GameState`] and executes actions against it.
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replaces the entire state, e.g. after a snapshot restore.
    pub fn replace_state(&mut self, state: GameState) {
        self.state = state;
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Executes one action. Pet interactions can be rejected by the
    /// transition guard; system actions always succeed.
    pub fn execute(&mut self, env: &GameEnv<'_>, action: &Action) -> Result<ActionResult, ExecuteError> {
        match action {
            Action::Pet(pet) => self.execute_pet(env, pet),
            Action::System(system) => Ok(self.execute_system(env, system)),
        }
    }

    fn execute_pet(
        &mut self,
        env: &GameEnv<'_>,
        action: &PetAction,
    ) -> Result<ActionResult, ExecuteError> {
        let kind = action.kind();
        let outcome = match action {
            PetAction::Feed(feed) => drive(&mut self.state, env, feed, kind)?,
            PetAction::Play(play) => drive(&mut self.state, env, play, kind)?,
            PetAction::Clean(clean) => drive(&mut self.state, env, clean, kind)?,
            PetAction::Rest(rest) => drive(&mut self.state, env, rest, kind)?,
        };
        Ok(ActionResult::Pet { kind, outcome })
    }

    fn execute_system(&mut self, env: &GameEnv<'_>, action: &SystemAction) -> ActionResult {
        match action {
            SystemAction::DecayTick(tick) => {
                ActionResult::Decay(drive_infallible(&mut self.state, env, tick))
            }
            SystemAction::AdvanceClock(advance) => {
                drive_infallible(&mut self.state, env, advance);
                ActionResult::System
            }
            SystemAction::Heartbeat(beat) => {
                drive_infallible(&mut self.state, env, beat);
                ActionResult::System
            }
            SystemAction::MarkSaved(mark) => {
                drive_infallible(&mut self.state, env, mark);
                ActionResult::System
            }
            SystemAction::ToggleSound(toggle) => {
                drive_infallible(&mut self.state, env, toggle);
                ActionResult::System
            }
            SystemAction::CompleteTutorial(complete) => {
                drive_infallible(&mut self.state, env, complete);
                ActionResult::System
            }
            SystemAction::WakeUp(wake) => {
                drive_infallible(&mut self.state, env, wake);
                ActionResult::System
            }
            SystemAction::DismissNotification(dismiss) => {
                drive_infallible(&mut self.state, env, dismiss);
                ActionResult::System
            }
            SystemAction::CheckNotify(check) => {
                ActionResult::Notifications(drive_infallible(&mut self.state, env, check))
            }
            SystemAction::SweepNotifications(sweep) => {
                ActionResult::Swept(drive_infallible(&mut self.state, env, sweep))
            }
            SystemAction::ChangeScene(change) => {
                drive_infallible(&mut self.state, env, change);
                ActionResult::System
            }
        }
    }
}

/// Runs the three-phase pipeline for a guarded action, tagging any
/// rejection with the phase that produced it.
fn drive<T>(
    state: &mut GameState,
    env: &GameEnv<'_>,
    transition: &T,
    kind: PetActionKind,
) -> Result<T::Result, ExecuteError>
where
    T: ActionTransition<Error = crate::action::GuardError>,
{
    let reject = |phase| move |source| ExecuteError::Rejected { kind, phase, source };

    transition
        .pre_validate(state, env)
        .map_err(reject(TransitionPhase::PreValidate))?;
    let result = transition
        .apply(state, env)
        .map_err(reject(TransitionPhase::Apply))?;
    transition
        .post_validate(state, env)
        .map_err(reject(TransitionPhase::PostValidate))?;
    Ok(result)
}

/// Runs the pipeline for an action that cannot fail.
fn drive_infallible<T>(state: &mut GameState, env: &GameEnv<'_>, transition: &T) -> T::Result
where
    T: ActionTransition<Error = core::convert::Infallible>,
{
    let result = match transition.pre_validate(state, env) {
        Ok(()) => match transition.apply(state, env) {
            Ok(result) => result,
            Err(never) => match never {},
        },
        Err(never) => match never {},
    };
    match transition.post_validate(state, env) {
        Ok(()) => result,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ApplyOutcome, GuardError, SystemAction, system::DecayTickAction};
    use crate::env::{CleaningStep, FoodEffect, RestCycle, TablesOracle, ToyEffect};
    use crate::state::{DecayRates, InventoryItem, InventoryState, ItemCategory, Stats};

    struct Tables;

    impl TablesOracle for Tables {
        fn food_effect(&self, id: &str) -> Option<FoodEffect> {
            (id == "kibble").then_some(FoodEffect {
                hunger: 20.0,
                happiness: 5.0,
                energy: 0.0,
            })
        }
        fn toy_effect(&self, _id: &str) -> Option<ToyEffect> {
            None
        }
        fn cleaning_step(&self, _id: &str) -> Option<CleaningStep> {
            None
        }
        fn rest_cycle(&self, id: &str) -> Option<RestCycle> {
            (id == "sleep").then_some(RestCycle {
                duration_ms: 28_800_000,
                energy: 50.0,
                hunger: -15.0,
            })
        }
    }

    fn engine() -> GameEngine {
        let mut state = GameState::default();
        state.stats = Stats::new(50.0, 50.0, 50.0, 50.0);
        state.inventory = InventoryState::new(vec![InventoryItem::new(
            "kibble",
            "Dog Kibble",
            "🍖",
            ItemCategory::Food,
            1,
        )]);
        GameEngine::new(state)
    }

    #[test]
    fn feed_runs_end_to_end() {
        let tables = Tables;
        let env = GameEnv::new(&tables);
        let mut engine = engine();

        let result = engine.execute(&env, &Action::feed("kibble")).unwrap();
        assert_eq!(
            result,
            ActionResult::Pet {
                kind: PetActionKind::Feed,
                outcome: ApplyOutcome::Applied,
            }
        );
        assert_eq!(engine.state().stats.hunger, 70.0);
        assert_eq!(engine.state().inventory.get("kibble").unwrap().quantity, 0);
    }

    #[test]
    fn rejection_carries_kind_phase_and_message() {
        let tables = Tables;
        let env = GameEnv::new(&tables);
        let mut engine = engine();
        let mut state = engine.state().clone();
        state.stats = Stats::new(50.0, 50.0, 50.0, 4.0);
        engine.replace_state(state);
        let before = engine.state().clone();

        let error = engine.execute(&env, &Action::play(None)).unwrap_err();
        assert_eq!(
            error,
            ExecuteError::Rejected {
                kind: PetActionKind::Play,
                phase: TransitionPhase::PreValidate,
                source: GuardError::TooTiredToPlay,
            }
        );
        assert_eq!(
            error.player_message(),
            "Your pet is too tired to play. Let them rest first."
        );
        // Rejected actions leave state untouched.
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn system_actions_never_fail() {
        let tables = Tables;
        let env = GameEnv::new(&tables);
        let mut engine = engine();

        let tick = Action::System(SystemAction::DecayTick(DecayTickAction {
            rates: DecayRates::new(-1.0, -0.5, -0.3, -0.2),
        }));
        let result = engine.execute(&env, &tick).unwrap();
        assert_eq!(result, ActionResult::Decay(ApplyOutcome::Applied));
    }

    #[test]
    fn rest_then_decay_is_suppressed_until_wake() {
        let tables = Tables;
        let env = GameEnv::new(&tables);
        let mut engine = engine();

        engine.execute(&env, &Action::rest(None)).unwrap();
        assert!(engine.state().flags.sleeping);
        let rested = engine.state().stats;

        let tick = Action::System(SystemAction::DecayTick(DecayTickAction {
            rates: DecayRates::new(-1.0, -0.5, -0.3, -0.2),
        }));
        let result = engine.execute(&env, &tick).unwrap();
        assert_eq!(result, ActionResult::Decay(ApplyOutcome::NoEffect));
        assert_eq!(engine.state().stats, rested);

        let wake = Action::System(SystemAction::WakeUp(crate::action::WakeUpAction));
        engine.execute(&env, &wake).unwrap();
        assert!(!engine.state().flags.sleeping);

        let result = engine.execute(&env, &tick).unwrap();
        assert_eq!(result, ActionResult::Decay(ApplyOutcome::Applied));
    }
}
