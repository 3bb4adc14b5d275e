//! Transition guard: per-action preconditions with human-readable
//! rejection reasons.
//!
//! The guard is evaluated strictly before any effect lookup or inventory
//! mutation. Rejections are values the caller presents to the player,
//! never faults.

use crate::config::{CLEAN_ENERGY_FLOOR, PLAY_ENERGY_FLOOR};
use crate::state::Stats;

/// Discriminant of the four guarded interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PetActionKind {
    Feed,
    Play,
    Clean,
    Rest,
}

/// Why the guard rejected an action. The `Display` strings are the exact
/// messages shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuardError {
    #[error("Your pet is too tired to play. Let them rest first.")]
    TooTiredToPlay,

    #[error("Your pet is too tired for cleaning. Let them rest first.")]
    TooTiredForCleaning,

    #[error("Cannot perform this action right now.")]
    NotAllowed,
}

/// Returns the rejection for this action against these stats, or `None`
/// when the action is allowed. Total: defined for every input.
pub fn transition_error(stats: &Stats, action: PetActionKind) -> Option<GuardError> {
    match action {
        PetActionKind::Feed | PetActionKind::Rest => None,
        PetActionKind::Play if stats.energy > PLAY_ENERGY_FLOOR => None,
        PetActionKind::Play => Some(GuardError::TooTiredToPlay),
        PetActionKind::Clean if stats.energy > CLEAN_ENERGY_FLOOR => None,
        PetActionKind::Clean => Some(GuardError::TooTiredForCleaning),
    }
}

/// True iff [`transition_error`] returns `None`.
pub fn is_valid_transition(stats: &Stats, action: PetActionKind) -> bool {
    transition_error(stats, action).is_none()
}
