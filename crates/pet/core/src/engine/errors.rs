//! Engine execution errors.

use crate::action::{GuardError, PetActionKind};

/// Which pipeline phase rejected the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl core::fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let phase = match self {
            TransitionPhase::PreValidate => "pre-validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post-validate",
        };
        f.write_str(phase)
    }
}

/// Error returned when an action fails to execute. State is untouched on
/// rejection: `apply` only runs after the guard passes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("{kind} rejected during {phase}: {source}")]
    Rejected {
        kind: PetActionKind,
        phase: TransitionPhase,
        #[source]
        source: GuardError,
    },
}

impl ExecuteError {
    /// The player-facing rejection message, without the phase prefix.
    pub fn player_message(&self) -> String {
        match self {
            ExecuteError::Rejected { source, .. } => source.to_string(),
        }
    }
}
