//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and the rules
//! engine so clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

use pet_core::engine::ExecuteError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The transition guard rejected a pet interaction. The inner error's
    /// message is the player-facing text.
    #[error(transparent)]
    Rejected(#[from] ExecuteError),

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
