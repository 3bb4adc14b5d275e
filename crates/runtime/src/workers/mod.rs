//! Background tasks internal to the crate.

mod session;
mod ticker;

pub(crate) use session::SessionWorker;
pub(crate) use ticker::spawn_tickers;

use tokio::sync::oneshot;

use pet_core::action::{Action, ActionResult};
use pet_core::state::GameState;

use crate::api::Result;

/// Commands processed by the session worker.
pub enum Command {
    /// Execute an action and report its result.
    Execute {
        action: Action,
        reply: oneshot::Sender<Result<ActionResult>>,
    },
    /// Execute a background action, fire-and-forget. Used by tickers.
    Tick { action: Action },
    /// Scheduled wake-up from a rest. Tagged with the generation of the
    /// rest that scheduled it; the worker drops a wake queued for an
    /// earlier rest so it cannot cut a newer rest short.
    AutoWake { generation: u64 },
    /// Query the current session state (read-only clone).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Persist a snapshot. Autosave passes no reply channel.
    Save {
        reply: Option<oneshot::Sender<Result<()>>>,
    },
}

/// Wall-clock milliseconds since the Unix epoch.
pub(crate) fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
