//! Repository contract for saving and loading session snapshots.

use crate::repository::Result;
use crate::repository::snapshot::SessionSnapshot;

/// Repository for session snapshot persistence.
///
/// Implementations store each snapshot record under its own key so a
/// single unreadable record never takes down the whole session.
pub trait SnapshotRepository: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    fn save(&self, snapshot: &SessionSnapshot) -> Result<()>;

    /// Load the stored snapshot. Records that are missing or unreadable
    /// come back as `None`; a fully absent store yields `Ok(None)`.
    fn load(&self) -> Result<Option<SessionSnapshot>>;

    /// Remove every stored record.
    fn clear(&self) -> Result<()>;
}
