//! Threshold-crossing notifications and their retention bookkeeping.
//!
//! The policy itself (which stat crosses which threshold, dedup window)
//! lives in the `CheckNotify` system action; this module owns the data
//! and the collection invariants.

use crate::config::{NOTIFICATION_RETENTION_MS, NOTIFY_DEDUP_WINDOW_MS};
use crate::state::stats::StatKind;

/// Monotonic notification identifier, never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationId(pub u64);

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Info,
    Success,
    Warning,
    Critical,
}

/// A single alert raised by the notification policy. Dismissal is an
/// explicit external action; the policy never auto-dismisses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub message: String,
    pub stat: Option<StatKind>,
    pub created_at_ms: u64,
    pub dismissed: bool,
}

impl Notification {
    /// Message text for a stat crossing the warning or critical threshold.
    pub fn threshold_message(stat: StatKind, severity: Severity) -> String {
        match severity {
            Severity::Critical => format!("{} is critically low!", stat.label()),
            _ => format!("{} is getting low.", stat.label()),
        }
    }
}

/// The session notification list plus its id allocator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationState {
    pub entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the state from persisted entries, restoring the id
    /// allocator past the highest persisted id.
    pub fn from_entries(entries: Vec<Notification>) -> Self {
        let next_id = entries.iter().map(|n| n.id.0 + 1).max().unwrap_or(0);
        Self { entries, next_id }
    }

    fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a new undismissed notification and returns a clone of it.
    pub fn raise(
        &mut self,
        severity: Severity,
        message: String,
        stat: Option<StatKind>,
        now_ms: u64,
    ) -> Notification {
        let notification = Notification {
            id: self.allocate_id(),
            severity,
            message,
            stat,
            created_at_ms: now_ms,
            dismissed: false,
        };
        self.entries.push(notification.clone());
        notification
    }

    /// True when an undismissed notification for `stat` was created within
    /// the dedup window ending at `now_ms`.
    pub fn recently_raised(&self, stat: StatKind, now_ms: u64) -> bool {
        self.entries.iter().any(|n| {
            !n.dismissed
                && n.stat == Some(stat)
                && now_ms.saturating_sub(n.created_at_ms) < NOTIFY_DEDUP_WINDOW_MS
        })
    }

    /// Marks a notification dismissed. Unknown ids are a silent no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                entry.dismissed = true;
                true
            }
            None => false,
        }
    }

    /// Removes notifications that are both dismissed and older than the
    /// retention window. Returns how many were removed.
    pub fn sweep(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| {
            !n.dismissed || now_ms.saturating_sub(n.created_at_ms) < NOTIFICATION_RETENTION_MS
        });
        before - self.entries.len()
    }
}
