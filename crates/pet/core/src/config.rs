//! Shared rule constants and tunable parameters.
//!
//! Thresholds are shared between mood derivation, the transition guard,
//! and the notification policy so the three never drift apart.

/// Lower bound of every stat value.
pub const STAT_MIN: f32 = 0.0;
/// Upper bound of every stat value.
pub const STAT_MAX: f32 = 100.0;

/// Below this a stat is considered low (warning notifications, Sad/Dirty moods).
pub const WARNING_THRESHOLD: f32 = 30.0;
/// Below this a stat is in crisis (critical notifications, Hungry/Sleepy moods).
pub const CRITICAL_THRESHOLD: f32 = 10.0;
/// Above this happiness the pet is Excited.
pub const EXCITED_THRESHOLD: f32 = 90.0;

/// One in-game hour of accumulated game clock.
pub const HOUR_MS: u64 = 60_000;
/// One in-game day (24 in-game hours).
pub const DAY_MS: u64 = 24 * HOUR_MS;

/// Minimum energy (exclusive) required to play.
pub const PLAY_ENERGY_FLOOR: f32 = 10.0;
/// Minimum energy (exclusive) required for cleaning.
pub const CLEAN_ENERGY_FLOOR: f32 = 5.0;

/// Window within which a second threshold notification for the same stat
/// is suppressed.
pub const NOTIFY_DEDUP_WINDOW_MS: u64 = 60_000;
/// Dismissed notifications older than this are removed by the sweep.
pub const NOTIFICATION_RETENTION_MS: u64 = 300_000;
