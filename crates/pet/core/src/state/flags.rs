//! Session metadata: lifecycle timestamps, the game clock, and the
//! sleeping flag that suppresses decay.

/// Process/session flags. Timestamps are wall-clock milliseconds supplied
/// by the host; the game clock is accumulated in-game milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameFlags {
    pub first_visit: bool,
    pub tutorial_completed: bool,
    pub last_played_at_ms: u64,
    pub total_play_time_ms: u64,
    pub last_saved_at_ms: u64,
    pub game_clock_ms: u64,
    pub sound_enabled: bool,
    pub sleeping: bool,
}

impl GameFlags {
    /// Fresh-session flags anchored at the given wall-clock time.
    pub fn new(now_ms: u64) -> Self {
        Self {
            first_visit: true,
            tutorial_completed: false,
            last_played_at_ms: now_ms,
            total_play_time_ms: 0,
            last_saved_at_ms: now_ms,
            game_clock_ms: 0,
            sound_enabled: false,
            sleeping: false,
        }
    }

    /// Records a session heartbeat: accumulates elapsed play time and
    /// advances the last-played stamp.
    pub fn record_heartbeat(&mut self, now_ms: u64) {
        let elapsed = now_ms.saturating_sub(self.last_played_at_ms);
        self.total_play_time_ms += elapsed;
        self.last_played_at_ms = now_ms;
    }
}

impl Default for GameFlags {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_accumulates_play_time() {
        let mut flags = GameFlags::new(1_000);
        flags.record_heartbeat(61_000);
        assert_eq!(flags.total_play_time_ms, 60_000);
        assert_eq!(flags.last_played_at_ms, 61_000);

        flags.record_heartbeat(61_000);
        assert_eq!(flags.total_play_time_ms, 60_000);
    }

    #[test]
    fn heartbeat_ignores_clock_regression() {
        let mut flags = GameFlags::new(10_000);
        flags.record_heartbeat(5_000);
        assert_eq!(flags.total_play_time_ms, 0);
        assert_eq!(flags.last_played_at_ms, 5_000);
    }
}
