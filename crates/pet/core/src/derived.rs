//! Derived qualitative categories: mood and day phase.
//!
//! Neither is stored; both are recomputed on read from the stat vector
//! and the accumulated game clock.

use crate::config::{
    CRITICAL_THRESHOLD, DAY_MS, EXCITED_THRESHOLD, HOUR_MS, WARNING_THRESHOLD,
};
use crate::state::Stats;

/// Qualitative pet mood derived from the stat vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mood {
    Happy,
    Sad,
    Hungry,
    Sleepy,
    Dirty,
    Excited,
}

/// Time-of-day category derived from the game clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayPhase {
    Dawn,
    Day,
    Dusk,
    Night,
}

/// Strict priority chain, first match wins. Hunger and energy crises
/// dominate over appearance and mood; the ordering is part of the rules
/// and must not be reordered.
pub fn calculate_mood(stats: &Stats) -> Mood {
    if stats.hunger < CRITICAL_THRESHOLD {
        return Mood::Hungry;
    }
    if stats.energy < CRITICAL_THRESHOLD {
        return Mood::Sleepy;
    }
    if stats.cleanliness < WARNING_THRESHOLD {
        return Mood::Dirty;
    }
    if stats.happiness < WARNING_THRESHOLD {
        return Mood::Sad;
    }
    if stats.happiness > EXCITED_THRESHOLD {
        return Mood::Excited;
    }
    Mood::Happy
}

/// Maps the accumulated game clock onto a phase of the 24-hour in-game
/// day. One in-game hour is 60,000 ms of game clock; the clock wraps
/// every 1,440,000 ms.
pub fn calculate_day_phase(game_clock_ms: u64) -> DayPhase {
    let hour = (game_clock_ms % DAY_MS) / HOUR_MS;
    match hour {
        5..8 => DayPhase::Dawn,
        8..17 => DayPhase::Day,
        17..20 => DayPhase::Dusk,
        _ => DayPhase::Night,
    }
}
