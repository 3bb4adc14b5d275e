//! The bounded stat vector describing pet well-being.
//!
//! All four fields live in `[STAT_MIN, STAT_MAX]` and are clamped on every
//! write. Mutation helpers return new vectors so callers can diff and
//! persist snapshots; nothing mutates in place outside the engine.

use crate::config::{CRITICAL_THRESHOLD, STAT_MAX, STAT_MIN, WARNING_THRESHOLD};

/// Clamps a raw stat value into the valid domain. Total and idempotent.
pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Identifies one field of the stat vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatKind {
    Hunger,
    Happiness,
    Cleanliness,
    Energy,
}

impl StatKind {
    /// All stats in the order the notification policy scans them.
    pub const ALL: [StatKind; 4] = [
        StatKind::Hunger,
        StatKind::Happiness,
        StatKind::Cleanliness,
        StatKind::Energy,
    ];

    /// Human-readable label for UI surfaces and notification text.
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Hunger => "Hunger",
            StatKind::Happiness => "Happiness",
            StatKind::Cleanliness => "Cleanliness",
            StatKind::Energy => "Energy",
        }
    }
}

/// The four bounded stats. Fields are independent at the storage level;
/// coupling between them exists only in the effect tables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub hunger: f32,
    pub happiness: f32,
    pub cleanliness: f32,
    pub energy: f32,
}

impl Stats {
    pub fn new(hunger: f32, happiness: f32, cleanliness: f32, energy: f32) -> Self {
        Self {
            hunger: clamp_stat(hunger),
            happiness: clamp_stat(happiness),
            cleanliness: clamp_stat(cleanliness),
            energy: clamp_stat(energy),
        }
    }

    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Hunger => self.hunger,
            StatKind::Happiness => self.happiness,
            StatKind::Cleanliness => self.cleanliness,
            StatKind::Energy => self.energy,
        }
    }

    /// Returns a new vector with `delta` added to one field, clamped.
    /// The other three fields pass through unchanged.
    pub fn with_delta(&self, kind: StatKind, delta: f32) -> Self {
        let mut next = *self;
        match kind {
            StatKind::Hunger => next.hunger = clamp_stat(next.hunger + delta),
            StatKind::Happiness => next.happiness = clamp_stat(next.happiness + delta),
            StatKind::Cleanliness => next.cleanliness = clamp_stat(next.cleanliness + delta),
            StatKind::Energy => next.energy = clamp_stat(next.energy + delta),
        }
        next
    }

    /// Applies a per-field delta set, clamping each field independently.
    pub fn apply(&self, rates: &DecayRates) -> Self {
        Self {
            hunger: clamp_stat(self.hunger + rates.hunger),
            happiness: clamp_stat(self.happiness + rates.happiness),
            cleanliness: clamp_stat(self.cleanliness + rates.cleanliness),
            energy: clamp_stat(self.energy + rates.energy),
        }
    }

    /// True when the stat has dropped below the warning threshold.
    pub fn is_low(&self, kind: StatKind) -> bool {
        self.get(kind) < WARNING_THRESHOLD
    }

    /// True when the stat has dropped below the critical threshold.
    pub fn is_critical(&self, kind: StatKind) -> bool {
        self.get(kind) < CRITICAL_THRESHOLD
    }
}

impl Default for Stats {
    /// A freshly adopted pet: well fed, happy, clean, rested.
    fn default() -> Self {
        Self {
            hunger: 80.0,
            happiness: 90.0,
            cleanliness: 85.0,
            energy: 75.0,
        }
    }
}

/// Per-tick deltas applied by the decay engine. Typically small negative
/// values; injectable so hosts can tune difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecayRates {
    pub hunger: f32,
    pub happiness: f32,
    pub cleanliness: f32,
    pub energy: f32,
}

impl DecayRates {
    pub fn new(hunger: f32, happiness: f32, cleanliness: f32, energy: f32) -> Self {
        Self {
            hunger,
            happiness,
            cleanliness,
            energy,
        }
    }
}
