//! Effect table entries and the oracle that serves them.
//!
//! Every entry is a plain record of stat deltas keyed by a stable string
//! id. Fields an effect does not mention default to zero and pass the
//! corresponding stat through unchanged. Each entry knows how to apply
//! itself to a stat vector; application is pure and clamps every written
//! field.

use crate::state::stats::{Stats, clamp_stat};

/// Stat deltas applied by feeding one unit of a food item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodEffect {
    pub hunger: f32,
    pub happiness: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy: f32,
}

impl FoodEffect {
    /// Feeding never touches cleanliness.
    pub fn apply_to(&self, stats: &Stats) -> Stats {
        Stats {
            hunger: clamp_stat(stats.hunger + self.hunger),
            happiness: clamp_stat(stats.happiness + self.happiness),
            cleanliness: stats.cleanliness,
            energy: clamp_stat(stats.energy + self.energy),
        }
    }
}

/// Stat deltas applied by one play session.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToyEffect {
    pub happiness: f32,
    pub energy: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hunger: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cleanliness: f32,
}

impl ToyEffect {
    /// Effect used when playing without any toy, and as the fallback for a
    /// toy the catalog does not know.
    pub const BARE_HANDS: ToyEffect = ToyEffect {
        happiness: 10.0,
        energy: -8.0,
        hunger: -3.0,
        cleanliness: 0.0,
    };

    pub fn apply_to(&self, stats: &Stats) -> Stats {
        Stats {
            hunger: clamp_stat(stats.hunger + self.hunger),
            happiness: clamp_stat(stats.happiness + self.happiness),
            cleanliness: clamp_stat(stats.cleanliness + self.cleanliness),
            energy: clamp_stat(stats.energy + self.energy),
        }
    }
}

/// Stat deltas applied by one cleaning routine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleaningStep {
    pub name: String,
    pub cleanliness: f32,
    pub happiness: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy: f32,
}

impl CleaningStep {
    /// Cleaning never touches hunger.
    pub fn apply_to(&self, stats: &Stats) -> Stats {
        Stats {
            hunger: stats.hunger,
            happiness: clamp_stat(stats.happiness + self.happiness),
            cleanliness: clamp_stat(stats.cleanliness + self.cleanliness),
            energy: clamp_stat(stats.energy + self.energy),
        }
    }
}

/// Stat deltas and fictional duration of one rest cycle. The duration is
/// display data; the sleeping flag clears on the host's real-time delay.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestCycle {
    pub duration_ms: u64,
    pub energy: f32,
    pub hunger: f32,
}

impl RestCycle {
    /// Resting touches only energy and hunger.
    pub fn apply_to(&self, stats: &Stats) -> Stats {
        Stats {
            hunger: clamp_stat(stats.hunger + self.hunger),
            happiness: stats.happiness,
            cleanliness: stats.cleanliness,
            energy: clamp_stat(stats.energy + self.energy),
        }
    }
}

/// Serves effect table entries by id. Lookups returning `None` make the
/// corresponding action a silent no-op.
pub trait TablesOracle: Send + Sync {
    fn food_effect(&self, id: &str) -> Option<FoodEffect>;
    fn toy_effect(&self, id: &str) -> Option<ToyEffect>;
    fn cleaning_step(&self, id: &str) -> Option<CleaningStep>;
    fn rest_cycle(&self, id: &str) -> Option<RestCycle>;
}
