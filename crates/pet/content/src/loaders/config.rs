//! Session settings loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Per-stat decay deltas applied on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecaySettings {
    pub enabled: bool,
    pub interval_ms: u64,
    pub hunger: f32,
    pub happiness: f32,
    pub cleanliness: f32,
    pub energy: f32,
}

impl Default for DecaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 5_000,
            hunger: -1.0,
            happiness: -0.5,
            cleanliness: -0.3,
            energy: -0.2,
        }
    }
}

/// Cadences of the background tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// How often the game clock advances, and by how much per tick.
    pub clock_tick_ms: u64,
    pub clock_step_ms: u64,
    pub heartbeat_ms: u64,
    pub autosave_ms: u64,
    pub notification_sweep_ms: u64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            clock_tick_ms: 60_000,
            clock_step_ms: 60_000,
            heartbeat_ms: 60_000,
            autosave_ms: 120_000,
            notification_sweep_ms: 300_000,
        }
    }
}

/// Tunable session parameters loaded from TOML. Every field has a
/// default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub decay: DecaySettings,
    pub timers: TimerSettings,
    /// Real-time delay before a resting pet wakes automatically.
    pub rest_wake_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            decay: DecaySettings::default(),
            timers: TimerSettings::default(),
            rest_wake_delay_ms: 3_000,
        }
    }
}

/// Loader for session settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<SessionSettings> {
        let content = read_file(path)?;
        let settings: SessionSettings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_loads_the_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"").unwrap();

        let settings = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(settings, SessionSettings::default());
        assert!(settings.decay.enabled);
        assert_eq!(settings.decay.interval_ms, 5_000);
        assert_eq!(settings.timers.autosave_ms, 120_000);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
rest_wake_delay_ms = 4000

[decay]
interval_ms = 1000
hunger = -2.0
"#,
        )
        .unwrap();

        let settings = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(settings.decay.interval_ms, 1_000);
        assert_eq!(settings.decay.hunger, -2.0);
        // Unnamed decay fields keep their defaults.
        assert_eq!(settings.decay.happiness, -0.5);
        assert_eq!(settings.timers.clock_tick_ms, 60_000);
        assert_eq!(settings.rest_wake_delay_ms, 4_000);
    }
}
