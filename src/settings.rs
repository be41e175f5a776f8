//! Driver settings
//!
//! Controls how the headless driver feeds the simulation. Game rules are
//! fixed in `consts`; nothing here changes how the world behaves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Headless driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated time between ticks (milliseconds)
    pub tick_interval_ms: u64,

    // === Demo pilot ===
    /// Seed for the pilot's event stream
    pub seed: u64,
    /// Total events fed to the reducer
    pub events: usize,
    /// Probability that an event is a move rather than a tick (0.0 - 1.0)
    pub move_chance: f64,
    /// Press restart automatically after a game over
    pub auto_restart: bool,

    // === Output ===
    /// Print every snapshot as a JSON line
    pub emit_snapshots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,

            seed: 0x5EED,
            events: 2_000,
            move_chance: 0.25,
            auto_restart: true,

            emit_snapshots: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.move_chance = settings.move_chance.clamp(0.0, 1.0);
        if settings.tick_interval_ms == 0 {
            log::warn!("tick_interval_ms must be positive, using {TICK_INTERVAL_MS}");
            settings.tick_interval_ms = TICK_INTERVAL_MS;
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Simulated seconds covered by the given number of ticks
    pub fn simulated_secs(&self, ticks: u64) -> f64 {
        (ticks * self.tick_interval_ms) as f64 / 1000.0
    }
}
