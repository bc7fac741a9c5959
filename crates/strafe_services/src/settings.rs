//! Settings management

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationSettings,
    pub window: WindowSettings,
    pub resources: ResourceSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// World capacity, fixed for the whole run.
    pub max_entities: usize,
    /// Enemy fighters the sandbox scatters at startup.
    pub enemy_count: u32,
    /// Seed for the deterministic scatter.
    pub rng_seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSettings {
    pub starting_gold: i64,
    pub accrual_amount: i64,
    pub accrual_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationSettings {
                max_entities: 1000,
                enemy_count: 6,
                rng_seed: 7,
            },
            window: WindowSettings {
                title: "Strafe".to_string(),
                width: 800,
                height: 600,
            },
            resources: ResourceSettings {
                starting_gold: 100,
                accrual_amount: 10,
                accrual_interval_ms: 1000,
            },
        }
    }
}

impl Settings {
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let settings = Settings::default();
        let text = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.simulation.max_entities, 1000);
        assert_eq!(parsed.window.width, 800);
        assert_eq!(parsed.resources.starting_gold, 100);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_or_default("/no/such/strafe/settings.json");
        assert_eq!(settings.simulation.max_entities, 1000);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let result: Result<Settings, _> =
            serde_json::from_str("{\"simulation\":").map_err(SettingsError::from);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut path = std::env::temp_dir();
        path.push(format!("strafe_settings_{}.json", std::process::id()));

        let mut settings = Settings::default();
        settings.simulation.enemy_count = 11;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.simulation.enemy_count, 11);

        let _ = std::fs::remove_file(&path);
    }
}
