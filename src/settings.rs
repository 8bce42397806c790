//! Settings for the native binary
//!
//! Stored as JSON. Game rules are compile-time constants in `consts` and are
//! deliberately not part of this file.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` picks one from the system clock
    pub seed: Option<u64>,
    /// Initial simulation speed multiplier (1 = real time)
    pub simulation_speed: i32,

    // === Headless run ===
    /// Simulated display refresh rate
    pub display_hz: f32,
    /// How long the headless run lasts, in simulated display seconds
    pub run_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            simulation_speed: 1,
            display_hz: 144.0,
            run_seconds: 30.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, missing fields take defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Invalid settings JSON: {}", e);
                None
            }
        }
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::info!("No settings at {} ({}), using defaults", path.display(), e),
        }

        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Configured seed, or one derived from the system clock
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Display frame time for the headless run; rates below 1 Hz (or not a
    /// number) fall back to the default rate
    pub fn frame_seconds(&self) -> f32 {
        let seconds = 1.0 / self.display_hz;
        if self.display_hz > 0.0 && seconds.is_finite() && seconds <= 1.0 {
            seconds
        } else {
            log::warn!(
                "Unusable display_hz {}, using {}",
                self.display_hz,
                Self::default().display_hz
            );
            1.0 / Self::default().display_hz
        }
    }

    /// Number of display frames in the headless run
    pub fn frame_count(&self) -> u64 {
        (self.run_seconds.max(0.0) / self.frame_seconds()).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.simulation_speed, 1);
        assert_eq!(settings.display_hz, 144.0);
    }

    #[test]
    fn test_invalid_json_is_none() {
        assert!(Settings::from_json("not json").is_none());
    }

    #[test]
    fn test_effective_seed() {
        let settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(settings.effective_seed(), 42);
    }

    #[test]
    fn test_frame_count() {
        let settings = Settings {
            display_hz: 60.0,
            run_seconds: 2.0,
            ..Default::default()
        };
        assert_eq!(settings.frame_count(), 120);

        let broken = Settings {
            display_hz: 0.0,
            run_seconds: 1.0,
            ..Default::default()
        };
        assert_eq!(broken.frame_count(), 144);
    }

    #[test]
    fn test_tiny_display_hz_falls_back() {
        let settings = Settings::from_json(r#"{ "display_hz": 1e-40, "run_seconds": 1.0 }"#).unwrap();
        let seconds = settings.frame_seconds();
        assert_eq!(seconds, 1.0 / 144.0);
        assert!(std::time::Duration::try_from_secs_f32(seconds).is_ok());
        assert_eq!(settings.frame_count(), 144);

        let slow = Settings {
            display_hz: 0.5,
            ..Default::default()
        };
        assert_eq!(slow.frame_seconds(), 1.0 / 144.0);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("simple_pong_settings_{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(1234),
            simulation_speed: 3,
            display_hz: 75.0,
            run_seconds: 5.0,
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_is_default() {
        let loaded = Settings::load(Path::new("/definitely/not/here/settings.json"));
        assert_eq!(loaded, Settings::default());
    }
}
