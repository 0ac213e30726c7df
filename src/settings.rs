//! Game settings and preferences
//!
//! Persisted as JSON next to the working directory. A missing or
//! unreadable file falls back to defaults; the sim itself never reads
//! these — they only shape how the session presents events.

use serde::{Deserialize, Serialize};

/// Presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Skip the damage background flash (accessibility)
    pub reduced_flash: bool,
    /// Show the FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
            reduced_flash: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Settings file name, relative to the working directory
    const FILE: &'static str = "sawjump_settings.json";

    /// Load settings, falling back to defaults when the file is absent or
    /// malformed.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Malformed settings file, using defaults: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Persist settings as pretty-printed JSON.
    pub fn save(&self) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(Self::FILE, json)
    }

    /// Effective sound-effect volume.
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_volumes_are_sane() {
        let settings = Settings::default();
        assert!(settings.effective_sfx_volume() > 0.0);
        assert!(settings.effective_sfx_volume() <= 1.0);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = Settings::default();
        settings.reduced_flash = true;
        settings.master_volume = 0.5;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(back.reduced_flash);
        assert_eq!(back.master_volume, 0.5);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(serde_json::from_str::<Settings>("{not json").is_err());
    }
}
