use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Location;

/// Saved home location, the CLI stand-in for browser geolocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeLocation {
    /// Display name, usually the geocoded city.
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [home]
/// name = "Kyiv, Ukraine"
/// latitude = 50.45
/// longitude = 30.52
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub home: Option<HomeLocation>,
}

impl Config {
    /// The saved home location as a resolver-ready [`Location`].
    pub fn home_location(&self) -> Option<Location> {
        self.home.as_ref().map(|home| Location {
            latitude: home.latitude,
            longitude: home.longitude,
            name: home.name.clone(),
        })
    }

    pub fn set_home(&mut self, home: HomeLocation) {
        self.home = Some(home);
    }

    pub fn has_home(&self) -> bool {
        self.home.is_some()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_home() {
        let cfg = Config::default();
        assert!(!cfg.has_home());
        assert!(cfg.home_location().is_none());
    }

    #[test]
    fn set_home_makes_a_location_available() {
        let mut cfg = Config::default();
        cfg.set_home(HomeLocation {
            name: Some("Kyiv, Ukraine".to_string()),
            latitude: 50.45,
            longitude: 30.52,
        });

        let location = cfg.home_location().expect("home location must exist");
        assert_eq!(location.name.as_deref(), Some("Kyiv, Ukraine"));
        assert!((location.latitude - 50.45).abs() < f64::EPSILON);
        assert!((location.longitude - 30.52).abs() < f64::EPSILON);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_home(HomeLocation {
            name: None,
            latitude: 59.33,
            longitude: 18.07,
        });

        let serialized = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        let home = parsed.home.expect("home survives the round trip");
        assert!(home.name.is_none());
        assert!((home.latitude - 59.33).abs() < f64::EPSILON);
    }
}
