use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::constants::{MDOC_DIR, MDOC_EXTENSION};
use super::error::ConfigError;

/// Structure representing the application configuration. Contains pathing and dose information
/// Configs are seralizable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub frames_path: PathBuf,
    pub dose_per_image: f64,
    pub mdoc_path: PathBuf,
}

impl Default for Config {
    /// Generate a new Config object. The frames path will be empty/invalid
    fn default() -> Self {
        Self {
            frames_path: PathBuf::from("None"),
            dose_per_image: 0.0,
            mdoc_path: PathBuf::from(MDOC_DIR),
        }
    }
}

impl Config {
    /// Create a config from an input directory and a dose, writing output to
    /// the default `mdoc` subdirectory
    pub fn new(frames_path: PathBuf, dose_per_image: f64) -> Self {
        Self {
            frames_path,
            dose_per_image,
            mdoc_path: PathBuf::from(MDOC_DIR),
        }
    }

    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Check if the frames directory exists
    pub fn does_frames_dir_exist(&self) -> bool {
        self.frames_path.exists()
    }

    /// Get the path to the output mdoc file for a given tilt-series basename
    pub fn get_mdoc_file_name(&self, basename: &str) -> PathBuf {
        self.mdoc_path.join(format!("{basename}{MDOC_EXTENSION}"))
    }
}
