use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use log::{debug, info};
use rubik_core::DEFAULT_SIZE;
use serde::{Deserialize, Serialize};

/// Settings read from the TOML configuration file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cube size used when a command does not name one
    pub default_size: usize,
    /// Where relative save and load paths point
    pub save_directory: PathBuf,
    /// Print colored blocks instead of letters
    pub color: bool,
    /// Fixed seed for scrambles, for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_size: DEFAULT_SIZE,
            save_directory: dirs::home_dir()
                .unwrap_or_default()
                .join("rubikscubeSavedGames"),
            color: true,
            seed: None,
        }
    }
}

impl Config {
    /// Read the configuration, falling back to the defaults when the file does not exist
    pub fn load(path: &Path) -> color_eyre::Result<Config> {
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Config::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolve a save file name against the save directory. Absolute paths and paths that
    /// start with `.` are used as given.
    pub fn save_path(&self, file: &Path) -> PathBuf {
        if file.is_absolute() || file.starts_with(".") || file.starts_with("..") {
            file.to_owned()
        } else {
            self.save_directory.join(file)
        }
    }
}
