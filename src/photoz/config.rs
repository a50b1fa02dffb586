use crate::error::{PhotozError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CAPACITY: usize = 100;

/// Configuration for photoz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotozConfig {
    /// Maximum number of photos the catalog may hold
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for PhotozConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl PhotozConfig {
    pub const KEYS: &'static [&'static str] = &["capacity"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhotozError::Io)?;
        let config: PhotozConfig =
            serde_json::from_str(&content).map_err(PhotozError::Serialization)?;
        if config.capacity == 0 {
            return Err(PhotozError::InvalidCapacity(0));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PhotozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhotozError::Serialization)?;
        fs::write(config_path, content).map_err(PhotozError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "capacity" => Some(self.capacity.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "capacity" => {
                let capacity: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid capacity: {}", value))?;
                if capacity == 0 {
                    return Err("Capacity must be at least 1".to_string());
                }
                self.capacity = capacity;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
