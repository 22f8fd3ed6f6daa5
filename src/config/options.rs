// src/config/options.rs
//
// User-tunable settings. Every field has a default, so a missing file or a
// partial file both work.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Carousel auto-advance period
    pub carousel_period_ms: u64,
    /// Count-up animation length
    pub count_up_ms: u64,
    /// Size of the featured rotation (first N catalog records)
    pub featured_count: usize,
    /// Optional JSON catalog replacing the embedded one
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel_period_ms: CAROUSEL_PERIOD_MS,
            count_up_ms: COUNT_UP_MS,
            featured_count: FEATURED_COUNT,
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn carousel_period(&self) -> Duration {
        Duration::from_millis(self.carousel_period_ms.max(1))
    }

    pub fn count_up_duration(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Load from the first settings file that exists; defaults otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_default_file() {
            Some(path) => {
                logd!("Settings: loading {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn find_default_file() -> Option<PathBuf> {
        SETTINGS_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
    }
}
