use crate::error::{ConfigError, Error};
use crate::geometry::Grid;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "SNAKE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "snake.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    /// Normal delay between two moves.
    pub move_interval_ms: u64,
    /// Delay while the boost key is held.
    pub boost_interval_ms: u64,
    /// Optional QOI image drawn under the board.
    pub background: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "snake".to_string(),
            width: 800,
            height: 600,
            cell_size: 20,
            move_interval_ms: 100,
            boost_interval_ms: 40,
            background: None,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let wrap = |source: ConfigError| Error::Config { path: path.to_path_buf(), source };
        let text = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        let mut settings = Self::from_json(&text).map_err(wrap)?;
        // Relative image paths are taken from the config file's folder
        if let (Some(bg), Some(dir)) = (settings.background.as_mut(), path.parent()) {
            if bg.is_relative() {
                *bg = dir.join(&*bg);
            }
        }
        Ok(settings)
    }

    /// `$SNAKE_CONFIG` if set, else `./snake.json` if it exists, else defaults.
    pub fn load() -> Result<Self, Error> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// An explicit path must exist; the fallback is only read when present.
    pub fn load_from(explicit: Option<&Path>, fallback: &Path) -> Result<Self, Error> {
        if let Some(path) = explicit {
            log::info!("loading settings from {}", path.display());
            return Self::from_file(path);
        }
        if fallback.exists() {
            log::info!("loading settings from {}", fallback.display());
            return Self::from_file(fallback);
        }
        log::info!("no {} found, using default settings", fallback.display());
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 || self.cell_size == 0 {
            return Err(ConfigError::Invalid("width, height and cell_size must be non-zero".into()));
        }
        let limit = i32::MAX as u32;
        if self.width > limit || self.height > limit || self.cell_size > limit {
            return Err(ConfigError::Invalid(format!(
                "{}x{} with {}px cells does not fit the {limit}px coordinate range",
                self.width, self.height, self.cell_size
            )));
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(ConfigError::Invalid(format!(
                "{}x{} is not a whole number of {}px cells",
                self.width, self.height, self.cell_size
            )));
        }
        if self.boost_interval_ms == 0 {
            return Err(ConfigError::Invalid("boost_interval_ms must be non-zero".into()));
        }
        if self.boost_interval_ms > self.move_interval_ms {
            log::warn!(
                "boost_interval_ms ({}) is slower than move_interval_ms ({})",
                self.boost_interval_ms,
                self.move_interval_ms
            );
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height, self.cell_size)
    }

    pub fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms)
    }

    pub fn boost_interval(&self) -> Duration {
        Duration::from_millis(self.boost_interval_ms)
    }
}
