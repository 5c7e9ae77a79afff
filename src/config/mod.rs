//! User preferences stored next to the ledger data.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::{
    errors::BudgetError,
    utils::{ensure_dir, PathResolver},
};
use crate::currency::DEFAULT_SYMBOL;

const DEFAULT_CHART_WIDTH: u32 = 800;
const DEFAULT_CHART_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub chart_width: u32,
    pub chart_height: u32,
    /// Overrides the data file location; relative paths resolve against the base dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_SYMBOL.into(),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            data_file: None,
        }
    }
}

impl Config {
    /// Chart dimensions, never smaller than something readable.
    pub fn chart_size(&self) -> (u32, u32) {
        (self.chart_width.max(200), self.chart_height.max(150))
    }
}

/// Loads and saves [`Config`] and knows where the planner's files live.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
            base,
        })
    }

    /// Returns the stored config, or defaults when it is absent or malformed.
    pub fn load(&self) -> Config {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Config::default(),
        };
        match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring malformed config");
                Config::default()
            }
        }
    }

    /// Like [`ConfigManager::load`], but writes the defaults out first when no
    /// config file exists yet, so there is a file to edit.
    pub fn load_or_init(&self) -> Config {
        if !self.path.exists() {
            let defaults = Config::default();
            match self.save(&defaults) {
                Ok(()) => tracing::info!(path = %self.path.display(), "wrote default config"),
                Err(err) => tracing::warn!(error = %err, "could not write default config"),
            }
            return defaults;
        }
        self.load()
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        ensure_dir(&self.base)?;
        let json = serde_json::to_string_pretty(config)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_file(&self, config: &Config) -> PathBuf {
        match &config.data_file {
            Some(custom) if custom.is_absolute() => custom.clone(),
            Some(custom) => self.base.join(custom),
            None => PathResolver::data_file_in(&self.base),
        }
    }

    pub fn chart_dir(&self) -> PathBuf {
        PathResolver::chart_dir_in(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_yields_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load();
        assert_eq!(config, Config::default());
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            currency_symbol: "$".into(),
            chart_width: 1024,
            ..Config::default()
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load(), config);
    }

    #[test]
    fn first_load_writes_default_file_once() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();

        assert_eq!(manager.load_or_init(), Config::default());
        assert!(manager.path().exists());

        fs::write(manager.path(), r#"{ "currency_symbol": "$" }"#).unwrap();
        assert_eq!(manager.load_or_init().currency_symbol, "$");
    }

    #[test]
    fn malformed_config_is_not_overwritten() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{ not json").unwrap();

        assert_eq!(manager.load_or_init(), Config::default());
        assert_eq!(fs::read_to_string(manager.path()).unwrap(), "{ not json");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "currency_symbol": "€" }"#).unwrap();
        let config = manager.load();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.chart_width, 800);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{ not json").unwrap();
        assert_eq!(manager.load(), Config::default());
    }

    #[test]
    fn data_file_override_resolves_against_base() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            data_file: Some(PathBuf::from("ledger.json")),
            ..Config::default()
        };
        assert_eq!(manager.data_file(&config), temp.path().join("ledger.json"));
        assert_eq!(
            manager.data_file(&Config::default()),
            temp.path().join("budget_data.json")
        );
    }
}
