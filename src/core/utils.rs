use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::core::errors::BudgetError;

const DEFAULT_DIR_NAME: &str = ".budget_planner";
const HOME_ENV: &str = "BUDGET_PLANNER_HOME";
const DATA_FILE: &str = "budget_data.json";
const CONFIG_FILE: &str = "config.json";

/// Resolves where the planner keeps its data, config and charts.
pub struct PathResolver;

impl PathResolver {
    /// Returns `$BUDGET_PLANNER_HOME`, falling back to `~/.budget_planner`.
    pub fn base_dir() -> PathBuf {
        Self::resolve_base(None)
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        if let Some(path) = custom {
            return path;
        }
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn data_file_in(base: &Path) -> PathBuf {
        base.join(DATA_FILE)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    pub fn chart_dir_in(base: &Path) -> PathBuf {
        base.to_path_buf()
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), BudgetError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
