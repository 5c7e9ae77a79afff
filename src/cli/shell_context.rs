use std::path::PathBuf;

use crate::{
    config::{Config, ConfigManager},
    core::errors::CliError,
    ledger::LedgerState,
    report::ChartRenderer,
    storage::{JsonStore, StateStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub const SCRIPT_ENV: &'static str = "BUDGET_PLANNER_CLI_SCRIPT";

    pub fn from_env() -> Self {
        if std::env::var_os(Self::SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Everything one shell session works on. The ledger state is loaded once here
/// and handed explicitly to each operation.
pub struct ShellContext {
    pub state: LedgerState,
    pub store: JsonStore,
    pub config: Config,
    pub renderer: ChartRenderer,
}

impl ShellContext {
    pub fn new() -> Result<Self, CliError> {
        Self::from_manager(ConfigManager::new()?)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, CliError> {
        Self::from_manager(ConfigManager::with_base_dir(base)?)
    }

    fn from_manager(manager: ConfigManager) -> Result<Self, CliError> {
        let config = manager.load_or_init();
        let store = JsonStore::new(manager.data_file(&config));
        let state = store.load();
        let renderer = ChartRenderer::new(manager.chart_dir(), &config);
        tracing::debug!(
            config_file = %manager.path().display(),
            data_file = %store.path().display(),
            charts = %renderer.dir().display(),
            "shell context ready"
        );
        Ok(Self {
            state,
            store,
            config,
            renderer,
        })
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}
