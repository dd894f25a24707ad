use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::session::MatchSettings;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, MatchConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MatchConfig {
    pub match_settings: MatchSettings,
    /// Fixed seed for reproducible matches; `None` draws a fresh one.
    pub rng_seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref prefix) = self.log_prefix
            && prefix.is_empty()
        {
            return Err("log_prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_settings: MatchSettings::default(),
            rng_seed: None,
            log_prefix: None,
        }
    }
}
