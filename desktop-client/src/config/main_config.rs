use std::path::PathBuf;

use common::config::Validate;
use common::games::frog_catch::FrogCatchSettings;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, ScoresConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "frog_catch_config.yaml";

pub fn resolve_next_to_executable(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(resolve_next_to_executable(CONFIG_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: FrogCatchSettings,
    #[serde(default)]
    pub scores: ScoresConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.scores.validate()?;
        Ok(())
    }
}
