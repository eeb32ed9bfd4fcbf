mod main_config;
mod scores_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{get_config_manager, resolve_next_to_executable, Config};
pub use scores_config::ScoresConfig;
