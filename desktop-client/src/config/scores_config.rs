use std::path::PathBuf;

use common::config::Validate;
use common::games::frog_catch::HIGH_SCORES_FILE_NAME;
use serde::{Deserialize, Serialize};

use super::resolve_next_to_executable;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScoresConfig {
    pub persist: bool,
    /// Relative paths are resolved against the executable's directory.
    pub location: String,
}

impl ScoresConfig {
    pub fn resolved_location(&self) -> PathBuf {
        let path = PathBuf::from(&self.location);
        if path.is_absolute() {
            path
        } else {
            resolve_next_to_executable(&self.location)
        }
    }
}

impl Validate for ScoresConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("scores location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            persist: true,
            location: HIGH_SCORES_FILE_NAME.to_string(),
        }
    }
}
