use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const SESSION_DURATION_SECS: u32 = 30;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
pub const SPAWN_INTERVAL_MS: u64 = 1500;
pub const FLY_LIFETIME_MS: u64 = 4000;
pub const CATCH_GRACE_MS: u64 = 400;
pub const CATCH_REWARD: u32 = 10;
pub const FLY_SIZE: f32 = 60.0;

pub const HIGH_SCORE_LIMIT: usize = 10;
pub const HIGH_SCORES_FILE_NAME: &str = "frog_game_scores.yaml";

const MAX_SESSION_DURATION_SECS: u32 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrogCatchSettings {
    pub session_duration_secs: u32,
    pub countdown_interval_ms: u64,
    pub spawn_interval_ms: u64,
    pub fly_lifetime_ms: u64,
    pub catch_grace_ms: u64,
    pub catch_reward: u32,
    pub fly_size: f32,
}

impl FrogCatchSettings {
    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn fly_lifetime(&self) -> Duration {
        Duration::from_millis(self.fly_lifetime_ms)
    }

    pub fn catch_grace(&self) -> Duration {
        Duration::from_millis(self.catch_grace_ms)
    }
}

impl Default for FrogCatchSettings {
    fn default() -> Self {
        Self {
            session_duration_secs: SESSION_DURATION_SECS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            fly_lifetime_ms: FLY_LIFETIME_MS,
            catch_grace_ms: CATCH_GRACE_MS,
            catch_reward: CATCH_REWARD,
            fly_size: FLY_SIZE,
        }
    }
}

impl Validate for FrogCatchSettings {
    fn validate(&self) -> Result<(), String> {
        if self.session_duration_secs == 0 || self.session_duration_secs > MAX_SESSION_DURATION_SECS {
            return Err(format!(
                "Session duration must be between 1 and {} seconds, got {}",
                MAX_SESSION_DURATION_SECS, self.session_duration_secs
            ));
        }
        let intervals = [
            ("Countdown interval", self.countdown_interval_ms),
            ("Spawn interval", self.spawn_interval_ms),
            ("Fly lifetime", self.fly_lifetime_ms),
            ("Catch grace period", self.catch_grace_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(format!("{} must be positive", name));
            }
        }
        if self.catch_reward == 0 {
            return Err("Catch reward must be positive".to_string());
        }
        if !self.fly_size.is_finite() || self.fly_size <= 0.0 {
            return Err(format!("Fly size must be positive, got {}", self.fly_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(FrogCatchSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_intervals() {
        let settings = FrogCatchSettings::default();
        assert_eq!(settings.countdown_interval(), Duration::from_secs(1));
        assert_eq!(settings.spawn_interval(), Duration::from_millis(1500));
        assert_eq!(settings.fly_lifetime(), Duration::from_secs(4));
        assert_eq!(settings.catch_grace(), Duration::from_millis(400));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let settings = FrogCatchSettings {
            spawn_interval_ms: 0,
            ..FrogCatchSettings::default()
        };
        assert_eq!(settings.validate(), Err("Spawn interval must be positive".to_string()));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let settings = FrogCatchSettings {
            session_duration_secs: 0,
            ..FrogCatchSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_fly_size_rejected() {
        let settings = FrogCatchSettings {
            fly_size: f32::NAN,
            ..FrogCatchSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
