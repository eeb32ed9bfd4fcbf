use crate::FlyId;

use super::high_scores::HighScoreEntry;
use super::types::{CatchAnimation, Fly, GameMode, GameResult, Position};

/// Everything the presentation layer renders, detached from the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrogCatchSnapshot {
    pub mode: GameMode,
    pub score: u32,
    pub time_left: u32,
    pub flies: Vec<Fly>,
    pub fly_size: f32,
    pub catch_animation: Option<CatchAnimation>,
    pub high_scores: Vec<HighScoreEntry>,
    pub last_result: Option<GameResult>,
}

impl FrogCatchSnapshot {
    /// Topmost uncaught fly under `point`. Later spawns are drawn on top, so
    /// the search runs newest first.
    pub fn fly_at(&self, point: Position) -> Option<FlyId> {
        self.flies
            .iter()
            .rev()
            .find(|fly| !fly.caught && fly.contains(point, self.fly_size))
            .map(|fly| fly.id)
    }

    pub fn is_running(&self) -> bool {
        self.mode == GameMode::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fly(id: u64, x: f32, y: f32, caught: bool) -> Fly {
        Fly {
            caught,
            ..Fly::new(FlyId::new(id), Position::new(x, y))
        }
    }

    fn snapshot(flies: Vec<Fly>) -> FrogCatchSnapshot {
        FrogCatchSnapshot {
            mode: GameMode::Running,
            flies,
            fly_size: 60.0,
            ..FrogCatchSnapshot::default()
        }
    }

    #[test]
    fn test_fly_at_hits_inside_box() {
        let snapshot = snapshot(vec![fly(1, 100.0, 100.0, false)]);
        assert_eq!(snapshot.fly_at(Position::new(130.0, 159.0)), Some(FlyId::new(1)));
        assert_eq!(snapshot.fly_at(Position::new(99.0, 130.0)), None);
        assert_eq!(snapshot.fly_at(Position::new(130.0, 161.0)), None);
    }

    #[test]
    fn test_fly_at_prefers_newest() {
        let snapshot = snapshot(vec![fly(1, 100.0, 100.0, false), fly(2, 120.0, 120.0, false)]);
        assert_eq!(snapshot.fly_at(Position::new(140.0, 140.0)), Some(FlyId::new(2)));
    }

    #[test]
    fn test_fly_at_skips_caught() {
        let snapshot = snapshot(vec![fly(1, 100.0, 100.0, false), fly(2, 120.0, 120.0, true)]);
        assert_eq!(snapshot.fly_at(Position::new(140.0, 140.0)), Some(FlyId::new(1)));
        assert_eq!(snapshot.fly_at(Position::new(175.0, 175.0)), None);
    }
}
