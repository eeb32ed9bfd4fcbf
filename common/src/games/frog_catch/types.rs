use crate::FlyId;

use super::high_scores::HighScoreEntry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of the play field as reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-left coordinate that keeps a square of `size` inside the area.
    pub fn max_origin(&self, size: f32) -> Position {
        Position::new((self.width - size).max(0.0), (self.height - size).max(0.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fly {
    pub id: FlyId,
    pub position: Position,
    pub caught: bool,
}

impl Fly {
    pub fn new(id: FlyId, position: Position) -> Self {
        Self {
            id,
            position,
            caught: false,
        }
    }

    pub fn contains(&self, point: Position, size: f32) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + size
            && point.y >= self.position.y
            && point.y <= self.position.y + size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchAnimation {
    pub fly_id: FlyId,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Idle,
    Running,
    Scores,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub score: u32,
    pub entry: HighScoreEntry,
    /// 1-based position in the table, `None` if the score did not make the cut.
    pub rank: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted,
    FlySpawned { fly_id: FlyId, position: Position },
    SpawnSkipped,
    FlyCaught { fly_id: FlyId, score: u32 },
    FlyExpired { fly_id: FlyId },
    FlyRemoved { fly_id: FlyId },
    SessionStopped { score: u32 },
    SessionEnded(GameResult),
}
