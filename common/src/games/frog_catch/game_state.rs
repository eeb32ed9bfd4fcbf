use crate::FlyId;
use crate::games::SessionRng;

use super::types::{CatchAnimation, Fly, PlayArea, Position};

/// Score, countdown and live flies of one play-through. Knows nothing about
/// timers; the controller decides when each operation runs.
#[derive(Debug, Clone, Default)]
pub struct FrogCatchGameState {
    score: u32,
    time_left: u32,
    flies: Vec<Fly>,
    catch_animation: Option<CatchAnimation>,
}

impl FrogCatchGameState {
    pub fn new(time_left: u32) -> Self {
        Self {
            time_left,
            ..Self::default()
        }
    }

    pub fn reset(&mut self, time_left: u32) {
        self.score = 0;
        self.time_left = time_left;
        self.clear_flies();
    }

    /// Returns the remaining seconds after the decrement.
    pub fn count_down(&mut self) -> u32 {
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left
    }

    pub fn finish(&mut self) {
        self.time_left = 0;
        self.clear_flies();
    }

    pub fn clear_flies(&mut self) {
        self.flies.clear();
        self.catch_animation = None;
    }

    pub fn spawn_fly(
        &mut self,
        id: FlyId,
        area: PlayArea,
        fly_size: f32,
        rng: &mut SessionRng,
    ) -> Position {
        let max_origin = area.max_origin(fly_size);
        let position = Position::new(
            rng.coordinate_up_to(max_origin.x),
            rng.coordinate_up_to(max_origin.y),
        );
        self.flies.push(Fly::new(id, position));
        position
    }

    /// Marks the fly caught and adds `reward`. Returns `false` without
    /// touching anything if the fly is gone or already caught.
    pub fn catch_fly(&mut self, id: FlyId, reward: u32) -> bool {
        let Some(fly) = self.flies.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        if fly.caught {
            return false;
        }

        fly.caught = true;
        self.score += reward;
        self.catch_animation = Some(CatchAnimation {
            fly_id: id,
            position: fly.position,
        });
        true
    }

    pub fn remove_fly(&mut self, id: FlyId) -> Option<Fly> {
        let index = self.flies.iter().position(|f| f.id == id)?;
        Some(self.flies.remove(index))
    }

    /// Drops the catch animation if it still belongs to `id`.
    pub fn clear_catch_animation(&mut self, id: FlyId) {
        if self.catch_animation.is_some_and(|a| a.fly_id == id) {
            self.catch_animation = None;
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn flies(&self) -> &[Fly] {
        &self.flies
    }

    pub fn catch_animation(&self) -> Option<CatchAnimation> {
        self.catch_animation
    }
}
