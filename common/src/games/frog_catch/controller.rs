use std::time::Duration;

use crate::games::SessionRng;
use crate::{FlyId, Generation, log};

use super::game_state::FrogCatchGameState;
use super::high_scores::{HighScoreEntry, HighScoreTable, local_date_label};
use super::scheduler::{Timer, TimerKind, TimerQueue};
use super::settings::FrogCatchSettings;
use super::snapshot::FrogCatchSnapshot;
use super::store::HighScoreStore;
use super::types::{GameEvent, GameMode, GameResult, PlayArea};

/// Owns one player's game: the running session, its timers and the
/// high-score table. Time only moves through [`advance`](Self::advance).
pub struct FrogCatchController<S: HighScoreStore> {
    settings: FrogCatchSettings,
    state: FrogCatchGameState,
    timers: TimerQueue,
    high_scores: HighScoreTable,
    store: S,
    rng: SessionRng,
    date_label: fn() -> String,
    play_area: Option<PlayArea>,
    mode: GameMode,
    generation: Generation,
    next_fly_id: FlyId,
    now: Duration,
    last_result: Option<GameResult>,
    events: Vec<GameEvent>,
}

impl<S: HighScoreStore> FrogCatchController<S> {
    pub fn new(settings: FrogCatchSettings, store: S, rng: SessionRng) -> Self {
        let high_scores = match store.load() {
            Ok(entries) => HighScoreTable::from_entries(entries),
            Err(e) => {
                log!("Could not load high scores, starting with an empty table: {}", e);
                HighScoreTable::new()
            }
        };

        Self {
            settings,
            state: FrogCatchGameState::new(settings.session_duration_secs),
            timers: TimerQueue::new(),
            high_scores,
            store,
            rng,
            date_label: local_date_label,
            play_area: None,
            mode: GameMode::Idle,
            generation: Generation::default(),
            next_fly_id: FlyId::new(1),
            now: Duration::ZERO,
            last_result: None,
            events: Vec::new(),
        }
    }

    pub fn with_date_label(mut self, date_label: fn() -> String) -> Self {
        self.date_label = date_label;
        self
    }

    pub fn set_play_area(&mut self, play_area: Option<PlayArea>) {
        self.play_area = play_area;
    }

    pub fn start(&mut self) {
        self.cancel_timers();
        self.state.reset(self.settings.session_duration_secs);
        self.mode = GameMode::Running;

        self.schedule(self.now + self.settings.countdown_interval(), TimerKind::Countdown);
        self.schedule(self.now + self.settings.spawn_interval(), TimerKind::Spawn);
        self.events.push(GameEvent::SessionStarted);
    }

    /// One countdown step. Ends the session when the clock hits zero.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        if self.state.count_down() == 0 {
            self.end();
        }
    }

    pub fn spawn_fly(&mut self) -> Option<FlyId> {
        if !self.is_running() {
            return None;
        }
        let Some(area) = self.play_area else {
            self.events.push(GameEvent::SpawnSkipped);
            return None;
        };

        let fly_id = self.next_fly_id;
        self.next_fly_id = fly_id.next();

        let position = self
            .state
            .spawn_fly(fly_id, area, self.settings.fly_size, &mut self.rng);
        self.schedule(self.now + self.settings.fly_lifetime(), TimerKind::FlyExpiry(fly_id));
        self.events.push(GameEvent::FlySpawned { fly_id, position });
        Some(fly_id)
    }

    /// Returns whether the click counted.
    pub fn catch(&mut self, fly_id: FlyId) -> bool {
        if !self.is_running() || !self.state.catch_fly(fly_id, self.settings.catch_reward) {
            return false;
        }

        self.schedule(self.now + self.settings.catch_grace(), TimerKind::CatchCleanup(fly_id));
        self.events.push(GameEvent::FlyCaught {
            fly_id,
            score: self.state.score(),
        });
        true
    }

    /// Natural end of a session: records the score and persists the table.
    pub fn end(&mut self) -> Option<GameResult> {
        if !self.is_running() {
            return None;
        }

        self.cancel_timers();
        self.state.finish();
        self.mode = GameMode::Idle;

        let score = self.state.score();
        let entry = HighScoreEntry::new(score, (self.date_label)());
        let rank = self.high_scores.record(entry.clone());
        if let Err(e) = self.store.save(self.high_scores.entries()) {
            log!("Failed to save high scores: {}", e);
        }

        let result = GameResult { score, entry, rank };
        self.last_result = Some(result.clone());
        self.events.push(GameEvent::SessionEnded(result.clone()));
        Some(result)
    }

    /// Manual early exit. The score is discarded.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }

        self.cancel_timers();
        self.state.clear_flies();
        self.mode = GameMode::Idle;
        self.events.push(GameEvent::SessionStopped {
            score: self.state.score(),
        });
    }

    pub fn show_scores(&mut self) {
        if self.mode == GameMode::Idle {
            self.mode = GameMode::Scores;
        }
    }

    pub fn hide_scores(&mut self) {
        if self.mode == GameMode::Scores {
            self.mode = GameMode::Idle;
        }
    }

    /// Fires every timer due at or before `now`, each at its own deadline.
    pub fn advance(&mut self, now: Duration) {
        while let Some(scheduled) = self.timers.pop_due(now) {
            self.now = self.now.max(scheduled.due);
            self.fire(scheduled.due, scheduled.timer);
        }
        self.now = self.now.max(now);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> FrogCatchSnapshot {
        FrogCatchSnapshot {
            mode: self.mode,
            score: self.state.score(),
            time_left: self.state.time_left(),
            flies: self.state.flies().to_vec(),
            fly_size: self.settings.fly_size,
            catch_animation: self.state.catch_animation(),
            high_scores: self.high_scores.entries().to_vec(),
            last_result: self.last_result.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.mode == GameMode::Running
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn time_left(&self) -> u32 {
        self.state.time_left()
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    fn fire(&mut self, due: Duration, timer: Timer) {
        if timer.generation != self.generation {
            return;
        }

        match timer.kind {
            TimerKind::Countdown => {
                self.tick();
                if self.is_running() {
                    self.schedule(due + self.settings.countdown_interval(), TimerKind::Countdown);
                }
            }
            TimerKind::Spawn => {
                self.spawn_fly();
                if self.is_running() {
                    self.schedule(due + self.settings.spawn_interval(), TimerKind::Spawn);
                }
            }
            TimerKind::FlyExpiry(fly_id) => {
                if self.state.remove_fly(fly_id).is_some() {
                    self.state.clear_catch_animation(fly_id);
                    self.events.push(GameEvent::FlyExpired { fly_id });
                }
            }
            TimerKind::CatchCleanup(fly_id) => {
                self.state.clear_catch_animation(fly_id);
                if self.state.remove_fly(fly_id).is_some() {
                    self.events.push(GameEvent::FlyRemoved { fly_id });
                }
            }
        }
    }

    fn schedule(&mut self, due: Duration, kind: TimerKind) {
        self.timers.schedule(
            due,
            Timer {
                kind,
                generation: self.generation,
            },
        );
    }

    fn cancel_timers(&mut self) {
        self.timers.clear();
        self.generation.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::frog_catch::store::InMemoryHighScoreStore;

    const TODAY: &str = "19.10.2026";

    fn today() -> String {
        TODAY.to_string()
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controller_with(store: InMemoryHighScoreStore) -> FrogCatchController<InMemoryHighScoreStore> {
        let mut controller = FrogCatchController::new(FrogCatchSettings::default(), store, SessionRng::new(42))
            .with_date_label(today);
        controller.set_play_area(Some(PlayArea::new(800.0, 500.0)));
        controller
    }

    fn controller() -> FrogCatchController<InMemoryHighScoreStore> {
        controller_with(InMemoryHighScoreStore::new())
    }

    fn fly_ids(controller: &FrogCatchController<InMemoryHighScoreStore>) -> Vec<FlyId> {
        controller.snapshot().flies.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_start_resets_session() {
        let mut controller = controller();
        controller.start();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.mode, GameMode::Running);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.time_left, 30);
        assert!(snapshot.flies.is_empty());
        assert_eq!(controller.next_deadline(), Some(ms(1000)));
    }

    #[test]
    fn test_countdown_and_spawn_cadence() {
        let mut controller = controller();
        controller.start();

        controller.advance(ms(999));
        assert_eq!(controller.time_left(), 30);

        controller.advance(ms(1000));
        assert_eq!(controller.time_left(), 29);
        assert!(fly_ids(&controller).is_empty());

        controller.advance(ms(1500));
        assert_eq!(fly_ids(&controller).len(), 1);

        controller.advance(ms(3000));
        assert_eq!(controller.time_left(), 27);
        assert_eq!(fly_ids(&controller).len(), 2);
    }

    #[test]
    fn test_catch_three_flies_scores_thirty() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(4500));

        let ids = fly_ids(&controller);
        assert_eq!(ids.len(), 3);
        for id in ids {
            assert!(controller.catch(id));
        }

        assert_eq!(controller.score(), 30);
    }

    #[test]
    fn test_double_catch_counts_once() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(1500));
        let id = fly_ids(&controller)[0];

        assert!(controller.catch(id));
        assert!(!controller.catch(id));

        assert_eq!(controller.score(), 10);
    }

    #[test]
    fn test_catch_unknown_fly_is_noop() {
        let mut controller = controller();
        controller.start();
        assert!(!controller.catch(FlyId::new(1234)));
        assert_eq!(controller.score(), 0);
    }

    #[test]
    fn test_caught_fly_removed_after_grace_period() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(1500));
        let id = fly_ids(&controller)[0];

        controller.advance(ms(2000));
        controller.catch(id);
        assert_eq!(controller.snapshot().catch_animation.unwrap().fly_id, id);

        controller.advance(ms(2399));
        assert!(fly_ids(&controller).contains(&id));

        controller.advance(ms(2400));
        assert!(!fly_ids(&controller).contains(&id));
        assert!(controller.snapshot().catch_animation.is_none());
        assert!(controller.take_events().contains(&GameEvent::FlyRemoved { fly_id: id }));
    }

    #[test]
    fn test_uncaught_fly_expires_without_score() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(1500));
        let id = fly_ids(&controller)[0];

        controller.advance(ms(5499));
        assert!(fly_ids(&controller).contains(&id));

        controller.advance(ms(5500));
        assert!(!fly_ids(&controller).contains(&id));
        assert_eq!(controller.score(), 0);
        assert!(controller.take_events().contains(&GameEvent::FlyExpired { fly_id: id }));
    }

    #[test]
    fn test_spawn_without_play_area_is_skipped() {
        let mut controller = controller();
        controller.set_play_area(None);
        controller.start();

        controller.advance(ms(3000));

        assert!(fly_ids(&controller).is_empty());
        assert!(controller.is_running());
        assert!(controller.take_events().contains(&GameEvent::SpawnSkipped));
    }

    #[test]
    fn test_spawn_positions_respect_bounds() {
        let mut controller = controller();
        controller.set_play_area(Some(PlayArea::new(200.0, 150.0)));
        controller.start();

        for _ in 0..200 {
            controller.spawn_fly();
        }

        for fly in controller.snapshot().flies {
            assert!(fly.position.x >= 0.0 && fly.position.x <= 140.0);
            assert!(fly.position.y >= 0.0 && fly.position.y <= 90.0);
        }
    }

    #[test]
    fn test_timeout_records_score_in_empty_store() {
        let store = InMemoryHighScoreStore::new();
        let mut controller = controller_with(store.clone());
        controller.start();
        for spawn in 1..=5 {
            controller.advance(ms(spawn * 1500));
            let newest = *fly_ids(&controller).last().unwrap();
            assert!(controller.catch(newest));
        }
        assert_eq!(controller.score(), 50);

        controller.advance(ms(30_000));

        assert!(!controller.is_running());
        assert_eq!(controller.time_left(), 0);
        assert_eq!(store.load().unwrap(), vec![HighScoreEntry::new(50, TODAY)]);
        let result = controller.snapshot().last_result.unwrap();
        assert_eq!(result.score, 50);
        assert_eq!(result.rank, Some(1));
    }

    #[test]
    fn test_low_score_leaves_full_table_unchanged() {
        let full = vec![HighScoreEntry::new(100, "01.01.2026"); 10];
        let store = InMemoryHighScoreStore::with_entries(full.clone());
        let mut controller = controller_with(store.clone());
        controller.start();
        controller.advance(ms(1500));
        let id = fly_ids(&controller)[0];
        controller.catch(id);

        controller.advance(ms(30_000));

        assert_eq!(controller.snapshot().last_result.unwrap().rank, None);
        assert_eq!(store.load().unwrap(), full);
        assert_eq!(controller.high_scores().entries(), full.as_slice());
    }

    #[test]
    fn test_end_sets_time_to_zero_and_stops() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(5000));

        let result = controller.end();

        assert!(result.is_some());
        assert!(!controller.is_running());
        assert_eq!(controller.time_left(), 0);
        assert!(controller.snapshot().flies.is_empty());
        assert_eq!(controller.next_deadline(), None);
        assert!(controller.end().is_none());
    }

    #[test]
    fn test_stop_does_not_record_score() {
        let store = InMemoryHighScoreStore::new();
        let mut controller = controller_with(store.clone());
        controller.start();
        controller.advance(ms(1500));
        let id = fly_ids(&controller)[0];
        controller.catch(id);

        controller.stop();
        controller.advance(ms(60_000));

        assert_eq!(controller.mode(), GameMode::Idle);
        assert!(controller.snapshot().flies.is_empty());
        assert!(controller.snapshot().last_result.is_none());
        assert!(store.load().unwrap().is_empty());
        assert!(controller.high_scores().is_empty());
    }

    #[test]
    fn test_catch_after_stop_is_ignored() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(1500));
        let id = fly_ids(&controller)[0];

        controller.stop();

        assert!(!controller.catch(id));
        assert_eq!(controller.score(), 0);
        assert!(controller.snapshot().catch_animation.is_none());
        assert_eq!(controller.next_deadline(), None);
    }

    #[test]
    fn test_stale_expiry_does_not_touch_new_session() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(1500));
        let old_id = fly_ids(&controller)[0];

        controller.stop();
        controller.start();
        controller.advance(ms(3000));
        let new_ids = fly_ids(&controller);
        assert_eq!(new_ids.len(), 1);
        assert!(!new_ids.contains(&old_id));

        // The first session's fly would have expired at 5.5s.
        controller.advance(ms(5500));
        let current = fly_ids(&controller);
        assert!(new_ids.iter().all(|id| current.contains(id)));
        assert!(!current.contains(&old_id));
    }

    #[test]
    fn test_restart_while_running_resets() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(1500));
        let id = fly_ids(&controller)[0];
        controller.catch(id);

        controller.start();

        assert_eq!(controller.score(), 0);
        assert_eq!(controller.time_left(), 30);
        assert!(fly_ids(&controller).is_empty());
        assert_eq!(controller.next_deadline(), Some(ms(2500)));
    }

    #[test]
    fn test_score_is_always_multiple_of_reward() {
        let mut controller = controller();
        controller.start();
        for step in 1..=60 {
            controller.advance(ms(step * 500));
            if let Some(id) = fly_ids(&controller).first().copied() {
                controller.catch(id);
            }
            assert_eq!(controller.score() % 10, 0);
        }
    }

    #[test]
    fn test_scores_view_toggles_only_when_idle() {
        let mut controller = controller();
        controller.show_scores();
        assert_eq!(controller.mode(), GameMode::Scores);
        controller.hide_scores();
        assert_eq!(controller.mode(), GameMode::Idle);

        controller.show_scores();
        controller.start();
        assert_eq!(controller.mode(), GameMode::Running);
        controller.show_scores();
        assert_eq!(controller.mode(), GameMode::Running);
    }

    #[test]
    fn test_unreadable_store_starts_empty() {
        struct BrokenStore;

        impl HighScoreStore for BrokenStore {
            fn load(&self) -> Result<Vec<HighScoreEntry>, String> {
                Err("Failed to deserialize yaml: garbage".to_string())
            }

            fn save(&self, _entries: &[HighScoreEntry]) -> Result<(), String> {
                Err("read-only".to_string())
            }
        }

        let mut controller = FrogCatchController::new(FrogCatchSettings::default(), BrokenStore, SessionRng::new(1))
            .with_date_label(today);
        assert!(controller.high_scores().is_empty());

        controller.start();
        controller.advance(ms(30_000));

        assert!(!controller.is_running());
        assert_eq!(controller.high_scores().len(), 1);
    }

    #[test]
    fn test_events_are_drained() {
        let mut controller = controller();
        controller.start();
        controller.advance(ms(1500));

        let events = controller.take_events();
        assert_eq!(events[0], GameEvent::SessionStarted);
        assert!(matches!(events.last(), Some(GameEvent::FlySpawned { .. })));
        assert!(controller.take_events().is_empty());
    }
}
