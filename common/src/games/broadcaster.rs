use std::future::Future;

use super::frog_catch::{FrogCatchSnapshot, GameResult};

/// Sink for everything the presentation layer needs to know about a session.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: FrogCatchSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, result: GameResult) -> impl Future<Output = ()> + Send;
}
