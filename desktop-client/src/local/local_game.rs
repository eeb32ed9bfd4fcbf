use common::games::frog_catch::{FrogCatchCommand, FrogCatchController, FrogCatchSession, HighScoreStore};
use common::log;
use tokio::sync::mpsc;

use crate::command_sender::CommandSender;
use crate::state::SharedState;

use super::LocalBroadcaster;

/// Runs the game on its own single-threaded runtime. The returned sender is
/// the only way in; dropping every clone of it shuts the game task down.
pub fn spawn_local_game<S: HighScoreStore>(
    controller: FrogCatchController<S>,
    shared_state: SharedState,
) -> CommandSender {
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        runtime.block_on(local_game_task(controller, shared_state, command_rx));
    });

    CommandSender::new(command_tx)
}

async fn local_game_task<S: HighScoreStore>(
    controller: FrogCatchController<S>,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<FrogCatchCommand>,
) {
    let broadcaster = LocalBroadcaster::new(shared_state);
    FrogCatchSession::run(controller, command_rx, broadcaster).await;
}
