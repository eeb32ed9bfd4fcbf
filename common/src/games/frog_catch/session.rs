use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::games::GameBroadcaster;
use crate::{FlyId, log};

use super::controller::FrogCatchController;
use super::store::HighScoreStore;
use super::types::{GameEvent, PlayArea};

#[derive(Debug, Clone, PartialEq)]
pub enum FrogCatchCommand {
    Start,
    Stop,
    Catch { fly_id: FlyId },
    ShowScores,
    HideScores,
    ResizePlayArea(Option<PlayArea>),
}

pub struct FrogCatchSession;

impl FrogCatchSession {
    /// Drives `controller` in real time until `command_rx` closes. Every
    /// step ends with a fresh snapshot sent to `broadcaster`.
    pub async fn run<S: HighScoreStore>(
        mut controller: FrogCatchController<S>,
        mut command_rx: mpsc::UnboundedReceiver<FrogCatchCommand>,
        broadcaster: impl GameBroadcaster,
    ) {
        let epoch = Instant::now();
        log!("Frog catch session driver started (rng seed {})", controller.rng_seed());
        broadcaster.broadcast_state(controller.snapshot()).await;

        loop {
            let deadline = controller.next_deadline().map(|due| epoch + due);

            tokio::select! {
                _ = wait_until(deadline) => {
                    controller.advance(epoch.elapsed());
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    controller.advance(epoch.elapsed());
                    Self::handle_command(&mut controller, command);
                }
            }

            for event in controller.take_events() {
                log_event(&event);
                if let GameEvent::SessionEnded(result) = event {
                    broadcaster.broadcast_game_over(result).await;
                }
            }
            broadcaster.broadcast_state(controller.snapshot()).await;
        }

        log!("Frog catch session driver stopped");
    }

    pub fn handle_command<S: HighScoreStore>(
        controller: &mut FrogCatchController<S>,
        command: FrogCatchCommand,
    ) {
        match command {
            FrogCatchCommand::Start => controller.start(),
            FrogCatchCommand::Stop => controller.stop(),
            FrogCatchCommand::Catch { fly_id } => {
                controller.catch(fly_id);
            }
            FrogCatchCommand::ShowScores => controller.show_scores(),
            FrogCatchCommand::HideScores => controller.hide_scores(),
            FrogCatchCommand::ResizePlayArea(area) => controller.set_play_area(area),
        }
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::SessionStarted => log!("Session started"),
        GameEvent::SessionStopped { score } => log!("Session stopped early with {} points", score),
        GameEvent::SessionEnded(result) => match result.rank {
            Some(rank) => log!("Session over: {} points, rank #{}", result.score, rank),
            None => log!("Session over: {} points, not in the top list", result.score),
        },
        GameEvent::SpawnSkipped => log!("Spawn skipped: play area size unknown"),
        GameEvent::FlyCaught { fly_id, score } => log!("Caught {}, score {}", fly_id, score),
        GameEvent::FlySpawned { .. } | GameEvent::FlyExpired { .. } | GameEvent::FlyRemoved { .. } => {}
    }
}
