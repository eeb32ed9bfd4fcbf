use std::sync::{Arc, Mutex};

use common::games::frog_catch::{FrogCatchSnapshot, GameResult};
use eframe::egui;

/// State shared between the game task and the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    snapshot: Arc<Mutex<FrogCatchSnapshot>>,
    game_over: Arc<Mutex<Option<GameResult>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&self, snapshot: FrogCatchSnapshot) {
        *self.snapshot.lock().unwrap() = snapshot;
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> FrogCatchSnapshot {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_game_over(&self, result: GameResult) {
        *self.game_over.lock().unwrap() = Some(result);
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.send_viewport_cmd(egui::ViewportCommand::RequestUserAttention(
                egui::UserAttentionType::Informational,
            ));
            ctx.request_repaint();
        }
    }

    pub fn get_game_over(&self) -> Option<GameResult> {
        self.game_over.lock().unwrap().clone()
    }

    pub fn clear_game_over(&self) {
        *self.game_over.lock().unwrap() = None;
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}
