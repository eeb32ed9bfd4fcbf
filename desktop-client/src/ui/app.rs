use common::games::frog_catch::{FrogCatchCommand, GameMode, PlayArea};
use eframe::egui;

use crate::command_sender::CommandSender;
use crate::state::SharedState;

use super::game::FrogCatchGameUi;
use super::menu;

pub struct FrogCatchApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    game_ui: FrogCatchGameUi,
    reported_play_area: Option<PlayArea>,
}

impl FrogCatchApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender) -> Self {
        Self {
            shared_state,
            command_sender,
            game_ui: FrogCatchGameUi::new(),
            reported_play_area: None,
        }
    }

    fn report_play_area(&mut self, play_area: PlayArea) {
        if self.reported_play_area == Some(play_area) {
            return;
        }
        self.reported_play_area = Some(play_area);
        self.command_sender
            .send(FrogCatchCommand::ResizePlayArea(Some(play_area)));
    }

    fn render_game_over(&self, ctx: &egui::Context) {
        let Some(result) = self.shared_state.get_game_over() else {
            return;
        };

        let mut play_again = false;
        let mut close = false;

        egui::Window::new("Time's up!")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("Your score: {}", result.score));
                    match result.rank {
                        Some(1) => {
                            ui.label(
                                egui::RichText::new("New record!")
                                    .color(egui::Color32::GOLD)
                                    .size(20.0),
                            );
                        }
                        Some(rank) => {
                            ui.label(format!("Place #{} in the high scores", rank));
                        }
                        None => {
                            ui.label("Not enough for the high scores this time");
                        }
                    }
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Play again").clicked() {
                            play_again = true;
                        }
                        if ui.button("Close").clicked() {
                            close = true;
                        }
                    });
                });
            });

        if play_again || close {
            self.shared_state.clear_game_over();
        }
        if play_again {
            self.command_sender.send(FrogCatchCommand::Start);
        }
    }
}

impl eframe::App for FrogCatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let snapshot = self.shared_state.get_snapshot();

        let mut laid_out_area = None;
        egui::CentralPanel::default().show(ctx, |ui| match snapshot.mode {
            GameMode::Idle => {
                menu::render_menu(ui, ctx, &snapshot, &self.command_sender);
            }
            GameMode::Scores => {
                menu::render_scores(ui, ctx, &snapshot, &self.command_sender);
            }
            GameMode::Running => {
                laid_out_area =
                    self.game_ui
                        .render_game(ui, ctx, &snapshot, &self.command_sender);
            }
        });

        if let Some(play_area) = laid_out_area {
            self.report_play_area(play_area);
        }

        if snapshot.is_running() {
            self.shared_state.clear_game_over();
        } else {
            self.render_game_over(ctx);
        }
    }
}
