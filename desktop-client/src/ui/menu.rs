use common::games::frog_catch::{FrogCatchCommand, FrogCatchSnapshot};
use eframe::egui;

use crate::command_sender::CommandSender;

pub fn render_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    snapshot: &FrogCatchSnapshot,
    command_sender: &CommandSender,
) {
    if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        command_sender.send(FrogCatchCommand::Start);
    }

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(egui::RichText::new("Frog Catch").size(40.0));
        ui.add_space(10.0);
        ui.label("Click the flies before they fly away!");
        ui.label("Every caught fly scores points. Stay quick, flies leave after a few seconds.");
        ui.add_space(30.0);

        if ui
            .add_sized([200.0, 40.0], egui::Button::new("Start"))
            .clicked()
        {
            command_sender.send(FrogCatchCommand::Start);
        }
        ui.add_space(10.0);
        if ui
            .add_sized([200.0, 40.0], egui::Button::new("High Scores"))
            .clicked()
        {
            command_sender.send(FrogCatchCommand::ShowScores);
        }

        if let Some(result) = &snapshot.last_result {
            ui.add_space(30.0);
            ui.label(format!("Last game: {} points", result.score));
        }
    });
}

pub fn render_scores(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    snapshot: &FrogCatchSnapshot,
    command_sender: &CommandSender,
) {
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        command_sender.send(FrogCatchCommand::HideScores);
    }

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.heading(egui::RichText::new("High Scores").size(32.0));
        ui.add_space(20.0);

        if snapshot.high_scores.is_empty() {
            ui.label("No scores yet");
        } else {
            egui::Grid::new("high_scores_grid")
                .num_columns(3)
                .spacing([40.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    for (index, entry) in snapshot.high_scores.iter().enumerate() {
                        let color = rank_color(index + 1);
                        ui.label(egui::RichText::new(format!("#{}", index + 1)).color(color));
                        ui.label(
                            egui::RichText::new(entry.score.to_string())
                                .color(color)
                                .strong(),
                        );
                        ui.label(entry.date.as_str());
                        ui.end_row();
                    }
                });
        }

        ui.add_space(20.0);
        if ui
            .add_sized([200.0, 40.0], egui::Button::new("Back"))
            .clicked()
        {
            command_sender.send(FrogCatchCommand::HideScores);
        }
    });
}

fn rank_color(rank: usize) -> egui::Color32 {
    match rank {
        1 => egui::Color32::GOLD,
        2 => egui::Color32::from_rgb(192, 192, 192),
        3 => egui::Color32::from_rgb(205, 127, 50),
        _ => egui::Color32::GRAY,
    }
}
