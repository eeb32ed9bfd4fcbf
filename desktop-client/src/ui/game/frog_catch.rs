use common::games::frog_catch::{
    CatchAnimation, Fly, FrogCatchCommand, FrogCatchSnapshot, PlayArea, Position,
};
use eframe::egui;

use crate::command_sender::CommandSender;

const PLAY_AREA_HEIGHT: f32 = 500.0;
const FROG_RADIUS: f32 = 40.0;

const POND_COLOR: egui::Color32 = egui::Color32::from_rgb(168, 214, 190);
const FROG_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 150, 60);
const TONGUE_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 90, 120);
const FLY_BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
const FLY_WING_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 225, 245);

pub struct FrogCatchGameUi;

impl FrogCatchGameUi {
    pub fn new() -> Self {
        Self
    }

    /// Draws the running game and returns the play area actually laid out.
    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &FrogCatchSnapshot,
        command_sender: &CommandSender,
    ) -> Option<PlayArea> {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            command_sender.send(FrogCatchCommand::Stop);
        }

        self.render_hud(ui, snapshot, command_sender);
        ui.add_space(10.0);
        self.render_play_area(ui, snapshot, command_sender)
    }

    fn render_hud(
        &self,
        ui: &mut egui::Ui,
        snapshot: &FrogCatchSnapshot,
        command_sender: &CommandSender,
    ) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Score: {}", snapshot.score)).size(22.0));
            ui.add_space(30.0);

            let time_color = if snapshot.time_left <= 5 {
                egui::Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(
                egui::RichText::new(format!("Time: {}s", snapshot.time_left))
                    .size(22.0)
                    .color(time_color),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Stop").clicked() {
                    command_sender.send(FrogCatchCommand::Stop);
                }
            });
        });
    }

    fn render_play_area(
        &self,
        ui: &mut egui::Ui,
        snapshot: &FrogCatchSnapshot,
        command_sender: &CommandSender,
    ) -> Option<PlayArea> {
        let width = ui.available_width();
        if width <= 0.0 {
            return None;
        }

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, PLAY_AREA_HEIGHT), egui::Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 12.0, POND_COLOR);

        let mouth = egui::pos2(rect.center().x, rect.bottom() - FROG_RADIUS - 10.0);
        for fly in snapshot.flies.iter().filter(|fly| !fly.caught) {
            draw_fly(&painter, rect, fly, snapshot.fly_size);
        }
        if let Some(animation) = &snapshot.catch_animation {
            draw_tongue(&painter, rect, mouth, animation, snapshot.fly_size);
        }
        draw_frog(&painter, mouth);

        if response.clicked()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            let local = pointer - rect.min;
            if let Some(fly_id) = snapshot.fly_at(Position::new(local.x, local.y)) {
                command_sender.send(FrogCatchCommand::Catch { fly_id });
            }
        }

        Some(PlayArea::new(rect.width(), rect.height()))
    }
}

fn to_screen(rect: egui::Rect, position: Position, size: f32) -> egui::Pos2 {
    rect.min + egui::vec2(position.x + size / 2.0, position.y + size / 2.0)
}

fn draw_fly(painter: &egui::Painter, rect: egui::Rect, fly: &Fly, size: f32) {
    let center = to_screen(rect, fly.position, size);
    let wing_radius = size * 0.2;

    for side in [-1.0, 1.0] {
        let wing = center + egui::vec2(side * size * 0.18, -size * 0.15);
        painter.circle_filled(wing, wing_radius, FLY_WING_COLOR);
    }
    painter.circle_filled(center, size * 0.22, FLY_BODY_COLOR);
}

fn draw_tongue(
    painter: &egui::Painter,
    rect: egui::Rect,
    mouth: egui::Pos2,
    animation: &CatchAnimation,
    size: f32,
) {
    let target = to_screen(rect, animation.position, size);
    painter.line_segment([mouth, target], egui::Stroke::new(6.0, TONGUE_COLOR));
    painter.circle_filled(target, 9.0, TONGUE_COLOR);
}

fn draw_frog(painter: &egui::Painter, mouth: egui::Pos2) {
    let body = mouth + egui::vec2(0.0, 5.0);
    painter.circle_filled(body, FROG_RADIUS, FROG_COLOR);

    for side in [-1.0, 1.0] {
        let eye = body + egui::vec2(side * FROG_RADIUS * 0.5, -FROG_RADIUS * 0.8);
        painter.circle_filled(eye, 12.0, FROG_COLOR);
        painter.circle_filled(eye, 8.0, egui::Color32::WHITE);
        painter.circle_filled(eye, 4.0, egui::Color32::BLACK);
    }
}
