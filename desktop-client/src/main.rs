mod command_sender;
mod config;
mod local;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::frog_catch::{
    FrogCatchController, InMemoryHighScoreStore, PersistentHighScoreStore,
};
use common::{log, logger};
use eframe::egui;

use config::get_config_manager;
use local::spawn_local_game;
use state::SharedState;
use ui::FrogCatchApp;

#[derive(Parser, Debug)]
#[command(name = "frog_catch")]
#[command(about = "Catch as many flies as you can before the time runs out", long_about = None)]
struct Args {
    #[arg(long, help = "Prefix log lines with the process name")]
    use_log_prefix: bool,

    #[arg(long, help = "High scores file, overrides the configured location")]
    scores_file: Option<PathBuf>,

    #[arg(long, help = "Keep high scores in memory only")]
    no_persist: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix);

    let config = get_config_manager().get_config_or_default();
    let shared_state = SharedState::new();
    let rng = SessionRng::from_random();

    let command_sender = if args.no_persist || !config.scores.persist {
        log!("High scores are kept in memory only");
        let controller =
            FrogCatchController::new(config.game, InMemoryHighScoreStore::new(), rng);
        spawn_local_game(controller, shared_state.clone())
    } else {
        let scores_path = args
            .scores_file
            .unwrap_or_else(|| config.scores.resolved_location());
        log!("High scores file: {}", scores_path.display());
        let store = PersistentHighScoreStore::from_yaml_file(scores_path);
        let controller = FrogCatchController::new(config.game, store, rng);
        spawn_local_game(controller, shared_state.clone())
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 640.0])
            .with_min_inner_size([400.0, 600.0])
            .with_title("Frog Catch"),
        ..Default::default()
    };

    eframe::run_native(
        "Frog Catch",
        options,
        Box::new(|_cc| Ok(Box::new(FrogCatchApp::new(shared_state, command_sender)))),
    )?;

    Ok(())
}
