mod controller;
mod game_state;
mod high_scores;
mod scheduler;
mod session;
mod settings;
mod snapshot;
mod store;
mod types;

pub use controller::FrogCatchController;
pub use high_scores::{HighScoreEntry, HighScoreTable, local_date_label};
pub use session::{FrogCatchCommand, FrogCatchSession};
pub use settings::*;
pub use snapshot::FrogCatchSnapshot;
pub use store::{HighScoreStore, InMemoryHighScoreStore, PersistentHighScoreStore};
pub use types::{CatchAnimation, Fly, GameEvent, GameMode, GameResult, PlayArea, Position};
