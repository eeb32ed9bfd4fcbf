mod frog_catch;

pub use frog_catch::FrogCatchGameUi;
