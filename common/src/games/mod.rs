mod broadcaster;
mod session_rng;

pub mod frog_catch;

pub use broadcaster::GameBroadcaster;
pub use session_rng::SessionRng;
