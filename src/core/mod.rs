//! Configuration, timing and the game loop.

pub mod clock;
pub mod config;
pub mod constants;
pub mod game_loop;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use game_loop::{GameLoop, LoopControl};
