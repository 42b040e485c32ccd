//! Flappy Bird simulation.
//!
//! The bird falls under gravity and is pushed upward by flaps while obstacles
//! scroll in from the right. Touching the floor or an obstacle outside its gap
//! ends the game; every obstacle that scrolls past the bird scores a point.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
