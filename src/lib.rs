//! Flappy - a Flappy Bird clone for the terminal.
//!
//! The simulation in [`game`] is independent of the terminal; [`core::GameLoop`]
//! ties it to a [`surface::Surface`], a [`core::Clock`] and a random source.

pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod surface;
pub mod ui;

pub use crate::core::{GameConfig, GameLoop};
pub use error::SurfaceError;
pub use game::{GameState, Obstacle, Session};
