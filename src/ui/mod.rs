pub mod flappy_scene;
pub mod responsive;

pub use flappy_scene::render_flappy;
pub use responsive::render_too_small;
