// Tick and timing
pub const TICK_BUDGET_MS: u64 = 10;
pub const ANIMATION_PERIOD: u32 = 5;

// Bird physics
pub const GRAVITY: f64 = 0.1;
pub const TIME_SCALE: f64 = 10.0;
pub const FLAP_IMPULSE: f64 = -0.7;
pub const BIRD_GLYPHS: [char; 3] = ['>', '^', '>'];

// Obstacles
pub const OBSTACLE_SPEED: f64 = 15.0; // columns per second
pub const GAP_SIZE: u16 = 6;
pub const SPAWN_DISTANCE: f64 = 20.0;
pub const GAP_MARGIN_TOP: u16 = 3;
pub const GAP_MARGIN_BOTTOM: u16 = 3;

// Viewport
pub const MIN_VIEWPORT_WIDTH: u16 = 20;

// Glyphs
pub const OBSTACLE_GLYPH: char = '║';
pub const OBSTACLE_TOP_GLYPH: char = '╦';
pub const OBSTACLE_BOTTOM_GLYPH: char = '╩';
pub const BACKGROUND_GLYPH: char = '·';
pub const BACKGROUND_SPACING: u16 = 4;

pub const GAME_OVER_TEXT: &str = "GAME OVER - Press 'r' to restart or 'q' to quit";
