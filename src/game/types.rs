//! Flappy Bird data structures.

use crate::core::config::GameConfig;
use rand::Rng;
use std::time::Instant;

/// The player-controlled bird.
#[derive(Debug, Clone, PartialEq)]
pub struct BirdState {
    /// Vertical position in rows (float for smooth physics). Row 0 is the top.
    pub y: f64,
    /// Vertical velocity in rows per tick (positive = downward).
    pub velocity: f64,
    /// Fixed horizontal column.
    pub column: u16,
    /// Index into the configured bird glyphs.
    pub frame: usize,
}

impl BirdState {
    fn new(width: u16, height: u16) -> Self {
        Self {
            y: (height / 2) as f64,
            velocity: 0.0,
            column: width / 4,
            frame: 0,
        }
    }

    /// The character row the bird currently occupies.
    pub fn row(&self) -> i32 {
        self.y.floor() as i32
    }
}

/// A vertical obstacle with a passable gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// X position (float for smooth scrolling).
    pub x: f64,
    /// First passable row.
    pub gap_start: u16,
    /// First blocked row below the gap.
    pub gap_end: u16,
    /// Whether the bird has passed this obstacle (for scoring).
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_start: u16, gap_size: u16) -> Self {
        Self {
            x,
            gap_start,
            gap_end: gap_start + gap_size,
            passed: false,
        }
    }

    /// Leftmost column of the two-column footprint.
    pub fn column(&self) -> i32 {
        self.x.floor() as i32
    }

    pub fn covers_column(&self, column: i32) -> bool {
        let left = self.column();
        column >= left && column <= left + 1
    }

    pub fn blocks_row(&self, row: i32) -> bool {
        row < self.gap_start as i32 || row >= self.gap_end as i32
    }
}

/// Coarse session state derived from the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Playing,
    GameOver,
    Exited,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub bird: BirdState,
    /// Active obstacles, oldest (leftmost) first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub game_over: bool,
    pub width: u16,
    pub height: u16,
    /// Loop iterations since the last reset. Drives the bird animation.
    pub animation_counter: u32,
    pub last_tick: Instant,
}

impl GameState {
    /// Create a fresh game for a viewport.
    ///
    /// The viewport must satisfy [`GameConfig::fits`]; the game loop guarantees it.
    pub fn new<R: Rng>(config: GameConfig, width: u16, height: u16, now: Instant, rng: &mut R) -> Self {
        let mut state = Self {
            bird: BirdState::new(width, height),
            obstacles: Vec::new(),
            score: 0,
            game_over: false,
            width,
            height,
            animation_counter: 0,
            last_tick: now,
            config,
        };
        state.spawn_obstacle(rng);
        state
    }

    /// Restore initial conditions, keeping the current viewport.
    pub fn reset<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        self.bird = BirdState::new(self.width, self.height);
        self.obstacles.clear();
        self.spawn_obstacle(rng);
        self.score = 0;
        self.game_over = false;
        self.last_tick = now;
        self.animation_counter = 0;
    }

    /// Spawn a new obstacle at the right edge with a random gap position.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let (min_start, max_start) = self.config.gap_start_range(self.height);
        let gap_start = rng.gen_range(min_start..=max_start);

        self.obstacles.push(Obstacle::new(
            self.width.saturating_sub(1) as f64,
            gap_start,
            self.config.gap_size,
        ));
    }

    /// The glyph for the bird's current animation frame.
    pub fn bird_glyph(&self) -> char {
        self.config
            .bird_glyphs
            .get(self.bird.frame)
            .copied()
            .unwrap_or('>')
    }

    pub fn session(&self) -> Session {
        if self.game_over {
            Session::GameOver
        } else {
            Session::Playing
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}
