//! Game tuning configuration.

use super::constants::*;
use std::time::Duration;

/// Physics, obstacle and pacing parameters for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Downward acceleration applied every tick, scaled by `dt * time_scale`.
    pub gravity: f64,
    pub time_scale: f64,
    /// Velocity the bird is set to on a flap (negative = upward).
    pub flap_impulse: f64,
    /// Obstacle scroll speed in columns per second.
    pub obstacle_speed: f64,
    /// Height of the passable gap in rows.
    pub gap_size: u16,
    /// Distance from the right edge the newest obstacle must travel before
    /// another one is spawned.
    pub spawn_distance: f64,
    pub gap_margin_top: u16,
    pub gap_margin_bottom: u16,
    /// Number of ticks between bird animation frames.
    pub animation_period: u32,
    /// Target wall-clock duration of one loop iteration.
    pub tick_budget: Duration,
    pub bird_glyphs: Vec<char>,
    pub min_width: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            time_scale: TIME_SCALE,
            flap_impulse: FLAP_IMPULSE,
            obstacle_speed: OBSTACLE_SPEED,
            gap_size: GAP_SIZE,
            spawn_distance: SPAWN_DISTANCE,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            animation_period: ANIMATION_PERIOD,
            tick_budget: Duration::from_millis(TICK_BUDGET_MS),
            bird_glyphs: BIRD_GLYPHS.to_vec(),
            min_width: MIN_VIEWPORT_WIDTH,
        }
    }
}

impl GameConfig {
    /// Smallest viewport height with at least one valid gap position.
    pub fn min_height(&self) -> u16 {
        self.gap_size + self.gap_margin_top + self.gap_margin_bottom + 1
    }

    /// Whether a viewport of this size satisfies the gap-fits precondition.
    pub fn fits(&self, width: u16, height: u16) -> bool {
        width >= self.min_width && height >= self.min_height()
    }

    /// Raise a viewport to the minimum playable size.
    pub fn clamp_viewport(&self, width: u16, height: u16) -> (u16, u16) {
        (width.max(self.min_width), height.max(self.min_height()))
    }

    /// Inclusive range of valid gap-start rows for a viewport height.
    ///
    /// The upper bound saturates at the lower one, so an undersized viewport
    /// yields a single row instead of an empty range.
    pub fn gap_start_range(&self, height: u16) -> (u16, u16) {
        let min = self.gap_margin_top;
        let max = height
            .saturating_sub(self.gap_size + self.gap_margin_bottom)
            .max(min);
        (min, max)
    }
}
