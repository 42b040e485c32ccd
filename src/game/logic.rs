//! Game logic for the Flappy Bird simulation.

use super::types::GameState;
use rand::Rng;
use tracing::debug;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Floor,
    Obstacle,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Obstacles passed this tick.
    pub points: u32,
    /// A new obstacle was spawned.
    pub spawned: bool,
    /// Set on the tick the game ended.
    pub death: Option<DeathCause>,
}

/// Set the bird's velocity to the flap impulse. Ignored after game over.
pub fn apply_flap(game: &mut GameState) {
    if game.game_over {
        return;
    }
    game.bird.velocity = game.config.flap_impulse;
}

/// Advance the simulation by `dt` seconds.
/// Handles gravity, obstacle scrolling, scoring, collisions and the obstacle lifecycle.
pub fn process_tick<R: Rng>(game: &mut GameState, dt: f64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if game.game_over {
        return result;
    }

    if update_bird(game, dt) {
        result.death = Some(DeathCause::Floor);
    }

    let speed = game.config.obstacle_speed * dt;
    for obstacle in &mut game.obstacles {
        obstacle.x -= speed;
    }

    result.points = score_passed(game);

    if check_collisions(game) && result.death.is_none() {
        result.death = Some(DeathCause::Obstacle);
    }

    game.obstacles.retain(|o| o.x > 0.0);

    let spawn_threshold = game.width as f64 - game.config.spawn_distance;
    let should_spawn = game
        .obstacles
        .last()
        .map_or(true, |newest| newest.x < spawn_threshold);
    if should_spawn {
        game.spawn_obstacle(rng);
        result.spawned = true;
        if let Some(o) = game.obstacles.last() {
            debug!(x = o.x, gap_start = o.gap_start, gap_end = o.gap_end, "spawned obstacle");
        }
    }

    result
}

/// Integrate bird physics. Returns true if the bird hit the floor.
fn update_bird(game: &mut GameState, dt: f64) -> bool {
    let config = &game.config;
    let bird = &mut game.bird;

    bird.velocity += config.gravity * dt * config.time_scale;
    bird.y += bird.velocity;

    let period = config.animation_period.max(1);
    if game.animation_counter % period == 0 && !config.bird_glyphs.is_empty() {
        bird.frame = (bird.frame + 1) % config.bird_glyphs.len();
    }

    let floor = game.height.saturating_sub(1) as f64;
    if bird.y < 1.0 {
        // Ceiling bump
        bird.y = 1.0;
        bird.velocity = 0.0;
    } else if bird.y >= floor {
        bird.y = floor;
        game.game_over = true;
        return true;
    }
    false
}

/// Mark obstacles behind the bird as passed. Returns the points earned.
fn score_passed(game: &mut GameState) -> u32 {
    let bird_col = game.bird.column as f64;
    let mut points = 0;
    for obstacle in &mut game.obstacles {
        if !obstacle.passed && obstacle.x < bird_col {
            obstacle.passed = true;
            points += 1;
        }
    }
    game.score += points;
    points
}

/// Check if the bird overlaps any obstacle outside its gap.
fn check_collisions(game: &mut GameState) -> bool {
    let bird_col = game.bird.column as i32;
    let bird_row = game.bird.row();

    let hit = game
        .obstacles
        .iter()
        .any(|o| o.covers_column(bird_col) && o.blocks_row(bird_row));
    if hit {
        game.game_over = true;
    }
    hit
}
