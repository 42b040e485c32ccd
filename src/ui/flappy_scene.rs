//! UI rendering for the Flappy Bird game.

use crate::core::constants::*;
use crate::game::types::{GameState, Obstacle};
use crate::surface::Surface;
use ratatui::style::{Color, Modifier, Style};

/// Render the full game scene. Does not present the frame.
pub fn render_flappy<S: Surface + ?Sized>(surface: &mut S, game: &GameState) {
    render_background(surface, game);

    surface.set_cell(
        game.bird.column as i32,
        game.bird.row(),
        game.bird_glyph(),
        Style::default().fg(Color::Yellow),
    );

    let obstacle_style = Style::default().fg(Color::Green);
    for obstacle in &game.obstacles {
        render_obstacle(surface, obstacle, game.width, game.height, obstacle_style);
    }

    surface.put_str(
        0,
        0,
        &format!("Score: {}", game.score),
        Style::default().fg(Color::White),
    );

    if game.game_over {
        render_game_over(surface, game);
    }
}

fn render_background<S: Surface + ?Sized>(surface: &mut S, game: &GameState) {
    let style = Style::default().fg(Color::Cyan);
    for y in 0..game.height {
        for x in (0..game.width).step_by(BACKGROUND_SPACING as usize) {
            surface.set_cell(x as i32, y as i32, BACKGROUND_GLYPH, style);
        }
    }
}

fn render_obstacle<S: Surface + ?Sized>(
    surface: &mut S,
    obstacle: &Obstacle,
    width: u16,
    height: u16,
    style: Style,
) {
    let x = obstacle.column();
    if x < 0 || x >= width as i32 {
        return;
    }

    for y in 0..obstacle.gap_start {
        let glyph = if y + 1 == obstacle.gap_start {
            OBSTACLE_TOP_GLYPH
        } else {
            OBSTACLE_GLYPH
        };
        surface.set_cell(x, y as i32, glyph, style);
    }

    for y in obstacle.gap_end..height {
        let glyph = if y == obstacle.gap_end {
            OBSTACLE_BOTTOM_GLYPH
        } else {
            OBSTACLE_GLYPH
        };
        surface.set_cell(x, y as i32, glyph, style);
    }
}

/// Centered game-over banner.
fn render_game_over<S: Surface + ?Sized>(surface: &mut S, game: &GameState) {
    let len = GAME_OVER_TEXT.chars().count() as i32;
    let x = ((game.width as i32 - len) / 2).max(0);
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    surface.put_str(x, (game.height / 2) as i32, GAME_OVER_TEXT, style);
}
