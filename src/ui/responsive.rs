//! Handling for terminals too small to play in.

use crate::core::config::GameConfig;
use crate::surface::Surface;
use ratatui::style::{Color, Modifier, Style};

/// Render a "terminal too small" message with the needed and current sizes.
pub fn render_too_small<S: Surface + ?Sized>(surface: &mut S, config: &GameConfig) {
    let (cols, rows) = surface.size();

    let lines = [
        (
            "Terminal too small".to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        (
            format!(
                "Need: {}x{}   Have: {}x{}",
                config.min_width,
                config.min_height(),
                cols,
                rows
            ),
            Style::default().fg(Color::DarkGray),
        ),
        (
            "Please resize your terminal.".to_string(),
            Style::default().fg(Color::White),
        ),
    ];

    let top = (rows as i32 - lines.len() as i32) / 2;
    for (i, (text, style)) in lines.iter().enumerate() {
        let x = ((cols as i32 - text.chars().count() as i32) / 2).max(0);
        surface.put_str(x, top.max(0) + i as i32, text, *style);
    }
}
