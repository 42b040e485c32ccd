//! Character-grid display surfaces.
//!
//! The game draws through the [`Surface`] trait so the loop can run against a
//! real terminal or an in-memory grid.

mod memory;
mod terminal;

pub use memory::MemorySurface;
pub use terminal::TerminalSurface;

use crate::error::SurfaceError;
use crossterm::event::Event;
use ratatui::style::Style;

pub trait Surface {
    /// Current size in character cells as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Write one cell. Writes outside the surface are ignored.
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style);

    /// Start a new frame.
    fn clear(&mut self);

    /// Show the frame built since the last `clear`.
    fn present(&mut self) -> Result<(), SurfaceError>;

    /// Take the next pending input event without blocking.
    fn poll_event(&mut self) -> Option<Event>;

    /// Write a string left to right starting at `(x, y)`.
    fn put_str(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.set_cell(x + i as i32, y, ch, style);
        }
    }
}

/// Bounds check shared by the surfaces.
fn cell_position(x: i32, y: i32, (width, height): (u16, u16)) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return None;
    }
    Some((x as u16, y as u16))
}
