use super::{cell_position, Surface};
use crate::error::SurfaceError;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::collections::VecDeque;

/// In-memory surface with a scripted event queue, for driving the game without
/// a terminal.
#[derive(Debug)]
pub struct MemorySurface {
    width: u16,
    height: u16,
    buffer: Buffer,
    presented: Buffer,
    events: VecDeque<Event>,
    frames: usize,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        Self {
            width,
            height,
            buffer: Buffer::empty(area),
            presented: Buffer::empty(area),
            events: VecDeque::new(),
            frames: 0,
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn push_key(&mut self, code: KeyCode) {
        self.push_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Change the surface size and queue the matching resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.push_event(Event::Resize(width, height));
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Glyph at `(x, y)` in the last presented frame.
    pub fn cell(&self, x: u16, y: u16) -> Option<char> {
        let area = self.presented.area;
        if x >= area.width || y >= area.height {
            return None;
        }
        self.presented.get(x, y).symbol().chars().next()
    }

    /// One row of the last presented frame.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.presented.area.width)
            .filter_map(|x| self.cell(x, y))
            .collect()
    }

    /// The whole last presented frame, one line per row.
    pub fn frame_text(&self) -> String {
        (0..self.presented.area.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn presented(&self) -> &Buffer {
        &self.presented
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style) {
        let area = self.buffer.area;
        if let Some((x, y)) = cell_position(x, y, (area.width, area.height)) {
            self.buffer.get_mut(x, y).set_char(glyph).set_style(style);
        }
    }

    fn clear(&mut self) {
        self.buffer = Buffer::empty(Rect::new(0, 0, self.width, self.height));
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.presented = self.buffer.clone();
        self.frames += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}
