use super::{cell_position, Surface};
use crate::error::SurfaceError;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, style::Style, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::warn;

/// Full-screen terminal surface.
///
/// Frames are composed in an off-screen buffer and handed to ratatui on
/// `present`, which only writes the cells that changed. Input is read on a
/// background thread and handed over through a channel.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    buffer: Buffer,
    events: Receiver<Event>,
}

impl TerminalSurface {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    /// Everything is restored on drop.
    pub fn new() -> Result<Self, SurfaceError> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).map_err(SurfaceError::Create)?;
        let size = terminal.size().map_err(SurfaceError::Create)?;
        let events = spawn_input_thread().map_err(SurfaceError::Create)?;

        let mut surface = Self {
            terminal,
            buffer: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            events,
        };
        surface.init().map_err(SurfaceError::Init)?;
        Ok(surface)
    }

    fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        self.terminal.clear()
    }

    fn restore() -> io::Result<()> {
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(LeaveAlternateScreen)?;
        stdout.execute(Show)?;
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.buffer = Buffer::empty(Rect::new(0, 0, width, height));
    }
}

/// Forward terminal events to the game loop. The thread blocks on the
/// terminal and exits once the receiver is gone.
fn spawn_input_thread() -> io::Result<Receiver<Event>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            while let Ok(event) = event::read() {
                if tx.send(event).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        (self.buffer.area.width, self.buffer.area.height)
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style) {
        if let Some((x, y)) = cell_position(x, y, self.size()) {
            self.buffer.get_mut(x, y).set_char(glyph).set_style(style);
        }
    }

    fn clear(&mut self) {
        self.buffer.reset();
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        let buffer = &self.buffer;
        self.terminal.draw(|frame| {
            let area = frame.size().intersection(buffer.area);
            let out = frame.buffer_mut();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    *out.get_mut(x, y) = buffer.get(x, y).clone();
                }
            }
        })?;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<Event> {
        let event = self.events.try_recv().ok()?;
        if let Event::Resize(width, height) = event {
            self.resize(width, height);
        }
        Some(event)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = Self::restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}
