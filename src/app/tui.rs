//! Terminal presentation of a [`Session`].
//!
//! The frame is drawn with `▀` cells, two framebuffer rows per terminal row,
//! down-sampled to whatever area the terminal offers.

use super::input::InputHandler;
use super::session::Session;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::half_block_cells;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use log::debug;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::{Frame, Terminal};
use std::io;
use std::time::Duration;

/// Run the interactive loop until the session quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to. The
/// terminal is restored in every case.
pub fn run(session: &mut Session, poll: Duration) -> Result<()> {
    let _guard = TerminalGuard::new(session.title())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    event_loop(&mut terminal, session, poll)
}

/// Restores raw mode and the main screen on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn new(title: &str) -> Result<Self> {
        enable_raw_mode().map_err(|e| Error::Terminal(format!("failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, SetTitle(title)) {
            let _ = disable_raw_mode();
            return Err(Error::Terminal(format!("failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, session: &mut Session, poll: Duration) -> Result<()> {
    let input = InputHandler;

    while !session.should_quit() {
        terminal.draw(|frame| draw(frame, &*session))?;

        if event::poll(poll)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = input.handle_key(key, session.input_mode());
                    session.handle_action(action);
                }
                Event::Resize(width, height) => debug!("resized to {width}x{height}"),
                _ => {}
            }
        }

        session.step();
    }

    terminal.show_cursor()?;
    Ok(())
}

fn draw(frame: &mut Frame, session: &Session) {
    let [plot_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let block = Block::bordered().title(session.title());
    let inner = block.inner(plot_area);
    frame.render_widget(block, plot_area);
    frame.render_widget(FrameView::new(session.frame()), inner);

    let line = match session.prompt() {
        Some(text) => format!("Load: {text}_"),
        None => session.status().to_string(),
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().fg(Color::Gray)), status_area);
}

/// Widget showing a framebuffer scaled to its area.
pub struct FrameView<'a> {
    fb: &'a Framebuffer,
}

impl<'a> FrameView<'a> {
    /// Wrap a framebuffer.
    #[must_use]
    pub fn new(fb: &'a Framebuffer) -> Self {
        Self { fb }
    }
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let cols = u32::from(area.width);
        let cells = half_block_cells(self.fb, cols, u32::from(area.height));

        for (index, cell) in cells.iter().enumerate() {
            let x = area.x + (index as u32 % cols) as u16;
            let y = area.y + (index as u32 / cols) as u16;
            if let Some(target) = buf.cell_mut((x, y)) {
                target
                    .set_char('▀')
                    .set_fg(Color::Rgb(cell.top.r, cell.top.g, cell.top.b))
                    .set_bg(Color::Rgb(cell.bottom.r, cell.bottom.g, cell.bottom.b));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_frame_view_fills_area() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(0, 4, 8, 4, Rgba::BLUE);

        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        FrameView::new(&fb).render(area, &mut buf);

        let cell = &buf[(2, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_frame_view_ignores_empty_area() {
        let fb = Framebuffer::new(4, 4).unwrap();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        FrameView::new(&fb).render(area, &mut buf);
        assert!(buf.content.is_empty());
    }
}
