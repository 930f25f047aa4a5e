//! Frame-level glue between input events, demo state and the framebuffer.
//!
//! `App` does no terminal I/O itself: the binary polls events, hands each
//! frame's batch to [`App::tick`] and presents [`App::frame`]. That keeps the
//! whole per-frame pipeline testable.

use crossterm::event::Event;
use log::info;

use crate::config::Config;
use crate::core::Demo;
use crate::input::handle_key_event;
use crate::term::{draw_instructions, FrameBuffer, StatusLine, Viewport, STATUS_ROW};

pub struct App {
    demo: Demo,
    fb: FrameBuffer,
    viewport: Viewport,
    status: Option<StatusLine>,
    full_redraw: bool,
}

impl App {
    /// Lay out the demo for `viewport`, then draw the box and the help text.
    ///
    /// The status line is left out when the box reaches up to its row.
    pub fn new(viewport: Viewport, config: &Config) -> Self {
        let demo = Demo::new(viewport.width, viewport.height);
        let status_fits = demo.arena().y() > STATUS_ROW;
        if config.show_status && !status_fits {
            info!("status line hidden, box top at row {}", demo.arena().y());
        }

        let mut app = Self {
            demo,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            status: (config.show_status && status_fits).then(StatusLine::new),
            full_redraw: true,
        };
        app.draw_static();
        app
    }

    /// Run one frame: apply `events` in order, then step and draw.
    ///
    /// A quit event ends the frame on the spot. Later events are dropped and
    /// nothing is stepped or drawn. Returns whether the app is still running.
    pub fn tick(&mut self, events: impl IntoIterator<Item = Event>) -> bool {
        if !self.is_running() {
            return false;
        }
        for event in events {
            self.handle_event(event);
            if !self.is_running() {
                return false;
            }
        }
        self.advance();
        true
    }

    /// Apply one terminal event. Unmapped keys and other events are ignored.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(action) = handle_key_event(key) {
                    self.demo.apply_action(action);
                }
            }
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
    }

    /// Step the heart and draw everything that needs drawing.
    pub fn advance(&mut self) {
        self.demo.step();
        self.demo.draw(&mut self.fb);
        if let Some(status) = self.status.as_mut() {
            status.draw(&mut self.fb, &self.demo.status());
        }
    }

    /// The layout keeps its startup geometry; only the screen is rebuilt.
    fn resize(&mut self, width: u16, height: u16) {
        info!("terminal resized to {}x{}", width, height);
        self.viewport = Viewport::new(width, height);
        self.fb.resize(width, height);
        self.demo.arena_mut().set_needs_redraw();
        self.draw_static();
        if let Some(status) = self.status.as_mut() {
            status.invalidate();
        }
        self.full_redraw = true;
    }

    /// Box first, help text over it.
    fn draw_static(&mut self) {
        self.demo.arena_mut().draw(&mut self.fb);
        draw_instructions(&mut self.fb, self.viewport);
    }

    /// Whether the next present must repaint the whole screen. Resets the flag.
    pub fn take_full_redraw(&mut self) -> bool {
        std::mem::take(&mut self.full_redraw)
    }

    pub fn is_running(&self) -> bool {
        self.demo.is_running()
    }

    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
