//! Scene text: help lines and the status line.
//!
//! This module is pure (no I/O). It draws through [`Canvas`], so it can be
//! unit-tested with a recorder or a framebuffer.

use crate::core::{Canvas, StatusSnapshot};
use crate::types::{CellPos, Paint};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Static help text, drawn once near the bottom of the screen.
pub const HELP_LINES: [&str; 2] = [
    "Arrow keys to set direction, Space to stop/start",
    "Q to quit, +/- aspect ratio, [/] speed",
];

const LEFT_MARGIN: i32 = 2;
/// Screen row the status line is drawn on.
pub const STATUS_ROW: i32 = 1;

/// Draw the help lines at rows `height - 3` and `height - 2`.
pub fn draw_instructions(canvas: &mut impl Canvas, viewport: Viewport) {
    let h = i32::from(viewport.height);
    for (i, line) in HELP_LINES.iter().enumerate() {
        canvas.put_str(CellPos::new(LEFT_MARGIN, h - 3 + i as i32), line, Paint::Text);
    }
}

/// Status line that only repaints when its text changes.
///
/// Text is padded to the widest line drawn so far, so a shorter line fully
/// covers a longer one.
#[derive(Debug, Default, Clone)]
pub struct StatusLine {
    last: Option<String>,
    width: usize,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `snap` if it renders differently from the last draw.
    ///
    /// Returns whether anything was written.
    pub fn draw(&mut self, canvas: &mut impl Canvas, snap: &StatusSnapshot) -> bool {
        let text = snap.line();
        if self.last.as_deref() == Some(text.as_str()) {
            return false;
        }
        self.width = self.width.max(text.chars().count());
        let padded = format!("{:<width$}", text, width = self.width);
        canvas.put_str(CellPos::new(LEFT_MARGIN, STATUS_ROW), &padded, Paint::Status);
        self.last = Some(text);
        true
    }

    /// Forget the last drawn text so the next `draw` repaints.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
