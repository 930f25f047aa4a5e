//! Drawing seam between the pure demo state and a display.
//!
//! Core types only know how to describe what goes into a cell; a display
//! backend (the term crate's framebuffer, or a recorder in tests) decides how
//! that looks.

use crate::types::{CellPos, Paint};

/// A cell-addressed drawing surface.
///
/// Writes outside the surface must be ignored, never panic.
pub trait Canvas {
    fn put(&mut self, cell: CellPos, ch: char, paint: Paint);

    fn put_str(&mut self, cell: CellPos, text: &str, paint: Paint) {
        for (i, ch) in text.chars().enumerate() {
            self.put(CellPos::new(cell.x + i as i32, cell.y), ch, paint);
        }
    }
}

/// Records every write in order. Handy for tests and debugging.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingCanvas {
    pub writes: Vec<(CellPos, char, Paint)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write that landed on `cell`, if any.
    pub fn last_at(&self, cell: CellPos) -> Option<(char, Paint)> {
        self.writes
            .iter()
            .rev()
            .find(|(c, _, _)| *c == cell)
            .map(|(_, ch, paint)| (*ch, *paint))
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn put(&mut self, cell: CellPos, ch: char, paint: Paint) {
        self.writes.push((cell, ch, paint));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_advances_one_column_per_char() {
        let mut canvas = RecordingCanvas::new();
        canvas.put_str(CellPos::new(2, 5), "Qt", Paint::Text);
        assert_eq!(
            canvas.writes,
            vec![
                (CellPos::new(2, 5), 'Q', Paint::Text),
                (CellPos::new(3, 5), 't', Paint::Text),
            ]
        );
    }
}
