//! Battle box - the bordered region the heart lives in.
//!
//! The box is drawn once and only redrawn after `set_needs_redraw`.
//! Its border is a reverse-video frame: one row thick at the top and bottom,
//! two columns thick on each side so it looks as heavy as the rows do.

use crate::canvas::Canvas;
use crate::types::{CellPos, Paint};

/// Inclusive bounds of the cells the heart may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interior {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Interior {
    /// Pin `(x, y)` into the bounds, each axis on its own.
    ///
    /// Never panics, even for a degenerate box where `min > max`.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            clamp_axis(x, self.min_x, self.max_x),
            clamp_axis(y, self.min_y, self.max_y),
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

fn clamp_axis(v: f32, min: f32, max: f32) -> f32 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Axis-aligned bordered rectangle. Dimensions are fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleBox {
    origin: CellPos,
    width: i32,
    height: i32,
    needs_redraw: bool,
}

impl BattleBox {
    /// Create a box with top-left corner at `origin`.
    ///
    /// Non-positive sizes are raised to 1.
    pub fn new(origin: CellPos, width: i32, height: i32) -> Self {
        Self {
            origin,
            width: width.max(1),
            height: height.max(1),
            needs_redraw: true,
        }
    }

    /// Paint the border if it is dirty, then mark it clean.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        if !self.needs_redraw {
            return;
        }

        let CellPos { x, y } = self.origin;
        let (w, h) = (self.width, self.height);

        for dx in -1..=w + 1 {
            canvas.put(CellPos::new(x + dx, y), ' ', Paint::Border);
            canvas.put(CellPos::new(x + dx, y + h), ' ', Paint::Border);
        }

        for dy in 0..=h {
            for col in [x - 1, x, x + w, x + w + 1] {
                canvas.put(CellPos::new(col, y + dy), ' ', Paint::Border);
            }
        }

        self.needs_redraw = false;
    }

    pub fn set_needs_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn origin(&self) -> CellPos {
        self.origin
    }

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cells strictly inside the border: `origin + 1 ..= origin + size - 1`.
    pub fn interior(&self) -> Interior {
        Interior {
            min_x: (self.origin.x + 1) as f32,
            max_x: (self.origin.x + self.width - 1) as f32,
            min_y: (self.origin.y + 1) as f32,
            max_y: (self.origin.y + self.height - 1) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use std::collections::HashSet;

    #[test]
    fn draws_once_until_invalidated() {
        let mut bx = BattleBox::new(CellPos::new(10, 5), 4, 3);
        let mut canvas = RecordingCanvas::new();

        bx.draw(&mut canvas);
        assert!(!canvas.writes.is_empty());
        assert!(!bx.needs_redraw());

        canvas.clear();
        bx.draw(&mut canvas);
        assert!(canvas.writes.is_empty());

        bx.set_needs_redraw();
        bx.draw(&mut canvas);
        assert!(!canvas.writes.is_empty());
    }

    #[test]
    fn border_covers_expected_cells_only() {
        let mut bx = BattleBox::new(CellPos::new(10, 5), 4, 3);
        let mut canvas = RecordingCanvas::new();
        bx.draw(&mut canvas);

        let painted: HashSet<CellPos> = canvas.writes.iter().map(|(c, _, _)| *c).collect();
        assert!(canvas.writes.iter().all(|(_, ch, p)| *ch == ' ' && *p == Paint::Border));

        // Top row spans x-1 ..= x+w+1.
        for x in 9..=15 {
            assert!(painted.contains(&CellPos::new(x, 5)));
            assert!(painted.contains(&CellPos::new(x, 8)));
        }
        // Double-thick side columns.
        for y in 5..=8 {
            for x in [9, 10, 14, 15] {
                assert!(painted.contains(&CellPos::new(x, y)));
            }
        }
        // Interior untouched.
        for y in 6..=7 {
            for x in 11..=13 {
                assert!(!painted.contains(&CellPos::new(x, y)));
            }
        }
        assert_eq!(painted.len(), 7 * 2 + 4 * 2);
    }

    #[test]
    fn interior_excludes_border() {
        let bx = BattleBox::new(CellPos::new(20, 4), 40, 16);
        let inner = bx.interior();
        assert_eq!((inner.min_x, inner.max_x), (21.0, 59.0));
        assert_eq!((inner.min_y, inner.max_y), (5.0, 19.0));
    }

    #[test]
    fn clamp_is_per_axis_and_idempotent() {
        let inner = BattleBox::new(CellPos::new(0, 0), 10, 6).interior();
        let once = inner.clamp(-3.5, 2.25);
        assert_eq!(once, (1.0, 2.25));
        assert_eq!(inner.clamp(once.0, once.1), once);

        let corner = inner.clamp(100.0, -100.0);
        assert_eq!(corner, (9.0, 1.0));
        assert!(inner.contains(corner.0, corner.1));
    }

    #[test]
    fn degenerate_box_does_not_panic() {
        let inner = BattleBox::new(CellPos::new(0, 0), 1, 0).interior();
        let (x, y) = inner.clamp(7.0, -7.0);
        assert!(x.is_finite() && y.is_finite());
    }
}
