//! Heart module - the movable entity
//!
//! The heart keeps a floating-point position so sub-cell speeds accumulate
//! smoothly, and only snaps to a terminal cell when drawn.
//! Horizontal movement is multiplied by the aspect ratio because terminal
//! cells are taller than they are wide; vertical movement is not.

use crate::canvas::Canvas;
use crate::types::{
    CellPos, Paint, Vec2, DEFAULT_ASPECT_RATIO, DEFAULT_SPEED, HEART_GLYPH,
};

/// The steerable heart.
///
/// `direction` is always either the zero vector or unit length.
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    position: Vec2,
    last_drawn: CellPos,
    direction: Vec2,
    speed: f32,
    aspect_ratio: f32,
    moving: bool,
}

impl Heart {
    /// Create a stopped heart at `start` with default speed and aspect ratio.
    pub fn new(start: CellPos) -> Self {
        Self {
            position: start.into(),
            last_drawn: start,
            direction: Vec2::ZERO,
            speed: DEFAULT_SPEED,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            moving: false,
        }
    }

    /// Advance one frame along the current direction.
    pub fn update(&mut self) {
        if !self.moving {
            return;
        }
        self.position.x += self.direction.x * self.speed * self.aspect_ratio;
        self.position.y += self.direction.y * self.speed;
    }

    /// Point the heart along `(dx, dy)` and start moving.
    ///
    /// The zero vector is ignored: direction and moving flag stay as they were.
    pub fn set_direction(&mut self, dx: f32, dy: f32) {
        if let Some(unit) = Vec2::new(dx, dy).normalized() {
            self.direction = unit;
            self.moving = true;
        }
    }

    pub fn set_aspect_ratio(&mut self, ratio: f32) {
        self.aspect_ratio = ratio;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn stop(&mut self) {
        self.moving = false;
    }

    pub fn start(&mut self) {
        self.moving = true;
    }

    pub fn toggle(&mut self) {
        if self.moving {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Render the heart at its rounded cell.
    ///
    /// When the cell changed since the last draw, the old cell is blanked
    /// first. When it did not, the glyph is written again anyway since other
    /// drawables may have painted over it.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        let current = self.position.to_cell();
        if current != self.last_drawn {
            canvas.put(self.last_drawn, ' ', Paint::Blank);
            self.last_drawn = current;
        }
        canvas.put(current, HEART_GLYPH, Paint::Heart);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn last_drawn(&self) -> CellPos {
        self.last_drawn
    }
}
