//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used by every other crate in the
//! workspace: vectors, cell coordinates, input actions, paint kinds and the
//! tuning constants of the demo. Nothing here performs I/O.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SPEED` | 0.3 | Cells per frame along the direction vector |
//! | `SPEED_MIN` / `SPEED_MAX` | 0.05 / 1.0 | Speed range enforced by the controller |
//! | `SPEED_STEP` | 0.05 | Speed change per `[` / `]` press |
//! | `DEFAULT_ASPECT_RATIO` | 2.0 | Horizontal compensation factor |
//! | `ASPECT_RATIO_MIN` / `ASPECT_RATIO_MAX` | 1.0 / 5.0 | Aspect ratio range |
//! | `ASPECT_RATIO_STEP` | 0.2 | Aspect ratio change per `+` / `-` press |
//! | `BOX_WIDTH` x `BOX_HEIGHT` | 40 x 16 | Battle box size in cells |
//! | `TARGET_FPS` | 60 | Default frame rate |
//!
//! # Examples
//!
//! ```
//! use heart_box_types::{Direction, Vec2, BOX_WIDTH};
//!
//! let up = Direction::Up.vector();
//! assert_eq!(up, Vec2::new(0.0, -1.0));
//! assert_eq!(BOX_WIDTH, 40);
//! ```

use std::time::Duration;

/// Initial heart speed (cells per frame, vertical axis).
pub const DEFAULT_SPEED: f32 = 0.3;

/// Lowest speed reachable with `[`.
pub const SPEED_MIN: f32 = 0.05;

/// Highest speed reachable with `]`.
pub const SPEED_MAX: f32 = 1.0;

/// Speed change per key press.
pub const SPEED_STEP: f32 = 0.05;

/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_ASPECT_RATIO: f32 = 2.0;

/// Lowest aspect ratio reachable with `-`.
pub const ASPECT_RATIO_MIN: f32 = 1.0;

/// Highest aspect ratio reachable with `+`.
pub const ASPECT_RATIO_MAX: f32 = 5.0;

/// Aspect ratio change per key press.
pub const ASPECT_RATIO_STEP: f32 = 0.2;

/// Battle box width in cells.
pub const BOX_WIDTH: i32 = 40;

/// Battle box height in cells.
pub const BOX_HEIGHT: i32 = 16;

/// Default frame rate.
pub const TARGET_FPS: u32 = 60;

/// Glyph used for the heart.
pub const HEART_GLYPH: char = '◆';

/// Frame interval for a given frame rate (`1/60 s` ≈ 16.667 ms at 60 FPS).
///
/// A rate of zero is treated as one frame per second.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(fps.max(1)))
}

/// Continuous 2D vector in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector pointing the same way, or `None` for the zero vector.
    pub fn normalized(&self) -> Option<Vec2> {
        if self.is_zero() {
            return None;
        }
        let len = self.length();
        Some(Vec2::new(self.x / len, self.y / len))
    }

    /// Nearest terminal cell (halfway cases round away from zero).
    pub fn to_cell(&self) -> CellPos {
        CellPos::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// Integer terminal cell coordinate (column, row).
///
/// Signed so that layouts computed on tiny terminals can go off-screen
/// without wrapping; drawing simply skips such cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<CellPos> for Vec2 {
    fn from(cell: CellPos) -> Self {
        Vec2::new(cell.x as f32, cell.y as f32)
    }
}

/// Cardinal steering directions (one per arrow key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Axis-aligned unit vector. Screen rows grow downwards.
    pub fn vector(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Actions produced by the input layer and applied by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the loop after draining input.
    Quit,
    /// Flip between moving and stopped.
    ToggleMotion,
    /// Set a cardinal direction and start moving.
    Steer(Direction),
    /// Aspect ratio up by one step.
    IncreaseAspectRatio,
    /// Aspect ratio down by one step.
    DecreaseAspectRatio,
    /// Speed up by one step.
    IncreaseSpeed,
    /// Speed down by one step.
    DecreaseSpeed,
}

/// What a drawn cell represents. Renderers map each kind to a concrete style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    /// Erased cell.
    #[default]
    Blank,
    /// The heart glyph (red on black).
    Heart,
    /// Battle box border (reverse video).
    Border,
    /// Help text.
    Text,
    /// Status line text.
    Status,
}
