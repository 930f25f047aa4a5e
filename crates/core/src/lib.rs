//! Core demo logic - pure, deterministic, and testable
//!
//! This crate holds the heart, the battle box and the per-frame rules that
//! tie them together. It has **no dependencies** on terminal I/O: drawing
//! goes through the [`Canvas`] trait, which the term crate implements for its
//! framebuffer.
//!
//! # Module Structure
//!
//! - [`heart`]: the movable entity (float position, unit direction, speed, aspect ratio)
//! - [`arena`]: the bordered battle box and its interior bounds
//! - [`demo`]: action handling, stepping, clamping and drawing order
//! - [`snapshot`]: status line values
//! - [`canvas`]: the drawing seam
//!
//! # Example
//!
//! ```
//! use heart_box_core::Demo;
//! use heart_box_types::{Action, Direction};
//!
//! let mut demo = Demo::new(80, 24);
//! demo.apply_action(Action::Steer(Direction::Up));
//! for _ in 0..3 {
//!     demo.step();
//! }
//!
//! // speed 0.3 per frame upwards
//! assert!((demo.heart().y() - 11.1).abs() < 1e-4);
//! ```

pub mod arena;
pub mod canvas;
pub mod demo;
pub mod heart;
pub mod snapshot;

pub use heart_box_types as types;

pub use arena::{BattleBox, Interior};
pub use canvas::{Canvas, RecordingCanvas};
pub use demo::Demo;
pub use heart::Heart;
pub use snapshot::StatusSnapshot;
