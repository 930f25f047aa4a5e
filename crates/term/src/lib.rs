//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the demo draws into a retained
//! framebuffer through the core [`Canvas`](crate::core::Canvas) trait, and
//! the renderer flushes only the cells that changed since the last frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Batch each frame into a single write
//! - Support 24-bit color plus reverse video for the box border

pub mod fb;
pub mod palette;
pub mod renderer;
pub mod scene;

pub use heart_box_core as core;
pub use heart_box_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use palette::style_for;
pub use renderer::{encode_diff_into, encode_enter_into, encode_full_into, TerminalRenderer};
pub use scene::{draw_instructions, StatusLine, Viewport, HELP_LINES, STATUS_ROW};
