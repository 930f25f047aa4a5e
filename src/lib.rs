//! Heart box (workspace facade crate).
//!
//! Re-exports the workspace crates as `heart_box::{core,input,term,types}`
//! and adds the application layer: configuration, logging and the
//! per-frame [`app::App`].

pub mod app;
pub mod config;
pub mod logging;

pub use heart_box_core as core;
pub use heart_box_input as input;
pub use heart_box_term as term;
pub use heart_box_types as types;
