//! Runtime configuration from environment variables.
//!
//! - `HEART_BOX_FPS`: target frame rate (default 60, clamped to 1..=240)
//! - `HEART_BOX_STATUS`: set to "0", "false" or "off" to hide the status line
//! - `HEART_BOX_LOG_PATH`: append log records to this file (logging is off when unset)
//!
//! Unparsable values fall back to their defaults.

use std::env;
use std::time::Duration;

use crate::types::{frame_interval, TARGET_FPS};

pub const ENV_FPS: &str = "HEART_BOX_FPS";
pub const ENV_STATUS: &str = "HEART_BOX_STATUS";
pub const ENV_LOG_PATH: &str = "HEART_BOX_LOG_PATH";

const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fps: u32,
    pub show_status: bool,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: TARGET_FPS,
            show_status: true,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let fps = lookup(ENV_FPS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|fps| fps.clamp(1, MAX_FPS))
            .unwrap_or(defaults.fps);

        let show_status = lookup(ENV_STATUS)
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(defaults.show_status);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            fps,
            show_status,
            log_path,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        frame_interval(self.fps)
    }
}
