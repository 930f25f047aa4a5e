//! File-backed logging.
//!
//! The terminal belongs to the demo, so log records never go to stdout or
//! stderr. When a log path is configured, `env_logger` writes to that file
//! (filter from `RUST_LOG`, default `info`); otherwise no logger is installed
//! and the `log` macros are no-ops.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Config;

/// Install the global logger if `config.log_path` is set.
///
/// Returns whether a logger was installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(Path::new(path))?;
    builder(file)
        .try_init()
        .context("a global logger is already installed")?;
    Ok(true)
}

/// Logger builder that writes to `file`.
pub fn builder(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Pipe(Box::new(file)));
    builder
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_no_logger() {
        assert!(!init(&Config::default()).unwrap());
    }

    #[test]
    fn records_land_in_the_file() {
        use log::{Level, LevelFilter, Log, Record};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heart.log");
        let logger = builder(open_log_file(&path).unwrap())
            .filter_level(LevelFilter::Trace)
            .build();

        logger.log(
            &Record::builder()
                .args(format_args!("steer up"))
                .level(Level::Info)
                .target("heart_box")
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("steer up"));
    }

    #[test]
    fn unopenable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("missing").join("heart.log");
        let err = open_log_file(&bad).unwrap_err();
        assert!(format!("{err}").contains("failed to open log file"));
    }
}
