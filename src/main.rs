//! Heart box runner (default binary).
//!
//! Steer a heart around a bordered box with the arrow keys. Uses crossterm for
//! input and a retained framebuffer with diff flushing for output.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use log::info;

use heart_box::app::App;
use heart_box::config::Config;
use heart_box::logging;
use heart_box::term::{TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    info!("exiting");
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let (w, h) = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut app = App::new(Viewport::new(w, h), config);
    info!(
        "terminal {}x{}, box at ({}, {})",
        w,
        h,
        app.demo().arena().x(),
        app.demo().arena().y()
    );

    let frame = config.frame_interval();
    let mut events = Vec::new();

    loop {
        // Drain input without blocking.
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        if !app.tick(events.drain(..)) {
            break;
        }

        if app.take_full_redraw() {
            term.invalidate();
        }
        term.present(app.frame())?;

        thread::sleep(frame);
    }

    Ok(())
}
