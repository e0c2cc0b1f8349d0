//! Analog clock TUI
//!
//! An analog clock face drawn on a Braille canvas in the terminal.
//! Run with: analog-clock [-i|--interval <MS>] [--log-file <PATH>]

mod app;
mod clock;
mod config;
mod constants;
mod event;
mod scheduler;
mod ui;

use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::App;
use crate::config::{Command, Config};
use crate::event::{Action, EventHandler};
use crate::scheduler::{Redraw, RedrawTimer};

/// Sends log output to `path`, if given.
///
/// Logging to stderr would scribble over the clock, so without a log file
/// the logger stays uninitialised and log macros are no-ops.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let config = match config::parse_args(env::args().skip(1))? {
        Command::Run(config) => config,
        Command::Help => {
            config::print_usage();
            return Ok(());
        }
    };

    init_logging(config.log_file.as_deref())?;

    // Initialize the terminal
    let terminal = ratatui::init();

    // Run the application
    let result = run_app(terminal, &config).await;

    // Restore the terminal to its original state
    ratatui::restore();

    result
}

/// Main application loop.
///
/// 1. Render a frame, which re-arms the redraw timer
/// 2. Wait for the timer or for user input
/// 3. Repeat until the user quits, then cancel the timer and the reader
async fn run_app(mut terminal: ratatui::DefaultTerminal, config: &Config) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let (timer, redraws) = RedrawTimer::channel();
    let mut app = App::new(config, Rect::new(0, 0, size.width, size.height), timer);

    let (reader, actions) = EventHandler::new().spawn();

    let result = event_loop(&mut terminal, &mut app, redraws, actions).await;

    // Deterministic teardown: no redraw fires against a restored terminal
    app.shutdown();
    reader.stop().await;
    info!("Clock stopped");

    result
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    mut redraws: UnboundedReceiver<Redraw>,
    mut actions: UnboundedReceiver<Action>,
) -> Result<()> {
    loop {
        // Draw the clock
        app.render_frame();
        terminal
            .draw(|frame| ui::draw(frame, app))
            .context("Failed to draw UI")?;

        // Wait until something asks for another frame
        loop {
            tokio::select! {
                Some(Redraw) = redraws.recv() => break,
                action = actions.recv() => {
                    let Some(action) = action else {
                        // Reader gone, nothing left to drive the loop
                        return Ok(());
                    };
                    let redraw = app.handle_action(action);
                    if app.should_quit {
                        return Ok(());
                    }
                    if redraw {
                        break;
                    }
                }
                else => return Ok(()),
            }
        }
    }
}
