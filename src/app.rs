//! Application state and logic.
//!
//! Ties the clock renderer to the terminal: frames are rendered on demand,
//! each one re-arms the redraw timer, and input actions may force a frame or
//! a layout change.

use std::time::Duration;

use log::{debug, info};
use ratatui::layout::Rect;

use crate::clock::{
    Clock, ClockRenderer, DrawCommand, RenderHost, SystemClock, TextBounds, TimeSample,
};
use crate::config::Config;
use crate::event::Action;
use crate::scheduler::RedrawTimer;
use crate::ui::{self, CellMetrics};

/// The terminal as seen by the renderer.
struct TerminalHost<'a> {
    timer: &'a mut RedrawTimer,
    metrics: CellMetrics,
}

impl RenderHost for TerminalHost<'_> {
    fn measure_text(&self, text: &str, _font_size: f64) -> TextBounds {
        // Terminal glyphs are one cell each, whatever the font size
        self.metrics.measure(text)
    }

    fn schedule_redraw(&mut self, delay: Duration) {
        self.timer.schedule(delay);
    }
}

/// Main application state.
pub struct App {
    renderer: ClockRenderer,
    clock: Box<dyn Clock>,
    timer: RedrawTimer,
    /// Virtual pixel size of a terminal cell
    pub metrics: CellMetrics,
    /// Commands of the most recent frame
    pub commands: Vec<DrawCommand>,
    /// Time shown by the most recent frame
    pub time: TimeSample,
    /// Set once the user asked to quit
    pub should_quit: bool,
}

impl App {
    /// Creates the application for a terminal of the given size.
    ///
    /// The clock layout is derived right away from the face area.
    pub fn new(config: &Config, terminal: Rect, timer: RedrawTimer) -> Self {
        let metrics = CellMetrics::new(config.pixels_per_dot);
        let (width, height) = metrics.surface_size(ui::clock_area(terminal));
        let renderer = ClockRenderer::new(width, height, config.density)
            .with_redraw_delay(config.redraw_delay);

        info!(
            "Clock surface {}x{} px, radius {}, redraw every {:?}",
            width,
            height,
            renderer.layout().radius,
            config.redraw_delay
        );

        Self {
            renderer,
            clock: Box::new(SystemClock),
            timer,
            metrics,
            commands: Vec::new(),
            time: TimeSample::default(),
            should_quit: false,
        }
    }

    /// Replaces the time source.
    #[cfg(test)]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[cfg(test)]
    pub fn layout(&self) -> &crate::clock::LayoutConstants {
        self.renderer.layout()
    }

    /// Samples the clock once and renders a frame, re-arming the timer.
    pub fn render_frame(&mut self) {
        let time = self.clock.now();
        let mut host = TerminalHost {
            timer: &mut self.timer,
            metrics: self.metrics,
        };
        self.commands = self.renderer.render_frame(&mut host, &time);
        self.time = time;
    }

    /// Handles an action and returns true if a new frame should be drawn.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::Refresh => true,
            Action::Resize(columns, rows) => {
                self.resize(Rect::new(0, 0, columns, rows));
                true
            }
        }
    }

    /// Recomputes the layout for a new terminal size.
    pub fn resize(&mut self, terminal: Rect) {
        let (width, height) = self.metrics.surface_size(ui::clock_area(terminal));
        if !self.renderer.on_surface_resized(width, height) {
            debug!(
                "Resize to {}x{} cells left the surface unchanged",
                terminal.width, terminal.height
            );
        }
    }

    /// Stops the redraw loop.
    pub fn shutdown(&mut self) {
        if self.timer.is_pending() {
            debug!("Dropping pending redraw");
        }
        self.timer.cancel();
    }
}
