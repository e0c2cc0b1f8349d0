//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui: the
//! clock face canvas and the commands bar beneath it.

mod canvas;
mod colors;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

pub use canvas::CellMetrics;

use canvas::draw_clock;
use status::draw_commands_bar;

/// Splits the terminal area into the clock face and the commands bar.
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0), // Clock face
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Area the clock face is drawn in, for a terminal of the given size.
pub fn clock_area(area: Rect) -> Rect {
    split(area).0
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let (face, bar) = split(frame.area());

    draw_clock(frame, face, &app.commands, app.metrics);
    draw_commands_bar(frame, bar, app);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_area_leaves_room_for_the_bar() {
        let area = clock_area(Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(0, 0, 80, 22));
    }
}
