//! Commands bar rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::clock::TimeSample;

use super::colors;

/// Keyboard shortcuts shown in the bar.
const COMMANDS: [(&str, &str); 2] = [("q", "quit"), ("r", "redraw")];

/// Draws the commands bar with the key hints and the sampled time.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(inner);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];
    for (i, (key, desc)) in COMMANDS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), halves[0]);

    let readout = Paragraph::new(Span::styled(
        format_time(&app.time),
        Style::default().fg(colors::PRIMARY).bold(),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(readout, halves[1]);
}

/// Formats a time sample as `HH:MM:SS `.
fn format_time(time: &TimeSample) -> String {
    format!("{:02}:{:02}:{:02} ", time.hour, time.minute, time.second)
}
