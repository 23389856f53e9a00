//! UI widgets for the monitor

pub mod chart;
pub mod tape;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::App;

/// Per-instrument line palette, cycled by chart position
const SERIES_COLORS: [Color; 3] = [
    Color::Rgb(135, 206, 235), // sky blue
    Color::Rgb(255, 215, 0),   // gold
    Color::Rgb(152, 251, 152), // pale green
];

pub(crate) fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Charts
            Constraint::Length(3), // Ticker tape
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    chart::draw(frame, app, chunks[1]);
    tape::draw(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let last_update = app
        .last_fetch_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let header_text = format!(
        " {} | Instruments: {} | Last update: {}",
        app.clock_text,
        app.instruments.len(),
        last_update
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" MarketPulse Monitor "),
        );

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.status_message.as_deref().unwrap_or("");

    let footer_text = if status.is_empty() {
        " q=quit r=refresh".to_string()
    } else {
        format!(" q=quit r=refresh | {}", status)
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
