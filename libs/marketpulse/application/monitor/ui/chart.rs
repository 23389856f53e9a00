//! Per-instrument line charts

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::domain::{format_price, Instrument, QuoteSeries};

use super::super::App;
use super::series_color;

/// Draw one chart per instrument, stacked in configured order
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    if app.instruments.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = app
        .instruments
        .iter()
        .map(|_| Constraint::Ratio(1, app.instruments.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, (instrument, series)) in app.instruments.iter().zip(app.series.iter()).enumerate() {
        draw_instrument(frame, instrument, series, series_color(i), chunks[i]);
    }
}

fn draw_instrument(
    frame: &mut Frame,
    instrument: &Instrument,
    series: &QuoteSeries,
    color: Color,
    area: Rect,
) {
    let title = format!(" {} ", instrument.name);

    // Empty until the first successful fetch
    if series.is_empty() {
        let placeholder = Paragraph::new(" waiting for first fetch...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(placeholder, area);
        return;
    }

    let points = series.chart_points();
    let last_price = series.last_price().unwrap_or_default();
    let (y_lo, y_hi) = series.padded_bounds().unwrap_or((0.0, 1.0));
    let (x_lo, x_hi) = x_bounds(&points);

    let legend = format!("Value: {}", format_price(last_price));
    let datasets = vec![Dataset::default()
        .name(legend)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points)];

    let (first_time, last_time) = series.time_bounds().unwrap_or_default();
    let x_labels = vec![
        Span::styled(
            first_time.format("%H:%M").to_string(),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            last_time.format("%H:%M").to_string(),
            Style::default().fg(Color::Gray),
        ),
    ];
    let y_labels = vec![
        Span::raw(format_price(y_lo)),
        Span::raw(format_price((y_lo + y_hi) / 2.0)),
        Span::raw(format_price(y_hi)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default().borders(Borders::ALL).title(Span::styled(
                title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        )
        .x_axis(
            Axis::default()
                .title("Time (UTC)")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_lo, x_hi])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Value / Points")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Chart x-range; a single-point series still gets a non-degenerate window
fn x_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let lo = points.first().map(|p| p.0).unwrap_or(0.0);
    let hi = points.last().map(|p| p.0).unwrap_or(1.0);
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 30.0, lo + 30.0)
    }
}
