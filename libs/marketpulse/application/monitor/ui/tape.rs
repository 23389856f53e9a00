//! Scrolling ticker tape strip

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::App;

/// Draw the tape strip: the slice of the tape text visible at the current
/// offset, or a blank strip while the tape is waiting
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let inner_width = area.width.saturating_sub(2);

    let text = match app.tape.visible_offset() {
        Some(offset) => visible_slice(&app.tape_text(), offset, inner_width),
        None => String::new(),
    };

    let tape = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Ticker "));

    frame.render_widget(tape, area);
}

/// Portion of the tape text inside the strip when the text begins at
/// `offset` columns from the left edge (negative once the head has
/// scrolled out)
fn visible_slice(text: &str, offset: i64, width: u16) -> String {
    let width = width as i64;
    if width <= 0 || offset >= width {
        return String::new();
    }

    if offset >= 0 {
        let take = (width - offset) as usize;
        let mut slice = " ".repeat(offset as usize);
        slice.extend(text.chars().take(take));
        slice
    } else {
        let skip = (-offset) as usize;
        text.chars().skip(skip).take(width as usize).collect()
    }
}
