use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dirpick::form::FieldState;

/// Render a plain (read-only) form field
pub fn render_field(f: &mut Frame, area: Rect, field: &FieldState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label))
        .style(Style::default().fg(Color::Gray));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        field.value.as_str(),
        Style::default().fg(Color::White),
    )))
    .block(block);

    f.render_widget(paragraph, area);
}
