use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use dirpick::form::FormItem;

use super::{form, picker};
use crate::App;

const FIELD_HEIGHT: u16 = 3;
const PICKER_MIN_HEIGHT: u16 = 8;

/// Main render function: form items top to bottom, key legend at the bottom
pub fn render(f: &mut Frame, app: &App) {
    let items = app.form.items();

    let mut constraints: Vec<Constraint> = items
        .iter()
        .map(|item| match item {
            FormItem::Field(_) => Constraint::Length(FIELD_HEIGHT),
            FormItem::Control(_) => Constraint::Min(PICKER_MIN_HEIGHT),
        })
        .collect();
    // Absorbs leftover space when there is no picker
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    for (item, area) in items.iter().zip(chunks.iter()) {
        match item {
            FormItem::Field(field) => form::render_field(f, *area, field),
            FormItem::Control(control_id) => {
                if let Some(control) = app.control.as_ref().filter(|c| c.id() == control_id) {
                    let label = app
                        .form
                        .label(&app.target_field)
                        .unwrap_or_else(|| app.target_field.clone());
                    picker::render_picker(f, *area, &label, control);
                }
            }
        }
    }

    let legend = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" select  "),
        Span::styled("^S", Style::default().fg(Color::Yellow)),
        Span::raw(" submit  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);
    if let Some(area) = chunks.last() {
        f.render_widget(Paragraph::new(legend), *area);
    }
}

