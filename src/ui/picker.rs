//! Picker UI
//!
//! Renders the searchable selection: current selection, search box with
//! blinking cursor, status line and the candidate list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use dirpick::utils::truncate_to_width;
use dirpick::{QueryStatus, SearchSelect};

/// Status line text for the dropdown
fn status_text(control: &SearchSelect) -> (String, Color) {
    match control.status() {
        QueryStatus::Idle => (String::new(), Color::Gray),
        QueryStatus::TooShort { remaining } => (
            format!("Please enter {} or more characters", remaining),
            Color::Gray,
        ),
        QueryStatus::Searching => ("Searching…".to_string(), Color::Yellow),
        QueryStatus::Ready if control.candidates().is_empty() => {
            ("No results found".to_string(), Color::Gray)
        }
        QueryStatus::Ready => (
            format!("{} results - Enter to select", control.candidates().len()),
            Color::Gray,
        ),
        QueryStatus::Failed { message } => (message.clone(), Color::Red),
    }
}

/// Render the picker into `area`
pub fn render_picker(f: &mut Frame, area: Rect, label: &str, control: &SearchSelect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", label))
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current selection
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Status
            Constraint::Min(0),    // Candidates
        ])
        .split(inner);

    let width = inner.width as usize;

    let selection_line = match control.selection() {
        Some(option) => Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(Color::Gray)),
            Span::styled(
                truncate_to_width(&option.label, width.saturating_sub(10)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            truncate_to_width(control.placeholder(), width),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    };
    f.render_widget(Paragraph::new(selection_line), chunks[0]);

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);
    let input_line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(control.query(), Style::default().fg(Color::White)),
        Span::styled("█", cursor_style),
    ]);
    f.render_widget(Paragraph::new(input_line), chunks[1]);

    let (status, status_color) = status_text(control);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_to_width(&status, width),
            Style::default().fg(status_color),
        ))),
        chunks[2],
    );

    let items: Vec<ListItem> = control
        .candidates()
        .iter()
        .map(|candidate| {
            ListItem::new(Line::from(Span::raw(truncate_to_width(
                &candidate.display_label,
                width.saturating_sub(2),
            ))))
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(control.highlighted());
    f.render_stateful_widget(list, chunks[3], &mut state);
}
