//! Keyboard Input Handler
//!
//! Edits the picker's search text, moves the highlight, selects, submits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('s') if ctrl => {
            app.submitted = Some(app.form.submit());
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    // Plain form: nothing else is interactive
    let Some(control) = app.control.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) if !ctrl => {
            let mut query = control.query().to_string();
            query.push(c);
            control.on_input(&query, now);
        }
        KeyCode::Backspace => {
            let mut query = control.query().to_string();
            if query.pop().is_some() {
                control.on_input(&query, now);
            }
        }
        KeyCode::Char('u') if ctrl => {
            control.on_input("", now);
        }
        KeyCode::Down => control.highlight_next(),
        KeyCode::Up => control.highlight_previous(),
        KeyCode::Enter => {
            if let Some(option) = control.select_highlighted() {
                tracing::debug!(value = %option.value, "candidate selected");
            }
        }
        _ => {}
    }
}
