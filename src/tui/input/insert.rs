use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{
    next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left, word_boundary_right,
};

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Enter) => submit(app),

        // Emacs-style line edits
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => app.input_cursor = 0,
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = app.input.len()
        }
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.input.drain(..app.input_cursor);
            app.input_cursor = 0;
        }
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
            let start = word_boundary_left(&app.input, app.input_cursor);
            app.input.drain(start..app.input_cursor);
            app.input_cursor = start;
        }

        (m, KeyCode::Left) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = word_boundary_left(&app.input, app.input_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = word_boundary_right(&app.input, app.input_cursor);
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input.len(),

        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(prev..app.input_cursor);
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(app.input_cursor..next);
            }
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            if !c.is_control() {
                app.input.insert(app.input_cursor, c);
                app.input_cursor += c.len_utf8();
            }
        }

        _ => {}
    }
}

/// Submit the buffer to the store. Blank text is a silent no-op that keeps
/// the buffer; on success the buffer clears and the mode stays Insert so
/// several tasks can be typed in a row.
fn submit(app: &mut App) {
    if app.tasks.add(&app.input).is_some() {
        app.cursor = app.tasks.len() - 1;
        app.note_change();
        app.input.clear();
        app.input_cursor = 0;
    }
}
