use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything that closes it
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Char('a') | KeyCode::Char('i') => app.mode = Mode::Insert,

        KeyCode::Char('j') | KeyCode::Down => {
            if !app.tasks.is_empty() {
                app.cursor = (app.cursor + 1).min(app.tasks.len() - 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = app.tasks.len().saturating_sub(1),

        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => toggle_selected(app),
        KeyCode::Char('d') | KeyCode::Delete => delete_selected(app),

        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

fn toggle_selected(app: &mut App) {
    if let Some(id) = app.selected_id()
        && app.tasks.toggle(id)
    {
        app.note_change();
    }
}

fn delete_selected(app: &mut App) {
    if let Some(id) = app.selected_id()
        && app.tasks.delete(id)
    {
        app.note_change();
    }
}
