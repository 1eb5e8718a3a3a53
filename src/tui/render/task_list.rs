use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Hint shown when the store is empty.
pub const EMPTY_HINT: &str = " Nothing to do. Press a to add a task.";

/// Render the task list with cursor row and scroll handling
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.tasks.is_empty() {
        let empty = Paragraph::new(EMPTY_HINT).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    ensure_cursor_visible(app, visible_height);

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let checkbox_style = if task.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };

        let mut text_style = if task.completed {
            // Done rows read as crossed-off and faded
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        if is_cursor {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let text = truncate_to_width(&task.text, width.saturating_sub(6));
        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(checkbox, checkbox_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(text, text_style),
        ];

        // Pad the cursor line to full width so the selection reads as a bar
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Keep the cursor row inside the visible window.
fn ensure_cursor_visible(app: &mut App, visible_height: usize) {
    if visible_height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    // Fill the window when the list shrinks below the current offset
    let max_offset = app.tasks.len().saturating_sub(visible_height);
    if app.scroll_offset > max_offset {
        app.scroll_offset = max_offset;
    }
}
