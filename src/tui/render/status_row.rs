use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    if !app.show_key_hints {
        let blank = Paragraph::new(Line::from(Span::styled(
            " ".repeat(width),
            Style::default().bg(bg),
        )));
        frame.render_widget(blank, area);
        return;
    }

    let hints = match app.mode {
        Mode::Navigate => " a add   space toggle   d delete   ? help   q quit",
        Mode::Insert => " Enter add   Esc done",
    };

    let mut spans = vec![Span::styled(
        hints,
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let content_width = hints.chars().count();
    if content_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width),
            Style::default().bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn navigate_hints() {
        let app = test_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("a add"));
        assert!(output.contains("q quit"));
    }

    #[test]
    fn insert_hints() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Enter add"));
        assert!(output.contains("Esc done"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = test_app();
        app.show_key_hints = false;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output.trim(), "");
    }
}
