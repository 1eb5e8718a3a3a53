use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::grapheme_at;

/// Placeholder shown while the input buffer is empty.
pub const PLACEHOLDER: &str = "What needs to be done?";

/// Render the input row: prompt, buffer (or placeholder), edit cursor
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Insert;

    let prompt_style = if editing {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut spans = vec![Span::styled(" \u{203A} ", prompt_style)];

    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default().fg(app.theme.highlight).bg(bg);

    if app.input.is_empty() {
        if editing {
            spans.push(Span::styled("\u{258C}", cursor_style));
        }
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else if !editing {
        spans.push(Span::styled(app.input.clone(), text_style));
    } else {
        let cursor = app.input_cursor.min(app.input.len());
        if cursor >= app.input.len() {
            spans.push(Span::styled(app.input.clone(), text_style));
            spans.push(Span::styled("\u{258C}", cursor_style));
        } else {
            // Reverse-video the grapheme under the cursor
            let under = grapheme_at(&app.input, cursor);
            spans.push(Span::styled(app.input[..cursor].to_string(), text_style));
            spans.push(Span::styled(
                under.to_string(),
                text_style.add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(
                app.input[cursor + under.len()..].to_string(),
                text_style,
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
