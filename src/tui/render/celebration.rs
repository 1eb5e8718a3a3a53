use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

pub const CELEBRATION_TITLE: &str = "🎉 Congratulations! 🎉";
pub const CELEBRATION_TEXT: &str = "You have completed all your tasks!";

/// Render the celebration popup shown when every task is done
pub fn render_celebration(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect_fixed(42, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            CELEBRATION_TITLE,
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            CELEBRATION_TEXT,
            Style::default().fg(theme.green),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn popup_shows_both_lines() {
        let app = test_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render_celebration(frame, &app);
        });
        assert!(output.contains("Congratulations!"));
        assert!(output.contains(CELEBRATION_TEXT));
    }

    #[test]
    fn popup_fits_narrow_terminal() {
        let app = test_app();
        // Should clamp to the frame rather than panic
        let output = render_to_string(30, 5, |frame, _area| {
            render_celebration(frame, &app);
        });
        assert!(output.contains("Congratulations"));
    }
}
