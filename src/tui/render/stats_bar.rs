use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the stats bar. The counters are recomputed from the store on
/// every frame, never cached.
pub fn render_stats_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.stats();

    let sep = Span::styled("   ", Style::default().bg(bg));
    let spans = vec![
        Span::styled(
            format!(" Total Tasks: {}", stats.total),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        sep.clone(),
        Span::styled(
            format!("Completed: {}", stats.completed),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        sep,
        Span::styled(
            format!("Remaining: {}", stats.remaining),
            Style::default().fg(app.theme.red).bg(bg),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
