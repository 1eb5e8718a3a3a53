pub mod celebration;
pub mod header;
pub mod help_overlay;
pub mod input_row;
pub mod rain;
pub mod stats_bar;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | stats | input | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // stats bar
            Constraint::Length(1), // input row
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    stats_bar::render_stats_bar(frame, app, chunks[1]);
    input_row::render_input_row(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Rain fills only cells that are still blank, so it must run after
    // the content widgets
    if app.rain_enabled {
        rain::render_rain(frame.buffer_mut(), area, &app.theme, app.rain_tick());
    }

    // Overlays (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.celebration.is_showing() {
        celebration::render_celebration(frame, app);
    }
}
