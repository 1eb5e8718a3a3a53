use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::commands::Cli;
use crate::io::config_io::{self, ConfigError, load_config};
use crate::io::watcher::ConfigWatcher;
use crate::model::{Config, Stats, TaskId, TaskList};

use super::celebrate::Celebration;
use super::input;
use super::render;
use super::theme::Theme;

/// How long the event loop waits for input before re-rendering.
/// Short enough that the rain animates and the celebration deadline
/// is noticed promptly.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Insert,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Insert-mode edit buffer
    pub input: String,
    /// Byte offset of the edit cursor in `input`
    pub input_cursor: usize,
    pub celebration: Celebration,
    /// Help overlay visible
    pub show_help: bool,
    pub rain_enabled: bool,
    pub show_key_hints: bool,
    /// `--no-rain` wins over the config on every reload
    pub rain_suppressed: bool,
    /// Where the config came from, for live reload
    pub config_path: Option<PathBuf>,
    pub watcher: Option<ConfigWatcher>,
    /// Rain phase clock
    pub started_at: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            tasks: TaskList::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            celebration: Celebration::new(),
            show_help: false,
            rain_enabled: config.ui.rain,
            show_key_hints: config.ui.show_key_hints,
            rain_suppressed: false,
            config_path: None,
            watcher: None,
            started_at: Instant::now(),
        }
    }

    /// Current derived statistics.
    pub fn stats(&self) -> Stats {
        Stats::of(&self.tasks)
    }

    /// Re-observe the stats after a store mutation and keep the cursor in
    /// range. Every add/toggle/delete must funnel through this.
    pub fn note_change(&mut self) {
        let stats = self.stats();
        self.celebration.observe(&stats, Instant::now());
        self.clamp_cursor();
    }

    pub fn clamp_cursor(&mut self) {
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    /// Id of the task under the cursor.
    pub fn selected_id(&self) -> Option<TaskId> {
        self.tasks.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Animation frame for the rain effect (one step per tick).
    pub fn rain_tick(&self) -> u64 {
        (self.started_at.elapsed().as_millis() / TICK_INTERVAL.as_millis()) as u64
    }

    /// Apply a (re)loaded config without touching task state.
    pub fn apply_config(&mut self, config: &Config) {
        self.theme = Theme::from_config(&config.ui);
        self.rain_enabled = config.ui.rain && !self.rain_suppressed;
        self.show_key_hints = config.ui.show_key_hints;
    }

    /// Re-read the config after the watcher reports a change. A file that
    /// has gone missing or unparseable keeps the current theme.
    fn reload_config(&mut self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Ok(config) = load_config(path) {
            self.apply_config(&config);
        }
    }
}

/// Load the config named by `--config`, or the default location if a file is
/// there. The default path is kept around even when no file exists yet so
/// the watcher picks up a config created while the app runs.
fn resolve_config(cli: &Cli) -> Result<(Config, Option<PathBuf>), ConfigError> {
    match &cli.config {
        Some(path) => Ok((load_config(path)?, Some(path.clone()))),
        None => match config_io::default_config_path() {
            Some(path) if path.exists() => Ok((load_config(&path)?, Some(path))),
            other => Ok((Config::default(), other)),
        },
    }
}

/// Run the TUI application
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_path) = resolve_config(cli)?;

    let mut app = App::new(&config);
    app.rain_suppressed = cli.no_rain;
    app.apply_config(&config);
    app.watcher = config_path
        .as_deref()
        .and_then(|path| ConfigWatcher::start(path).ok());
    app.config_path = config_path;

    if !io::stdout().is_tty() {
        return Err("stdout is not a terminal".into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.celebration.tick(Instant::now());
        if app.watcher.as_ref().is_some_and(|w| w.poll()) {
            app.reload_config();
        }

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_change_clamps_cursor_after_delete() {
        let mut app = App::new(&Config::default());
        app.tasks.add("one");
        app.tasks.add("two");
        app.cursor = 1;

        let id = app.tasks.tasks()[1].id;
        app.tasks.delete(id);
        app.note_change();
        assert_eq!(app.cursor, 0);

        let id = app.tasks.tasks()[0].id;
        app.tasks.delete(id);
        app.note_change();
        assert_eq!(app.cursor, 0);
        assert!(app.selected_id().is_none());
    }

    #[test]
    fn test_note_change_drives_celebration() {
        let mut app = App::new(&Config::default());
        let id = app.tasks.add("only").unwrap();
        app.note_change();
        assert!(!app.celebration.is_showing());

        app.tasks.toggle(id);
        app.note_change();
        assert!(app.celebration.is_showing());
    }

    #[test]
    fn test_apply_config_respects_rain_suppression() {
        let mut app = App::new(&Config::default());
        app.rain_suppressed = true;
        app.apply_config(&Config::default());
        assert!(!app.rain_enabled);

        app.rain_suppressed = false;
        app.apply_config(&Config::default());
        assert!(app.rain_enabled);
    }

    #[test]
    fn test_selected_id_follows_cursor() {
        let mut app = App::new(&Config::default());
        app.tasks.add("one");
        app.tasks.add("two");
        app.cursor = 1;
        assert_eq!(app.selected_id(), Some(app.tasks.tasks()[1].id));
    }
}
