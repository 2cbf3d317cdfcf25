use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::TaskId;
use crate::model::config::Config;
use crate::ops::todo_list::TodoList;

use super::input;
use super::render;
use super::theme::Theme;

/// How long the event loop waits for input before re-checking the undo timer
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing into the draft input
    Input,
    /// Moving over the task list
    Navigate,
}

/// Main application state
pub struct App {
    pub list: TodoList,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Index into `list.display_order()`
    pub cursor: usize,
    /// Byte offset of the caret inside the draft
    pub draft_cursor: usize,
}

impl App {
    pub fn new(list: TodoList, config: &Config) -> Self {
        App {
            list,
            mode: Mode::Input,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            draft_cursor: 0,
        }
    }

    /// The task under the list cursor
    pub fn cursor_task(&self) -> Option<TaskId> {
        self.list.display_order().get(self.cursor).copied()
    }

    /// Move the cursor onto `id` if it is visible
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(pos) = self.list.display_order().iter().position(|t| *t == id) {
            self.cursor = pos;
        }
    }

    /// Keep the cursor inside the visible rows
    pub fn clamp_cursor(&mut self) {
        let len = self.list.display_order().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Replace the draft through the controller and place the caret
    pub fn set_draft(&mut self, text: String, caret: usize) {
        self.draft_cursor = caret.min(text.len());
        self.list.update_draft(text);
    }

    /// Caret after a controller-side draft change (submit, edit seed, delete)
    pub fn sync_draft_cursor(&mut self) {
        self.draft_cursor = self.list.draft().len();
    }

    pub fn focus_input(&mut self) {
        self.mode = Mode::Input;
        self.sync_draft_cursor();
    }

    pub fn focus_list(&mut self) {
        if !self.list.is_empty() {
            self.mode = Mode::Navigate;
            self.clamp_cursor();
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(TodoList::from_config(config), config);
    info!(variant = %config.variant, "launching terminal ui");

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

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(tasks = app.list.tasks().len(), "terminal ui closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        app.list.tick(now);
        terminal.draw(|frame| render::render(frame, app, now))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, Instant::now());
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
    use crate::model::Variant;

    fn app(texts: &[&str]) -> App {
        let config = Config::default();
        let mut app = App::new(TodoList::from_config(&config), &config);
        for text in texts {
            app.list.update_draft(*text);
            app.list.submit();
        }
        app
    }

    #[test]
    fn starts_in_input_mode() {
        let app = app(&[]);
        assert_eq!(app.mode, Mode::Input);
        assert_eq!(app.list.variant(), Variant::Styled);
        assert_eq!(app.cursor_task(), None);
    }

    #[test]
    fn focus_list_needs_tasks() {
        let mut empty = app(&[]);
        empty.focus_list();
        assert_eq!(empty.mode, Mode::Input);

        let mut full = app(&["A"]);
        full.focus_list();
        assert_eq!(full.mode, Mode::Navigate);
        assert_eq!(full.cursor_task(), Some(TaskId(1)));
    }

    #[test]
    fn select_follows_display_order() {
        let mut app = app(&["A", "B", "C"]);
        app.list.toggle_done(TaskId(1));
        app.select_task(TaskId(1));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut app = app(&["A", "B"]);
        app.cursor = 1;
        app.list.delete(TaskId(2), Instant::now());
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn set_draft_clamps_caret() {
        let mut app = app(&[]);
        app.set_draft("abc".into(), 10);
        assert_eq!(app.draft_cursor, 3);
        assert_eq!(app.list.draft(), "abc");
    }
}
