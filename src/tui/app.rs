use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Config;
use crate::model::TaskId;
use crate::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Confirm,
}

/// Which text the single edit buffer is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// Typing into the add-input row; commit appends to the store
    NewTask,
    /// Editing an existing task's title in place; commit renames it
    TaskTitle { id: TaskId },
}

/// A removal waiting on the yes/no prompt
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub id: TaskId,
    pub title: String,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the task list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Transient title buffer while editing; discarded on cancel or commit
    pub edit_buffer: String,
    /// Byte offset into edit_buffer, always on a grapheme boundary
    pub edit_cursor: usize,
    pub edit_target: Option<EditTarget>,
    /// Pending removal shown in the confirm popup
    pub confirm: Option<ConfirmDelete>,
    /// Blocking warning popup text (duplicate add); intercepts all input
    pub warning: Option<String>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: TaskStore::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            confirm: None,
            warning: None,
            status_message: None,
        }
    }

    /// Id of the task under the cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.store.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the list after removals
    pub fn clamp_cursor(&mut self) {
        let count = self.store.count();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

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
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
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
