use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use crossterm::event::{self, DisableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::data_io;
use crate::io::watcher::DataWatcher;
use crate::model::{Config, Task};
use crate::ops::day_marks::tasks_due_on;

use super::calendar::{CalendarOutcome, CalendarPopup};
use super::input;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    pub config: Config,
    /// The externally owned task collection. Reloaded when the watcher
    /// reports a change; never mutated here.
    pub tasks: Vec<Task>,
    pub theme: Theme,
    /// The externally owned selected date. The calendar popup reads it
    /// and asks for changes via `CalendarOutcome::Picked`.
    pub selected_date: NaiveDate,
    /// Cursor into the day view task list.
    pub list_cursor: usize,
    /// The month calendar popup; `None` is the closed state (nothing
    /// rendered, no mouse capture).
    pub calendar: Option<CalendarPopup>,
    /// Screen region of the month-text trigger, recorded by the renderer.
    /// Clicks here are excluded from outside-dismissal.
    pub trigger_area: Rect,
    pub should_quit: bool,
    /// When false (tests), opening the calendar skips terminal mouse
    /// capture.
    pub capture_mouse: bool,
}

impl App {
    pub fn new(config: Config, tasks: Vec<Task>, today: NaiveDate) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            config,
            tasks,
            theme,
            selected_date: today,
            list_cursor: 0,
            calendar: None,
            trigger_area: Rect::default(),
            should_quit: false,
            capture_mouse: false,
        }
    }

    /// Tasks due on the selected date, in file order.
    pub fn day_tasks(&self) -> Vec<&Task> {
        tasks_due_on(&self.tasks, self.selected_date)
    }

    /// Open the calendar popup, seeded on the selected date. A no-op
    /// while already open, so rapid toggles cannot double-acquire mouse
    /// capture.
    pub fn open_calendar(&mut self) {
        if self.calendar.is_some() {
            return;
        }
        let mut popup = CalendarPopup::new(self.selected_date);
        if self.capture_mouse {
            popup.enable_capture();
        }
        self.calendar = Some(popup);
    }

    /// Close the calendar popup. Dropping it releases mouse capture.
    pub fn close_calendar(&mut self) {
        self.calendar = None;
    }

    /// Apply a signal from the popup: a pick updates the selected date
    /// first, then closes; a dismissal just closes.
    pub fn apply_calendar_outcome(&mut self, outcome: CalendarOutcome) {
        match outcome {
            CalendarOutcome::Picked(date) => {
                self.selected_date = date;
                self.list_cursor = 0;
                self.close_calendar();
            }
            CalendarOutcome::Dismissed => self.close_calendar(),
        }
    }

    /// Re-read config and tasks after an external edit. A file that no
    /// longer parses keeps the previous state; a bad save mid-edit must
    /// not blank the running UI.
    pub fn reload(&mut self, data_dir: &Path) {
        if let Ok(config) = data_io::load_config(data_dir) {
            self.theme = Theme::from_config(&config.ui);
            self.config = config;
        }
        if let Ok(tasks) = data_io::load_tasks(&data_io::tasks_path(data_dir, &self.config)) {
            self.tasks = tasks;
        }
        let len = self.day_tasks().len();
        if self.list_cursor >= len {
            self.list_cursor = len.saturating_sub(1);
        }
    }
}

/// Run the TUI application
pub fn run(dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = match dir {
        Some(d) => d.to_path_buf(),
        None => data_io::discover_data_dir(&std::env::current_dir()?)?,
    };
    let config = data_io::load_config(&data_dir)?;
    let tasks = data_io::load_tasks(&data_io::tasks_path(&data_dir, &config))?;

    let mut app = App::new(config, tasks, Utc::now().date_naive());
    app.capture_mouse = true;

    // The watcher is an enhancement; without it the UI still works off
    // the startup snapshot.
    let watcher = DataWatcher::start(&data_dir).ok();

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
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &data_dir, watcher.as_ref());

    // Drop the popup (and its mouse capture) before leaving the alternate
    // screen.
    app.close_calendar();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    data_dir: &Path,
    watcher: Option<&DataWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if let Some(w) = watcher
            && w.poll()
        {
            app.reload(data_dir);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
