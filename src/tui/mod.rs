//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the country widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod component;
pub mod country_grid;
pub mod filter_input;
pub mod pagination;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{Config, ThemeMode};
use crate::constants::APP_NAME;
use crate::fetch::{spawn_load, CountrySource, FetchResult};
use crate::models::Country;
use crate::pipeline::CountryPipeline;

pub use component::{Component, FilterEvent};
pub use filter_input::FilterInput;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Which area receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Filter text field
    Filter,
    /// Card grid
    Grid,
}

/// Country list loading state.
#[derive(Debug)]
pub enum LoadState {
    /// Fetch in flight
    Loading,
    /// Fetch failed with a rendered message
    Failed(String),
    /// Countries loaded
    Ready(CountryPipeline),
}

/// Application state
pub struct AppState {
    /// Active color theme
    pub theme: Theme,
    /// Configured theme preference, re-resolved each frame
    pub theme_mode: ThemeMode,
    /// Country loading state
    pub load_state: LoadState,
    load_rx: Option<Receiver<FetchResult>>,
    /// Where countries come from, for display
    pub source_description: String,
    /// Filter input component
    pub filter: FilterInput,
    /// Focused area
    pub focus: Focus,
    /// Card cursor within the current page
    pub cursor: usize,
    /// Status message shown in the status bar
    pub status_message: String,
    /// Optional foreground color for the status message
    pub status_color_override: Option<Color>,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state and starts loading countries in the background.
    #[must_use]
    pub fn new(config: &Config, source: CountrySource) -> Self {
        let source_description = source.describe();
        info!(source = %source_description, "Starting country load");
        let rx = spawn_load(source);

        Self {
            theme: Theme::from_mode(config.ui.theme_mode),
            theme_mode: config.ui.theme_mode,
            load_state: LoadState::Loading,
            load_rx: Some(rx),
            source_description,
            filter: FilterInput::new(),
            focus: Focus::Filter,
            cursor: 0,
            status_message: String::new(),
            status_color_override: None,
            should_quit: false,
        }
    }

    /// Creates a ready state over an already loaded list.
    #[must_use]
    pub fn with_countries(countries: Vec<Country>, theme: Theme) -> Self {
        Self {
            theme,
            theme_mode: ThemeMode::Auto,
            load_state: LoadState::Ready(CountryPipeline::new(countries)),
            load_rx: None,
            source_description: "memory".to_string(),
            filter: FilterInput::new(),
            focus: Focus::Filter,
            cursor: 0,
            status_message: String::new(),
            status_color_override: None,
            should_quit: false,
        }
    }

    /// Checks the background load. Returns true when the state changed.
    pub fn poll_loading(&mut self) -> bool {
        let Some(rx) = &self.load_rx else {
            return false;
        };

        self.load_state = match rx.try_recv() {
            Ok(Ok(countries)) => LoadState::Ready(CountryPipeline::new(countries)),
            Ok(Err(message)) => LoadState::Failed(message),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                warn!("Country loader exited without a result");
                LoadState::Failed("Country loader stopped unexpectedly".to_string())
            }
        };
        self.load_rx = None;
        true
    }

    /// Loaded pipeline, if any.
    #[must_use]
    pub fn pipeline(&self) -> Option<&CountryPipeline> {
        match &self.load_state {
            LoadState::Ready(pipeline) => Some(pipeline),
            _ => None,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color_override = None;
    }

    /// Set status message in the warning color
    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color_override = Some(self.theme.warning);
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_color_override = None;
    }

    /// Acts on an event emitted by the filter input.
    pub fn handle_filter_event(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::Search { search, group } => {
                let LoadState::Ready(pipeline) = &mut self.load_state else {
                    self.set_status("Countries are not loaded yet");
                    return;
                };
                let outcome = pipeline.apply(&search, &group);
                self.cursor = 0;
                match outcome.warning {
                    Some(warning) => self.set_warning(warning),
                    None => self.clear_status(),
                }
            }
            FilterEvent::Cleared => {
                if let LoadState::Ready(pipeline) = &mut self.load_state {
                    pipeline.clear();
                }
                self.cursor = 0;
                self.clear_status();
            }
            FilterEvent::FocusNext => self.focus = Focus::Grid,
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('/') | KeyCode::Tab | KeyCode::Esc => {
                self.focus = Focus::Filter;
                return;
            }
            KeyCode::Char('c') => {
                self.filter.clear();
                self.handle_filter_event(FilterEvent::Cleared);
                return;
            }
            _ => {}
        }

        let LoadState::Ready(pipeline) = &mut self.load_state else {
            return;
        };
        let page_len = pipeline.current_page_items().len();

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = country_grid::move_cursor(self.cursor, page_len, -1, 0);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = country_grid::move_cursor(self.cursor, page_len, 1, 0);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor < country_grid::GRID_COLUMNS {
                    self.focus = Focus::Filter;
                } else {
                    self.cursor = country_grid::move_cursor(self.cursor, page_len, 0, -1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = country_grid::move_cursor(self.cursor, page_len, 0, 1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let code = pipeline
                    .current_page_items()
                    .get(self.cursor)
                    .map(|item| item.code().to_string());
                if let Some(code) = code {
                    pipeline.toggle_selection(&code);
                }
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                if pipeline.next_page() {
                    self.cursor = 0;
                }
            }
            KeyCode::PageUp | KeyCode::Char('[') => {
                if pipeline.previous_page() {
                    self.cursor = 0;
                }
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let page = digit as usize - '0' as usize;
                if page <= pipeline.total_pages() {
                    pipeline.set_page(page);
                    self.cursor = 0;
                    self.clear_status();
                } else {
                    let message = format!("Page {page} does not exist");
                    self.set_warning(message);
                }
            }
            _ => {}
        }
    }
}

/// Routes a key press. Returns true when the app should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return true;
    }

    match state.focus {
        Focus::Filter => {
            if let Some(event) = state.filter.handle_input(key) {
                state.handle_filter_event(event);
            }
        }
        Focus::Grid => state.handle_grid_key(key),
    }

    state.should_quit
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Auto follows the OS theme while running
        state.theme = Theme::from_mode(state.theme_mode);

        state.poll_loading();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            // Resize needs no handling, the next frame redraws
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key) {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs the TUI against a country source until the user quits.
pub fn run(config: &Config, source: CountrySource) -> Result<()> {
    let mut state = AppState::new(config, source);
    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    info!("TUI exited");
    result
}

/// Renders the full frame.
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Filter
            Constraint::Length(1), // Result title
            Constraint::Min(7),    // Cards
            Constraint::Length(1), // Pages
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    state
        .filter
        .render(f, chunks[1], &state.theme, state.focus == Focus::Filter);

    match &state.load_state {
        LoadState::Loading => render_notice(f, chunks[3], "Loading...", state.theme.text_muted, &state.theme),
        LoadState::Failed(message) => render_notice(
            f,
            chunks[3],
            &format!("Error: {message}"),
            state.theme.error,
            &state.theme,
        ),
        LoadState::Ready(pipeline) => {
            let title = Paragraph::new(Line::from(Span::styled(
                pipeline.title().to_string(),
                Style::default()
                    .fg(state.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center);
            f.render_widget(title, chunks[2]);

            let cursor = (state.focus == Focus::Grid).then_some(state.cursor);
            country_grid::render(f, chunks[3], pipeline, cursor, &state.theme);
            pagination::render(f, chunks[4], pipeline, &state.theme);
        }
    }

    StatusBar::render(f, chunks[5], state, &state.theme);
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {APP_NAME} - {}", state.source_description);

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

fn render_notice(f: &mut Frame, area: Rect, text: &str, color: Color, theme: &Theme) {
    let notice = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(theme.background));
    f.render_widget(notice, area);
}
