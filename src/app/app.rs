use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::app::{
    Dashboard,
    market::now_in_kolkata,
    ui::{self, InputMode, UiState},
    utils::{next_index, previous_index},
};

const TICK: Duration = Duration::from_millis(500);

/// What the event loop has to do after a key press.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    None,
    Quit,
    Refresh,
    Search(String),
    Export,
}

pub struct App {
    dashboard: Dashboard,
    state: UiState,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let mut state = UiState {
            symbol_input: dashboard.symbols().join(", "),
            ..UiState::default()
        };
        state.set_clock(&now_in_kolkata());

        Self { dashboard, state }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    fn show_popup(&mut self, message: &str) {
        self.state.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.state.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.state.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.state.error_popup = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.state.set_clock(&now_in_kolkata());
        terminal.draw(|frame| ui::render(frame, &self.dashboard, &mut self.state))?;
        Ok(())
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        if !self.dashboard.symbols().is_empty() {
            self.perform(terminal, Action::Refresh).await?;
        }

        loop {
            self.draw(terminal)?;

            if !event::poll(TICK)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let action = self.handle_key(key);
                if action == Action::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
                self.perform(terminal, action).await?;
            }
        }
    }

    /// Runs the network or file side of an action, showing a popup while it is in flight.
    async fn perform<B: Backend>(&mut self, terminal: &mut Terminal<B>, action: Action) -> Result<()> {
        match action {
            Action::None | Action::Quit => {}
            Action::Refresh => {
                self.show_popup("Fetching stock data...");
                self.draw(terminal)?;

                let result = self.dashboard.refresh().await;
                self.clear_popup();

                match result {
                    Ok(warnings) if warnings.is_empty() => {
                        self.state.status_message = Some(String::from("Stock data loaded successfully!"));
                    }
                    Ok(warnings) => {
                        self.show_error_popup(&warnings.join("\n"));
                    }
                    Err(e) => {
                        error!("Refresh failed: {}", e);
                        self.show_error_popup(&format!("Error: {}", e));
                    }
                }
            }
            Action::Search(query) => {
                self.show_popup("Searching...");
                self.draw(terminal)?;

                let result = self.dashboard.search(&query).await;
                self.clear_popup();

                match result {
                    Ok(0) => self.state.search_state.select(None),
                    Ok(_) => self.state.search_state.select(Some(0)),
                    Err(e) => {
                        error!("Search failed: {}", e);
                        self.show_error_popup(&format!("Search error: {}", e));
                    }
                }
            }
            Action::Export => match self.dashboard.export_selected() {
                Ok(path) => {
                    self.state.status_message = Some(format!("Saved {}", path.display()));
                }
                Err(e) => {
                    error!("Export failed: {}", e);
                    self.show_error_popup(&format!("Export error: {}", e));
                }
            },
        }

        Ok(())
    }

    /// Updates UI state for a key press and says what else needs doing.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.state.error_popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.clear_error_popup();
            }
            return Action::None;
        }

        match self.state.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Searching => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.state.input_mode = InputMode::Editing;
                Action::None
            }
            KeyCode::Char('s') => {
                self.state.input_mode = InputMode::Searching;
                self.state.search_input.clear();
                self.state.search_state.select(None);
                self.dashboard.clear_search();
                Action::None
            }
            KeyCode::Tab => {
                self.dashboard.next_period();
                self.refresh_if_loaded()
            }
            KeyCode::BackTab => {
                self.dashboard.previous_period();
                self.refresh_if_loaded()
            }
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('e') => Action::Export,
            KeyCode::Esc => {
                self.state.status_message = None;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn refresh_if_loaded(&self) -> Action {
        if self.dashboard.symbols().is_empty() {
            Action::None
        } else {
            Action::Refresh
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.state.input_mode = InputMode::Normal;
                Action::None
            }
            KeyCode::Enter => {
                self.state.input_mode = InputMode::Normal;
                match self.dashboard.set_symbols(&self.state.symbol_input) {
                    Ok(()) => {
                        self.state.symbol_input = self.dashboard.symbols().join(", ");
                        Action::Refresh
                    }
                    Err(e) => {
                        self.show_error_popup(&e.to_string());
                        Action::None
                    }
                }
            }
            KeyCode::Backspace => {
                self.state.symbol_input.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.state.symbol_input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        let len = self.dashboard.search_results().len();
        match key.code {
            KeyCode::Esc => {
                self.state.input_mode = InputMode::Normal;
                Action::None
            }
            KeyCode::Down => {
                self.state
                    .search_state
                    .select(next_index(self.state.search_state.selected(), len));
                Action::None
            }
            KeyCode::Up => {
                self.state
                    .search_state
                    .select(previous_index(self.state.search_state.selected(), len));
                Action::None
            }
            KeyCode::Enter => {
                let picked = self
                    .state
                    .search_state
                    .selected()
                    .and_then(|i| self.dashboard.search_results().get(i))
                    .map(|m| m.symbol().clone());

                match picked {
                    Some(symbol) => {
                        self.state.input_mode = InputMode::Normal;
                        self.state.symbol_input = symbol;
                        match self.dashboard.set_symbols(&self.state.symbol_input) {
                            Ok(()) => Action::Refresh,
                            Err(e) => {
                                self.show_error_popup(&e.to_string());
                                Action::None
                            }
                        }
                    }
                    None => Action::Search(self.state.search_input.clone()),
                }
            }
            KeyCode::Backspace => {
                self.state.search_input.pop();
                self.state.search_state.select(None);
                Action::None
            }
            KeyCode::Char(c) => {
                self.state.search_input.push(c);
                self.state.search_state.select(None);
                Action::None
            }
            _ => Action::None,
        }
    }
}
