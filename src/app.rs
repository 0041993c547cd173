//! Application core: owns the state and maps key events to state transitions

use crate::config::TuiConfig;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event.
    ///
    /// Tab/Down and Shift-Tab/Up cycle focus through the four fields and
    /// the Submit button. Enter submits on the button, inserts a newline
    /// in the message field and advances focus from a single-line field.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => {
                if self.state.is_submit_focused() {
                    self.state.submit();
                } else if self.state.active_field().is_some_and(|f| f.is_multiline()) {
                    self.state.input_newline();
                } else {
                    self.state.next_focus();
                }
            }
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c) => self.state.input_char(c),
            _ => {}
        }
    }
}
