//! TUI rendering and terminal management (impure shell)

pub mod chat;
pub mod constants;
pub mod contacts;
mod helpers;
pub mod input_box;
pub mod layout;
pub mod search_panel;
mod styles;

pub use helpers::{gap_between, truncate_to_width};
pub use input_box::InputBox;
pub use layout::{calculate_panes, render_layout, PaneAreas, RenderContext};
pub use styles::{ChatStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::model::{KeyAction, Timestamp};
use crate::state::{handle_scroll_action, AppState, Focus};
use crate::view_state::ChatViewport;
use chrono::FixedOffset;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Redraw interval when idle, so relative times keep up with the clock.
const TIMER_INTERVAL: Duration = Duration::from_secs(1);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Presentation settings resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Show the search panel on wide terminals.
    pub show_search_panel: bool,
    /// Colour output.
    pub colors: ColorConfig,
}

impl ViewOptions {
    /// Create new ViewOptions.
    pub fn new(show_search_panel: bool, colors: ColorConfig) -> Self {
        Self {
            show_search_panel,
            colors,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    options: ViewOptions,
    offset: FixedOffset,
    /// Frozen clock; `None` reads the system clock.
    fixed_now: Option<Timestamp>,
    /// Conversation viewport from the last render, for scroll keys.
    last_chat_viewport: ChatViewport,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, options: ViewOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            options,
            offset: *chrono::Local::now().offset(),
            fixed_now: None,
            last_chat_viewport: ChatViewport::default(),
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on key input, on
    /// resize, and on every timer tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        self.terminal.autoresize()?;
                    }
                    _ => continue,
                }
            }

            self.draw()?;
        }
    }

    fn now(&self) -> Timestamp {
        self.fixed_now.unwrap_or_else(Timestamp::now)
    }

    /// Handle keyboard input
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.focus.is_typing() && self.handle_typing_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // While typing, only scroll bindings get through
        if self.app_state.focus.is_typing() && !action.is_scroll() {
            return false;
        }

        self.apply_action(action)
    }

    /// Route a key to the focused text input. Returns whether it was consumed.
    fn handle_typing_key(&mut self, key: KeyEvent) -> bool {
        let focus = self.app_state.focus;

        match key.code {
            KeyCode::Esc => {
                self.app_state.focus_input(Focus::ContactList);
            }
            KeyCode::Enter => match focus {
                Focus::ContactFilter => self.app_state.focus_input(Focus::ContactList),
                Focus::Composer => {
                    let now = self.now();
                    self.app_state.submit_composer(now);
                }
                Focus::MessageSearch => self.app_state.submit_message_search(),
                Focus::ContactList => return false,
            },
            KeyCode::Up if focus == Focus::ContactFilter => self.app_state.cursor_up(),
            KeyCode::Down if focus == Focus::ContactFilter => self.app_state.cursor_down(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.app_state.focused_input_mut() {
                    input.insert(ch);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.app_state.focused_input_mut() {
                    input.backspace();
                }
            }
            KeyCode::Left => {
                if let Some(input) = self.app_state.focused_input_mut() {
                    input.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = self.app_state.focused_input_mut() {
                    input.move_right();
                }
            }
            _ => return false,
        }

        if focus == Focus::ContactFilter {
            self.app_state.clamp_cursor();
        }
        true
    }

    /// Apply a bound action. Returns true if app should quit.
    fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::CursorUp => self.app_state.cursor_up(),
            KeyAction::CursorDown => self.app_state.cursor_down(),
            KeyAction::OpenConversation => self.app_state.open_under_cursor(),
            KeyAction::BackToContacts => self.app_state.back_to_contacts(),
            KeyAction::FilterContacts => self.app_state.focus_input(Focus::ContactFilter),
            KeyAction::Compose => self.app_state.focus_input(Focus::Composer),
            KeyAction::SearchMessages => self.app_state.focus_input(Focus::MessageSearch),
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                let state = std::mem::take(&mut self.app_state);
                self.app_state = handle_scroll_action(state, action, self.last_chat_viewport);
            }
        }
        false
    }

    /// Render the current frame and remember the conversation viewport.
    fn draw(&mut self) -> Result<(), TuiError> {
        let ctx = RenderContext {
            now: self.now(),
            offset: self.offset,
            styles: ChatStyles::with_color_config(self.options.colors),
            show_search_panel: self.options.show_search_panel,
        };

        let app_state = &self.app_state;
        let mut viewport = None;
        self.terminal.draw(|frame| {
            viewport = layout::render_layout(frame, app_state, &ctx);
        })?;

        if let Some(viewport) = viewport {
            self.last_chat_viewport = viewport;
        }

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Colours off, UTC, and a frozen clock so screens are reproducible.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        now: Timestamp,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            options: ViewOptions::new(true, ColorConfig::new(false)),
            offset: FixedOffset::east_opt(0).expect("zero offset is valid"),
            fixed_now: Some(now),
            last_chat_viewport: ChatViewport::default(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application over a loaded state.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and restores the terminal even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, options: ViewOptions) -> Result<(), TuiError> {
    let guard = RestoreGuard::new(restore_terminal);
    let mut app = TuiApp::new(app_state, options)?;

    let result = app.run();

    // The loop's own error wins over a failed restore
    result.and(guard.restore())
}

/// Runs `restore` exactly once: explicitly via [`RestoreGuard::restore`],
/// or on drop when the scope unwinds or returns early.
struct RestoreGuard<F>
where
    F: FnMut() -> Result<(), TuiError>,
{
    restore: Option<F>,
}

impl<F> RestoreGuard<F>
where
    F: FnMut() -> Result<(), TuiError>,
{
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn restore(mut self) -> Result<(), TuiError> {
        match self.restore.take() {
            Some(mut restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F> Drop for RestoreGuard<F>
where
    F: FnMut() -> Result<(), TuiError>,
{
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            if let Err(e) = restore() {
                warn!(error = %e, "Failed to restore terminal");
            }
        }
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
