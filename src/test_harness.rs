//! Shared test fixtures and the TUI acceptance harness.
//!
//! Record builders keep unit tests short; [`AcceptanceTestHarness`] wraps
//! `TuiApp<TestBackend>` so tests can type keys and read the screen.

use crate::config::KeyBindings;
use crate::fixtures::Fixtures;
use crate::model::{Chat, ChatId, Message, MessageId, Timestamp, User, UserId};
use crate::state::{AppState, SessionState};
use crate::view::{TuiApp, TuiError};
use crate::view_state::assemble_fixtures;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Record builders =====

/// Timestamp `secs` seconds after the epoch.
pub(crate) fn ts(secs: i64) -> Timestamp {
    Timestamp::from_millis(secs * 1_000)
}

pub(crate) fn user(id: u64, name: &str) -> User {
    User::new(UserId::new(id), name, format!("/images/{id}.png"), false)
}

pub(crate) fn message(id: u64, chat: u64, content: &str, secs: i64, mine: bool) -> Message {
    Message::new(MessageId::new(id), ChatId::new(chat), content, ts(secs), mine)
}

pub(crate) fn chat(id: u64, with_user: u64, last: Option<u64>, messages: &[u64]) -> Chat {
    Chat::new(
        ChatId::new(id),
        UserId::new(with_user),
        last.map(MessageId::new),
        messages.iter().copied().map(MessageId::new).collect(),
    )
}

/// One user "Ann", chat 10, message 100 "Hi" at t=0.
pub(crate) fn scenario_fixtures() -> Fixtures {
    Fixtures {
        users: vec![user(1, "Ann")],
        chats: vec![chat(10, 1, Some(100), &[100])],
        messages: vec![message(100, 10, "Hi", 0, false)],
    }
}

/// Chat 10 with Ann (last activity t=100) and chat 20 with Bob (t=200).
pub(crate) fn two_chat_fixtures() -> Fixtures {
    Fixtures {
        users: vec![user(1, "Ann"), user(2, "Bob")],
        chats: vec![
            chat(10, 1, Some(101), &[100, 101]),
            chat(20, 2, Some(201), &[200, 201]),
        ],
        messages: vec![
            message(100, 10, "Hello World", 50, false),
            message(101, 10, "See you at the club", 100, true),
            message(200, 20, "Are you coming tonight?", 150, false),
            message(201, 20, "hello again", 200, false),
        ],
    }
}

/// A loaded session over `fixtures`.
pub(crate) fn loaded_session(fixtures: &Fixtures) -> SessionState {
    let views = assemble_fixtures(fixtures).expect("test fixtures are consistent");
    SessionState::new().load(views)
}

// ===== Acceptance harness =====

/// Convert a ratatui buffer to a string, one line per row.
///
/// Trailing whitespace and empty rows are removed.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Wraps `TuiApp<TestBackend>` for simulating user interaction.
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Build a harness over `fixtures` with a fixed clock.
    pub(crate) fn new(fixtures: &Fixtures, width: u16, height: u16, now: Timestamp) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        let app_state = AppState::new(loaded_session(fixtures));
        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default(), now);
        Self { app, running: true }
    }

    /// Send one key; returns whether the app is still running.
    pub(crate) fn press(&mut self, code: KeyCode) -> bool {
        self.press_with(code, KeyModifiers::NONE)
    }

    /// Send one key with modifiers.
    pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.running {
            self.running = !self.app.handle_key_test(KeyEvent::new(code, modifiers));
        }
        self.running
    }

    /// Type a string character by character, then press Enter.
    pub(crate) fn type_and_submit(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
        self.press(KeyCode::Enter);
    }

    /// Render and return the screen contents.
    pub(crate) fn render(&mut self) -> Result<String, TuiError> {
        self.app.render_test()?;
        Ok(buffer_to_string(self.app.terminal().backend().buffer()))
    }

    /// Current application state.
    pub(crate) fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running.
    pub(crate) fn is_running(&self) -> bool {
        self.running
    }
}
