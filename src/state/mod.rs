//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod contacts;
pub mod input;
pub mod scroll_handler;
pub mod search;
pub mod session;

// Re-export for convenience
pub use app_state::{AppState, Focus, NarrowView, SearchStatus};
pub use contacts::{chat_count_label, filter_conversations};
pub use input::TextInput;
pub use scroll_handler::handle_scroll_action;
pub use search::{find_message, SearchHit, SearchQuery};
pub use session::{SessionPhase, SessionState};
