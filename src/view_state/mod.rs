//! View-model layer (pure).
//!
//! Derives display-ready data from the fixture records: the assembled
//! conversation list, and the wrapped line layout of the conversation pane.

pub mod assembler;
pub mod chat_layout;
pub mod conversation;

pub use assembler::{assemble, assemble_fixtures};
pub use chat_layout::{wrap_text, ChatLayout, ChatScroll, ChatViewport, LayoutLine};
pub use conversation::ConversationView;
