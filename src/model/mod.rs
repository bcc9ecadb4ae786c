//! Domain model types (pure).
//!
//! Fixture records (users, chats, messages), their identifiers, the
//! normalized timestamp, and the error taxonomy.

pub mod chat;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod message;
pub mod time;
pub mod user;

// Re-export for convenience
pub use chat::Chat;
pub use error::{AppError, AssembleError, FixtureError};
pub use identifiers::{ChatId, MessageId, UserId};
pub use key_action::KeyAction;
pub use message::{Message, MessageOrigin};
pub use time::{format_full, relative_time, Timestamp};
pub use user::User;
