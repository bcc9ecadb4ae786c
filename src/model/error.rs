//! Error types for chatpane.
//!
//! This module defines the error taxonomy using `thiserror`. Domain errors
//! compose into [`AppError`] via `From`, so `?` carries them to `main`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`FixtureError`] - Fixture file reading and JSON decoding failures
//!   - [`AssembleError`] - Referential integrity violations found while joining records
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Fixtures are expected to be internally consistent, so every variant here
//! is fatal for startup. Invalid user input (blank compose text, unknown
//! conversation ids) is never an error: the state transition is a no-op.
//! A search without a hit is a normal `None`, not an error either.

use crate::model::{ChatId, MessageId, UserId};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use chatpane::model::error::{AppError, FixtureError};
///
/// fn run_app() -> Result<(), AppError> {
///     // FixtureError converts to AppError via From
///     let _fixtures = read_fixtures()?;
///     Ok(())
/// }
/// # fn read_fixtures() -> Result<(), FixtureError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Fixture data could not be read or decoded.
    #[error("Failed to load fixtures: {0}")]
    Fixture(#[from] FixtureError),

    /// Fixture data references records that do not exist.
    ///
    /// This signals a data-generation bug, not a user mistake.
    #[error("Inconsistent fixtures: {0}")]
    Assemble(#[from] AssembleError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Restore the terminal, then exit with the message on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use chatpane::model::error::FixtureError;
    ///
    /// let err = FixtureError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("Fixture file not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid fixture JSON (including unparseable dates).
    #[error("Invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Referential integrity violations found while assembling conversation views.
///
/// Each variant names the chat being assembled and the dangling reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    /// A chat's counterpart user is not among the loaded users.
    #[error("chat {chat} references unknown user {user}")]
    UnknownUser {
        /// The chat holding the reference.
        chat: ChatId,
        /// The missing user id.
        user: UserId,
    },

    /// A chat references a message that is not among the loaded messages.
    #[error("chat {chat} references unknown message {message}")]
    UnknownMessage {
        /// The chat holding the reference.
        chat: ChatId,
        /// The missing message id.
        message: MessageId,
    },

    /// A chat references a message that belongs to another chat.
    #[error("chat {chat} references message {message} owned by chat {owner}")]
    ForeignMessage {
        /// The chat holding the reference.
        chat: ChatId,
        /// The referenced message.
        message: MessageId,
        /// The chat the message actually belongs to.
        owner: ChatId,
    },
}
