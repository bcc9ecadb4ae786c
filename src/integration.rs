//! Pure core integration functions.
//!
//! Glue between the fixture provider, the assembler and the session. `main`
//! and the integration tests both start here, so the TUI and `--dump` see
//! exactly the same data.

use crate::fixtures::{FixtureSource, Fixtures};
use crate::model::{AppError, FixtureError};
use crate::state::SessionState;
use crate::view_state::{assemble_fixtures, ConversationView};
use tracing::info;

/// Load fixtures from `source` and assemble the view model.
///
/// # Errors
///
/// Propagates fixture loading failures and referential integrity
/// violations.
pub fn load_conversations(source: &FixtureSource) -> Result<Vec<ConversationView>, AppError> {
    let fixtures = source.load()?;
    conversations_from(&fixtures)
}

/// Assemble already loaded fixtures.
///
/// # Errors
///
/// Returns `AppError::Assemble` on a dangling reference.
pub fn conversations_from(fixtures: &Fixtures) -> Result<Vec<ConversationView>, AppError> {
    let views = assemble_fixtures(fixtures)?;
    info!(conversations = views.len(), "View model assembled");
    Ok(views)
}

/// Load, assemble and install into a fresh session.
///
/// # Errors
///
/// See [`load_conversations`].
pub fn load_session(source: &FixtureSource) -> Result<SessionState, AppError> {
    let views = load_conversations(source)?;
    Ok(SessionState::new().load(views))
}

/// Pretty JSON of the assembled conversation list.
///
/// # Errors
///
/// Returns `AppError::Fixture` if serialization fails.
pub fn conversations_json(views: &[ConversationView]) -> Result<String, AppError> {
    serde_json::to_string_pretty(views)
        .map_err(FixtureError::from)
        .map_err(AppError::from)
}
