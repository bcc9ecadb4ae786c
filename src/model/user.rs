//! Contact records.

use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// A contact the local user chats with.
///
/// Immutable once loaded from fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity referenced by [`Chat::with_user`](crate::model::Chat::with_user).
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Avatar reference (an image path in the original fixtures).
    pub profile_picture: String,
    /// Presence flag; online contacts get a status dot.
    pub is_active: bool,
}

impl User {
    /// Create a user record.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        profile_picture: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            profile_picture: profile_picture.into(),
            is_active,
        }
    }

    /// Up to two uppercase initials used as a text avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
