//! Fixture provider.
//!
//! Supplies the three flat collections (users, chats, messages) once at
//! startup, either from a JSON file or from the seeded generator. Records
//! are parsed into typed values at this boundary; whether their references
//! resolve is checked later by the assembler.

use crate::model::{Chat, FixtureError, Message, User};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub mod generator;

pub use generator::GeneratorConfig;

/// The raw fixture collections. Read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    /// Contacts.
    #[serde(default)]
    pub users: Vec<User>,
    /// Raw chats referencing users and messages by id.
    #[serde(default)]
    pub chats: Vec<Chat>,
    /// All messages across all chats.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Fixtures {
    /// Decode a fixture document.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Json` for malformed JSON, missing fields or
    /// unparseable dates.
    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and decode a fixture file.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, `Io` if it cannot
    /// be read, and `Json` if it does not decode.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let path = path.into();

        if !path.exists() {
            return Err(FixtureError::FileNotFound { path });
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;

        Self::from_json(&contents)
    }

    /// Generate deterministic mock data.
    pub fn generate(config: &GeneratorConfig) -> Self {
        generator::generate(config)
    }

    /// Encode as a pretty-printed fixture document.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Where the fixtures come from.
///
/// Sum type enforces exactly one source.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureSource {
    /// A JSON document on disk.
    File(PathBuf),
    /// Seeded mock data.
    Generated(GeneratorConfig),
}

impl FixtureSource {
    /// Materialize the collections.
    ///
    /// # Errors
    ///
    /// Only the `File` variant can fail; see [`Fixtures::load`].
    pub fn load(&self) -> Result<Fixtures, FixtureError> {
        let fixtures = match self {
            FixtureSource::File(path) => Fixtures::load(path.clone())?,
            FixtureSource::Generated(config) => Fixtures::generate(config),
        };

        info!(
            source = ?self,
            users = fixtures.users.len(),
            chats = fixtures.chats.len(),
            messages = fixtures.messages.len(),
            "Fixtures loaded"
        );

        Ok(fixtures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChatId, MessageId, Timestamp, UserId};
    use std::env;
    use std::fs;

    const SCENARIO_JSON: &str = r#"{
        "users": [{"id": 1, "name": "Ann", "profilePicture": "/images/1.png", "isActive": true}],
        "chats": [{"id": 10, "withUser": 1, "lastMessage": 100, "messages": [100]}],
        "messages": [{"id": 100, "chatId": 10, "content": "Hi", "date": "2026-01-05T15:04:00Z", "writtenByMe": false}]
    }"#;

    #[test]
    fn from_json_decodes_all_three_collections() {
        let fixtures = Fixtures::from_json(SCENARIO_JSON).expect("valid fixtures");

        assert_eq!(fixtures.users.len(), 1);
        assert_eq!(fixtures.users[0].id, UserId::new(1));
        assert_eq!(fixtures.chats[0].with_user, UserId::new(1));
        assert_eq!(fixtures.chats[0].last_message, Some(MessageId::new(100)));
        assert_eq!(fixtures.messages[0].chat_id, ChatId::new(10));
        assert_eq!(
            fixtures.messages[0].date,
            Timestamp::parse_rfc3339("2026-01-05T15:04:00Z").expect("valid date")
        );
    }

    #[test]
    fn from_json_accepts_empty_document() {
        let fixtures = Fixtures::from_json("{}").expect("empty object is valid");
        assert_eq!(fixtures, Fixtures::default());
    }

    #[test]
    fn from_json_rejects_malformed_json() {
        let result = Fixtures::from_json("{ not json");
        assert!(matches!(result, Err(FixtureError::Json(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Fixtures::load("/nonexistent/chatpane/fixtures.json");
        assert!(matches!(result, Err(FixtureError::FileNotFound { .. })));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = env::temp_dir().join("chatpane_test_fixtures_load.json");
        fs::write(&path, SCENARIO_JSON).expect("write fixture file");

        let fixtures = Fixtures::load(&path).expect("load fixture file");
        assert_eq!(fixtures.messages[0].content, "Hi");

        fs::remove_file(path).ok();
    }

    #[test]
    fn to_json_output_decodes_to_same_fixtures() {
        let fixtures = Fixtures::from_json(SCENARIO_JSON).expect("valid fixtures");
        let encoded = fixtures.to_json().expect("encode");
        assert_eq!(Fixtures::from_json(&encoded).expect("decode"), fixtures);
    }

    #[test]
    fn generated_source_never_fails() {
        let source = FixtureSource::Generated(GeneratorConfig::new(7, 3, Timestamp::from_millis(0)));
        let fixtures = source.load().expect("generation is infallible");
        assert_eq!(fixtures.users.len(), 3);
    }
}
