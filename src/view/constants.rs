//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Below this width only one of contacts or conversation is shown.
pub const TABLET_WIDTH: u16 = 80;

/// At or above this width the search panel is shown.
pub const DESKTOP_WIDTH: u16 = 120;

/// Width of the contact list when it sits beside the conversation.
pub const CONTACTS_WIDTH: u16 = 34;

/// Width of the search panel.
pub const SEARCH_PANEL_WIDTH: u16 = 30;

/// Height of a bordered single-line input (border + content).
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the conversation header (border + name line).
pub const CHAT_HEADER_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows used by one contact entry.
pub const CONTACT_ROW_HEIGHT: u16 = 2;

/// Title shown above the contact list.
pub const APP_TITLE: &str = "The Club";

/// Placeholder for the contact filter.
pub const CONTACT_FILTER_PLACEHOLDER: &str = "Search a person";

/// Placeholder for the composer.
pub const COMPOSER_PLACEHOLDER: &str = "Aa";

/// Placeholder for the message search box.
pub const MESSAGE_SEARCH_PLACEHOLDER: &str = "Search a message";
