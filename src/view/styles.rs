//! Colours for the three panes.
//!
//! Own messages are green, the counterpart's gray, and a search hit
//! bright green. Everything falls back to the terminal default when colour
//! is disabled.

use ratatui::style::{Color, Modifier, Style};

/// Bubble colour of own messages.
pub const OWN_BUBBLE: Color = Color::Rgb(0x4C, 0x73, 0x4C);

/// Bubble colour of the counterpart's messages.
pub const OTHER_BUBBLE: Color = Color::Rgb(0x3A, 0x3A, 0x3A);

/// Bubble colour of a search hit.
pub const HIGHLIGHT_BUBBLE: Color = Color::Rgb(0x00, 0xC5, 0x14);

/// Presence dot colour.
pub const PRESENCE: Color = Color::Green;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, bypassing the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ChatStyles =====

/// Resolved styles for every element the panes draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatStyles {
    colors: bool,
}

impl ChatStyles {
    /// Styles honouring `config`.
    pub fn with_color_config(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn colored(self, style: Style) -> Style {
        if self.colors {
            style
        } else {
            Style::default()
        }
    }

    /// Own message bubble.
    pub fn own_bubble(self) -> Style {
        self.colored(Style::default().bg(OWN_BUBBLE).fg(Color::White))
    }

    /// Counterpart message bubble.
    pub fn other_bubble(self) -> Style {
        self.colored(Style::default().bg(OTHER_BUBBLE).fg(Color::White))
    }

    /// Search hit bubble. Reversed when colour is off so it stays visible.
    pub fn highlight_bubble(self) -> Style {
        if self.colors {
            Style::default()
                .bg(HIGHLIGHT_BUBBLE)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Presence dot.
    pub fn presence(self) -> Style {
        self.colored(Style::default().fg(PRESENCE))
    }

    /// Secondary text: previews, relative times, placeholders.
    pub fn muted(self) -> Style {
        self.colored(Style::default().fg(Color::DarkGray))
    }

    /// Contact name; bold when the counterpart wrote last.
    pub fn contact_name(self, awaiting_reply: bool) -> Style {
        if awaiting_reply {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    /// Row under the contact cursor.
    pub fn cursor_row(self) -> Style {
        if self.colors {
            Style::default().bg(Color::Rgb(0x2A, 0x2A, 0x2A))
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Border of the focused control.
    pub fn focused_border(self) -> Style {
        self.colored(Style::default().fg(HIGHLIGHT_BUBBLE))
    }

    /// Border of an unfocused control.
    pub fn border(self) -> Style {
        self.colored(Style::default().fg(Color::Gray))
    }
}

impl Default for ChatStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
