//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Bindings only apply while the contact list has focus; text inputs
/// consume printable keys themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Contact list
    /// Move the contact cursor up. Default: k/↑
    CursorUp,
    /// Move the contact cursor down. Default: j/↓
    CursorDown,
    /// Open the conversation under the cursor. Default: Enter
    OpenConversation,
    /// Return to the contact list (narrow layouts hide the chat). Default: Esc
    BackToContacts,

    // Inputs
    /// Focus the "Search a person" box. Default: /
    FilterContacts,
    /// Focus the composer bar. Default: i
    Compose,
    /// Focus the "Search a message" box. Default: f/Ctrl+f
    SearchMessages,

    // Conversation scrolling
    /// Scroll the conversation up one line. Default: K/Ctrl+k
    ScrollUp,
    /// Scroll the conversation down one line. Default: J/Ctrl+j
    ScrollDown,
    /// Scroll up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the oldest message. Default: g/Home
    ScrollToTop,
    /// Jump to the newest message. Default: G/End
    ScrollToBottom,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action scrolls the conversation pane.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
