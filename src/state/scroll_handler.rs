//! Vertical scrolling keyboard action handler.
//!
//! Pure function that transforms AppState in response to scroll actions.
//! Positions are resolved against the viewport captured at the last render,
//! so a page scroll moves by exactly what was on screen.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::{ChatScroll, ChatViewport};

/// Handle a scroll keyboard action on the conversation pane.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The scroll action to handle
/// * `viewport` - Geometry of the conversation pane at the last render
///
/// Returns the new AppState. Landing on or past the last line switches back
/// to following the newest message; non-scroll actions are ignored.
pub fn handle_scroll_action(
    mut state: AppState,
    action: KeyAction,
    viewport: ChatViewport,
) -> AppState {
    let page = viewport.height.saturating_sub(1).max(1);
    let top = viewport.top;

    let target = match action {
        KeyAction::ScrollUp => top.saturating_sub(1),
        KeyAction::ScrollDown => top.saturating_add(1),
        KeyAction::PageUp => top.saturating_sub(page),
        KeyAction::PageDown => top.saturating_add(page),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => viewport.max_top,
        _ => return state,
    };

    state.chat_scroll = if target >= viewport.max_top {
        ChatScroll::Bottom
    } else {
        ChatScroll::Line(target)
    };

    state
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
