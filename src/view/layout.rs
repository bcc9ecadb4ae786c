//! Three-pane layout.
//!
//! Pure geometry decides which panes are visible at the current width;
//! `render_layout` then draws each one and reports the conversation
//! viewport so scroll keys can work against what is on screen.

use crate::model::Timestamp;
use crate::state::{AppState, Focus, NarrowView, SearchStatus};
use crate::view::constants::{
    CONTACTS_WIDTH, DESKTOP_WIDTH, SEARCH_PANEL_WIDTH, STATUS_BAR_HEIGHT, TABLET_WIDTH,
};
use crate::view::{chat, contacts, search_panel, ChatStyles};
use crate::view_state::ChatViewport;
use chrono::FixedOffset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the panes need besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Reference point for relative times.
    pub now: Timestamp,
    /// Zone for full dates.
    pub offset: FixedOffset,
    /// Resolved styles.
    pub styles: ChatStyles,
    /// Whether wide terminals get the search panel.
    pub show_search_panel: bool,
}

/// Areas assigned to each pane; `None` when hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAreas {
    /// Contact list.
    pub contacts: Option<Rect>,
    /// Conversation.
    pub chat: Option<Rect>,
    /// Search panel.
    pub search: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` into panes.
///
/// - Below [`TABLET_WIDTH`]: contacts or conversation, per `narrow_view`.
/// - From [`TABLET_WIDTH`]: contacts beside the conversation.
/// - From [`DESKTOP_WIDTH`]: the search panel joins on the right.
pub fn calculate_panes(area: Rect, narrow_view: NarrowView, show_search_panel: bool) -> PaneAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    let content = rows[0];
    let status = rows[1];

    if area.width < TABLET_WIDTH {
        return match narrow_view {
            NarrowView::Contacts => PaneAreas {
                contacts: Some(content),
                chat: None,
                search: None,
                status,
            },
            NarrowView::Chat => PaneAreas {
                contacts: None,
                chat: Some(content),
                search: None,
                status,
            },
        };
    }

    if area.width < DESKTOP_WIDTH || !show_search_panel {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CONTACTS_WIDTH), Constraint::Min(0)])
            .split(content);
        return PaneAreas {
            contacts: Some(columns[0]),
            chat: Some(columns[1]),
            search: None,
            status,
        };
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CONTACTS_WIDTH),
            Constraint::Min(0),
            Constraint::Length(SEARCH_PANEL_WIDTH),
        ])
        .split(content);

    PaneAreas {
        contacts: Some(columns[0]),
        chat: Some(columns[1]),
        search: Some(columns[2]),
        status,
    }
}

/// Render every visible pane. Returns the conversation viewport, if drawn.
pub fn render_layout(frame: &mut Frame, state: &AppState, ctx: &RenderContext) -> Option<ChatViewport> {
    let panes = calculate_panes(frame.area(), state.narrow_view, ctx.show_search_panel);

    if let Some(area) = panes.contacts {
        contacts::render_contacts(frame, area, state, ctx);
    }

    let viewport = panes.chat.and_then(|area| {
        chat::render_chat(frame, area, state, ctx, panes.search.is_none())
    });

    if let Some(area) = panes.search {
        search_panel::render_search_panel(frame, area, state, ctx);
    }

    render_status_bar(frame, panes.status, state, ctx);

    viewport
}

/// Key hints for the focused control, plus a search miss when there is one.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    let hints = match state.focus {
        Focus::ContactList => {
            "j/k: move  Enter: open  /: people  i: write  f: search  J/K: scroll  q: quit"
        }
        Focus::ContactFilter => "Type to filter  Enter/Esc: done",
        Focus::Composer => "Enter: send  Esc: done",
        Focus::MessageSearch => "Enter: find  Esc: done",
    };

    let mut spans = vec![Span::styled(hints, ctx.styles.muted())];
    if let SearchStatus::NotFound(query) = &state.search_status {
        spans.push(Span::raw(format!("  No message matches \"{query}\"")));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
