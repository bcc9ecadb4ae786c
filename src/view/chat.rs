//! Conversation pane: header, bubbles, date line and composer.
//!
//! Bubbles come from [`ChatLayout`], the same layout the scroll handler
//! resolves against, so a search hit lands exactly where it is painted.

use crate::model::{format_full, Message};
use crate::state::{AppState, Focus};
use crate::view::constants::{
    CHAT_HEADER_HEIGHT, COMPOSER_PLACEHOLDER, INPUT_HEIGHT, MESSAGE_SEARCH_PLACEHOLDER,
};
use crate::view::input_box::InputBox;
use crate::view::layout::RenderContext;
use crate::view_state::{ChatLayout, ChatViewport, ConversationView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the active conversation.
///
/// `inline_search` puts the message search box in place of the composer
/// while it has focus, for layouts without a search panel. Returns the
/// viewport of the message area, or `None` when no conversation is active.
pub fn render_chat(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    ctx: &RenderContext,
    inline_search: bool,
) -> Option<ChatViewport> {
    let Some(view) = state.session().active_conversation() else {
        let empty = Paragraph::new("No conversation selected")
            .style(ctx.styles.muted())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return None;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CHAT_HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);

    render_header(frame, rows[0], view, ctx);

    let messages = state.session().visible_messages(view.id);
    let viewport = render_messages(frame, rows[1], state, &messages, ctx);
    render_date_line(frame, rows[2], state, &messages, ctx);

    let searching = inline_search && state.focus == Focus::MessageSearch;
    let input = if searching {
        InputBox::new(&state.message_search, MESSAGE_SEARCH_PLACEHOLDER, ctx.styles).focused(true)
    } else {
        InputBox::new(&state.composer, COMPOSER_PLACEHOLDER, ctx.styles)
            .focused(state.focus == Focus::Composer)
    };
    frame.render_widget(input, rows[3]);

    Some(viewport)
}

fn render_header(frame: &mut Frame, area: Rect, view: &ConversationView, ctx: &RenderContext) {
    let mut spans = Vec::with_capacity(3);
    if view.user.is_active {
        spans.push(Span::styled("● ", ctx.styles.presence()));
    }
    spans.push(Span::styled(
        view.user.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ctx.styles.border()),
    );
    frame.render_widget(header, area);
}

/// Draw the bubbles visible at the current scroll, bottom-aligned when
/// they don't fill the pane.
fn render_messages(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    messages: &[&Message],
    ctx: &RenderContext,
) -> ChatViewport {
    let height = area.height as usize;
    let layout = ChatLayout::build(messages.iter().copied(), area.width as usize);
    let viewport = layout.viewport(state.chat_scroll, height);
    let hit = state.search_hit().map(|hit| hit.message_id);

    let shown: Vec<Line> = layout
        .lines()
        .iter()
        .skip(viewport.top)
        .take(height)
        .map(|row| {
            let style = if Some(row.message_id) == hit {
                ctx.styles.highlight_bubble()
            } else if row.written_by_me {
                ctx.styles.own_bubble()
            } else {
                ctx.styles.other_bubble()
            };
            let alignment = if row.written_by_me {
                Alignment::Right
            } else {
                Alignment::Left
            };
            Line::from(Span::styled(format!(" {} ", row.text), style)).alignment(alignment)
        })
        .collect();

    let padding = height.saturating_sub(shown.len());
    let lines: Vec<Line> = std::iter::repeat_with(Line::default)
        .take(padding)
        .chain(shown)
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
    viewport
}

/// Full date of the search hit, or of the newest message.
fn render_date_line(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    messages: &[&Message],
    ctx: &RenderContext,
) {
    let dated = match state.search_hit() {
        Some(hit) => messages.iter().find(|m| m.id == hit.message_id),
        None => messages.last(),
    };

    let Some(message) = dated else {
        return;
    };

    let line = Paragraph::new(format_full(message.date, &ctx.offset))
        .style(ctx.styles.muted())
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}
