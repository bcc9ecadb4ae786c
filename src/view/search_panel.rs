//! Search panel: who the conversation is with, and the message search.

use crate::state::{AppState, Focus, SearchStatus};
use crate::view::constants::{INPUT_HEIGHT, MESSAGE_SEARCH_PLACEHOLDER};
use crate::view::helpers::truncate_to_width;
use crate::view::input_box::InputBox;
use crate::view::layout::RenderContext;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render name, presence, search box and the last search result.
pub fn render_search_panel(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(ctx.styles.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(view) = state.session().active_conversation() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let name = Paragraph::new(Line::from(Span::styled(
        view.user.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(name, rows[1]);

    let presence = if view.user.is_active {
        Line::from(vec![
            Span::styled("● ", ctx.styles.presence()),
            Span::raw("Active"),
        ])
    } else {
        Line::from(Span::styled("Offline", ctx.styles.muted()))
    };
    frame.render_widget(Paragraph::new(presence).alignment(Alignment::Center), rows[2]);

    let input = InputBox::new(&state.message_search, MESSAGE_SEARCH_PLACEHOLDER, ctx.styles)
        .focused(state.focus == Focus::MessageSearch);
    frame.render_widget(input, rows[3]);

    let result = match &state.search_status {
        SearchStatus::Idle => return,
        SearchStatus::Found(hit) => {
            let content = state
                .session()
                .visible_messages(view.id)
                .get(hit.position)
                .map(|message| message.content.clone())
                .unwrap_or_default();
            let width = (rows[4].width as usize).saturating_mul(2);
            format!("Found: {}", truncate_to_width(&content, width))
        }
        SearchStatus::NotFound(query) => format!("No message matches \"{query}\""),
    };

    frame.render_widget(
        Paragraph::new(result)
            .style(ctx.styles.muted())
            .wrap(Wrap { trim: true }),
        rows[4],
    );
}
