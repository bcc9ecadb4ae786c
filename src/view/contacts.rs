//! Contact list pane.

use crate::model::relative_time;
use crate::state::{chat_count_label, AppState, Focus};
use crate::view::constants::{
    APP_TITLE, CONTACT_FILTER_PLACEHOLDER, CONTACT_ROW_HEIGHT, INPUT_HEIGHT,
};
use crate::view::helpers::{gap_between, truncate_to_width};
use crate::view::input_box::InputBox;
use crate::view::layout::RenderContext;
use crate::view_state::ConversationView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render title, chat count, filter box and the filtered contacts.
pub fn render_contacts(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(ctx.styles.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let count = chat_count_label(state.session().conversations().len());
    let gap = gap_between("Me", &count, rows[1].width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(format!("Me{}{count}", " ".repeat(gap)))),
        rows[1],
    );

    let filter = InputBox::new(&state.contact_filter, CONTACT_FILTER_PLACEHOLDER, ctx.styles)
        .focused(state.focus == Focus::ContactFilter);
    frame.render_widget(filter, rows[2]);

    render_rows(frame, rows[3], state, ctx);
}

fn render_rows(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    let visible_rows = (area.height / CONTACT_ROW_HEIGHT) as usize;
    if visible_rows == 0 {
        return;
    }

    let contacts = state.filtered_conversations();
    let first = (state.contact_cursor + 1).saturating_sub(visible_rows);
    let active = state.session().active_id();
    let width = area.width as usize;

    let mut lines = Vec::with_capacity(visible_rows * CONTACT_ROW_HEIGHT as usize);
    for (index, view) in contacts.iter().enumerate().skip(first).take(visible_rows) {
        let under_cursor = index == state.contact_cursor;
        let [top, bottom] = contact_lines(view, Some(view.id) == active, width, ctx);

        if under_cursor {
            lines.push(top.style(ctx.styles.cursor_row()));
            lines.push(bottom.style(ctx.styles.cursor_row()));
        } else {
            lines.push(top);
            lines.push(bottom);
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Two rows: marker, presence, name and age; then the preview.
fn contact_lines(
    view: &ConversationView,
    is_active: bool,
    width: usize,
    ctx: &RenderContext,
) -> [Line<'static>; 2] {
    let marker = if is_active { "▌" } else { " " };
    let dot = if view.user.is_active { "●" } else { " " };
    let age = view
        .last_activity()
        .map(|date| relative_time(date, ctx.now))
        .unwrap_or_default();

    // marker + dot + space, and one space before the age
    let name_width = width.saturating_sub(4 + age.chars().count());
    let name = truncate_to_width(&view.user.name, name_width);
    let gap = gap_between(&name, &age, width.saturating_sub(3));

    let top = Line::from(vec![
        Span::raw(marker),
        Span::styled(dot, ctx.styles.presence()),
        Span::raw(" "),
        Span::styled(name, ctx.styles.contact_name(view.awaiting_reply())),
        Span::raw(" ".repeat(gap)),
        Span::styled(age, ctx.styles.muted()),
    ]);

    let preview = view
        .last_message
        .as_ref()
        .map(|message| message.content.replace('\n', " "))
        .unwrap_or_default();
    let bottom = Line::from(vec![
        Span::raw(marker),
        Span::raw("  "),
        Span::styled(
            truncate_to_width(&preview, width.saturating_sub(3)),
            ctx.styles.muted(),
        ),
    ]);

    [top, bottom]
}
