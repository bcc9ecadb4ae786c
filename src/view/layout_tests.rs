//! Tests for pane geometry.

use super::*;

fn area(width: u16) -> Rect {
    Rect::new(0, 0, width, 30)
}

#[test]
fn narrow_terminal_shows_only_chat_by_default() {
    let panes = calculate_panes(area(60), NarrowView::Chat, true);

    assert!(panes.contacts.is_none());
    assert_eq!(panes.chat.map(|r| r.width), Some(60));
    assert!(panes.search.is_none());
}

#[test]
fn narrow_terminal_can_show_contacts_instead() {
    let panes = calculate_panes(area(60), NarrowView::Contacts, true);

    assert_eq!(panes.contacts.map(|r| r.width), Some(60));
    assert!(panes.chat.is_none());
}

#[test]
fn tablet_width_shows_contacts_beside_chat() {
    let panes = calculate_panes(area(TABLET_WIDTH), NarrowView::Contacts, true);

    assert_eq!(panes.contacts.map(|r| r.width), Some(CONTACTS_WIDTH));
    assert_eq!(
        panes.chat.map(|r| r.width),
        Some(TABLET_WIDTH - CONTACTS_WIDTH)
    );
    assert!(panes.search.is_none());
}

#[test]
fn desktop_width_adds_search_panel() {
    let panes = calculate_panes(area(DESKTOP_WIDTH), NarrowView::Chat, true);

    assert_eq!(panes.search.map(|r| r.width), Some(SEARCH_PANEL_WIDTH));
    assert_eq!(
        panes.chat.map(|r| r.width),
        Some(DESKTOP_WIDTH - CONTACTS_WIDTH - SEARCH_PANEL_WIDTH)
    );
}

#[test]
fn search_panel_can_be_disabled() {
    let panes = calculate_panes(area(DESKTOP_WIDTH), NarrowView::Chat, false);
    assert!(panes.search.is_none());
}

#[test]
fn status_bar_takes_last_row() {
    let panes = calculate_panes(area(100), NarrowView::Chat, true);

    assert_eq!(panes.status.y, 29);
    assert_eq!(panes.status.height, STATUS_BAR_HEIGHT);
    assert_eq!(panes.chat.map(|r| r.height), Some(29));
}
