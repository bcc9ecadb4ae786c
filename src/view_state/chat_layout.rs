//! Line layout for the conversation pane.
//!
//! Pure computation: wraps message bubbles to the pane width, remembers
//! where each message starts, and resolves a [`ChatScroll`] into the first
//! visible line. The renderer and the scroll handler share this so that a
//! search hit scrolls to exactly the line that gets highlighted.

use crate::model::{Message, MessageId};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Share of the pane width a bubble may occupy.
pub const BUBBLE_WIDTH_PERCENT: usize = 70;

/// Narrowest bubble; wide enough for any single double-width character.
pub const MIN_BUBBLE_WIDTH: usize = 2;

/// Lines left above a scroll target so it doesn't sit flush under the header.
pub const TARGET_MARGIN: usize = 1;

// ===== ChatScroll =====

/// Requested scroll position of the conversation pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatScroll {
    /// Follow the newest message.
    #[default]
    Bottom,
    /// First visible line, clamped on render.
    Line(usize),
    /// Bring this message into view near the top.
    Target(MessageId),
}

/// Scroll geometry captured at the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatViewport {
    /// First visible line.
    pub top: usize,
    /// Largest valid first line.
    pub max_top: usize,
    /// Visible rows.
    pub height: usize,
}

// ===== ChatLayout =====

/// One wrapped row of a message bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    /// Message the row belongs to.
    pub message_id: MessageId,
    /// Row text, at most the bubble width wide.
    pub text: String,
    /// Own messages are right-aligned.
    pub written_by_me: bool,
}

/// Wrapped rows for a sequence of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLayout {
    lines: Vec<LayoutLine>,
    starts: Vec<(MessageId, usize)>,
    bubble_width: usize,
}

impl ChatLayout {
    /// Lay out `messages` (oldest first) for a pane `pane_width` columns wide.
    pub fn build<'a>(messages: impl IntoIterator<Item = &'a Message>, pane_width: usize) -> Self {
        let bubble_width = bubble_width(pane_width);
        let mut layout = Self {
            bubble_width,
            ..Self::default()
        };

        for message in messages {
            layout.starts.push((message.id, layout.lines.len()));
            for text in wrap_text(&message.content, bubble_width) {
                layout.lines.push(LayoutLine {
                    message_id: message.id,
                    text,
                    written_by_me: message.written_by_me,
                });
            }
        }

        layout
    }

    /// All rows, top to bottom.
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Number of rows.
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Maximum text width of a row.
    pub fn bubble_width(&self) -> usize {
        self.bubble_width
    }

    /// Row index where `id` starts.
    pub fn start_of(&self, id: MessageId) -> Option<usize> {
        self.starts
            .iter()
            .find(|(message_id, _)| *message_id == id)
            .map(|(_, start)| *start)
    }

    /// Largest first line that still fills a viewport of `height` rows.
    pub fn max_top(&self, height: usize) -> usize {
        self.total_lines().saturating_sub(height)
    }

    /// Resolve `scroll` into the first visible row.
    ///
    /// Unknown targets fall back to the bottom.
    pub fn top_line(&self, scroll: ChatScroll, height: usize) -> usize {
        let max_top = self.max_top(height);
        match scroll {
            ChatScroll::Bottom => max_top,
            ChatScroll::Line(line) => line.min(max_top),
            ChatScroll::Target(id) => self
                .start_of(id)
                .map(|start| start.saturating_sub(TARGET_MARGIN).min(max_top))
                .unwrap_or(max_top),
        }
    }

    /// Geometry for a viewport of `height` rows at `scroll`.
    pub fn viewport(&self, scroll: ChatScroll, height: usize) -> ChatViewport {
        ChatViewport {
            top: self.top_line(scroll, height),
            max_top: self.max_top(height),
            height,
        }
    }
}

fn bubble_width(pane_width: usize) -> usize {
    (pane_width * BUBBLE_WIDTH_PERCENT / 100).max(MIN_BUBBLE_WIDTH)
}

// ===== Wrapping =====

/// Greedy word wrap by display width.
///
/// Runs of whitespace collapse to one space; newlines start a new row;
/// words wider than `width` are broken at character boundaries. A single
/// character wider than `width` still gets a row of its own, so rows only
/// fit when `width >= MIN_BUBBLE_WIDTH`. Always returns at least one row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        rows.push(current);
    }

    rows
}
