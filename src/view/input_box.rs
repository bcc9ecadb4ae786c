//! Bordered single-line input widget.
//!
//! Renders the contact filter, the composer and the message search box.

use crate::state::TextInput;
use crate::view::ChatStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Input box widget.
///
/// Shows the placeholder while empty and unfocused; shows a block cursor
/// while focused.
pub struct InputBox<'a> {
    input: &'a TextInput,
    placeholder: &'a str,
    focused: bool,
    styles: ChatStyles,
}

impl<'a> InputBox<'a> {
    /// Create new InputBox widget.
    pub fn new(input: &'a TextInput, placeholder: &'a str, styles: ChatStyles) -> Self {
        Self {
            input,
            placeholder,
            focused: false,
            styles,
        }
    }

    /// Mark the box as having keyboard focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn line(&self) -> Line<'a> {
        let value = self.input.value();

        if !self.focused {
            return if value.is_empty() {
                Line::from(Span::styled(self.placeholder, self.styles.muted()))
            } else {
                Line::from(value)
            };
        }

        let cursor = self.input.cursor();
        let before: String = value.chars().take(cursor).collect();
        let mut after = value.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let rest: String = after.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char,
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw(rest),
        ])
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.styles.focused_border()
        } else {
            self.styles.border()
        };

        Paragraph::new(self.line())
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::buffer_to_string;
    use crate::view::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(input: &TextInput, focused: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(24, 3)).expect("test backend");
        let styles = ChatStyles::with_color_config(ColorConfig::new(false));

        terminal
            .draw(|frame| {
                let widget = InputBox::new(input, "Aa", styles).focused(focused);
                frame.render_widget(widget, frame.area());
            })
            .expect("draw");

        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn empty_unfocused_box_shows_placeholder() {
        let screen = render(&TextInput::new(), false);
        assert!(screen.contains("│Aa"), "got:\n{screen}");
    }

    #[test]
    fn focused_box_hides_placeholder() {
        let screen = render(&TextInput::new(), true);
        assert!(!screen.contains("Aa"), "got:\n{screen}");
    }

    #[test]
    fn typed_text_is_shown() {
        let mut input = TextInput::new();
        for ch in "hey".chars() {
            input.insert(ch);
        }
        let screen = render(&input, true);
        assert!(screen.contains("│hey"), "got:\n{screen}");
    }
}
