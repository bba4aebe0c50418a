//! Text input widget
//!
//! A single-line field with a label, placeholder and a character cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    pub focused: bool,
    /// Read-only fields ignore edits and never show a cursor
    pub read_only: bool,
    pub placeholder: String,
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Builder form of [`set_content`](Self::set_content)
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        if self.read_only {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.read_only || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.read_only || self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let value_style = if self.read_only {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![Span::styled(format!("{}: ", self.label), label_style)];

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.focused && !self.read_only {
            let split = self.byte_index(self.cursor);
            let (before, after) = self.content.split_at(split);
            let mut rest = after.chars();
            let cursor_char = rest.next().unwrap_or(' ');

            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(rest.as_str(), value_style));
        } else {
            spans.push(Span::styled(self.content.as_str(), value_style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('4');
        input.insert('0');
        assert_eq!(input.value(), "40");

        input.backspace();
        assert_eq!(input.value(), "4");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_cursor_counts_characters() {
        let mut input = TextInput::new().content("₹10");
        assert_eq!(input.cursor(), 3);
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "10");
        input.move_end();
        input.insert('0');
        assert_eq!(input.value(), "100");
    }

    #[test]
    fn test_read_only_ignores_edits() {
        let mut input = TextInput::new().content("60").read_only();
        input.insert('1');
        input.backspace();
        input.delete();
        assert_eq!(input.value(), "60");
    }

    #[test]
    fn test_render_label_and_value() {
        let input = TextInput::new().label("Bill value").content("100");
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.starts_with("Bill value: 100"));
    }
}
