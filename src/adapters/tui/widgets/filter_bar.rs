use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Single-line filter for the attachment list.
pub struct FilterBar {
    query: String,
    is_focused: bool,
}

impl FilterBar {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            is_focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn delete_char(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.is_focused {
            "Filter (focused)"
        } else {
            "Filter (press / to focus)"
        };

        let border_style = if self.is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let text = if self.query.is_empty() {
            if self.is_focused {
                "Type to filter by file name or tag..."
            } else {
                "Press / to filter"
            }
        } else {
            &self.query
        };

        let text_style = if self.query.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        frame.render_widget(Paragraph::new(text).block(block).style(text_style), area);

        if self.is_focused && !self.query.is_empty() {
            let cursor_x = area.x + 1 + self.query.chars().count() as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(ratatui::layout::Position {
                    x: cursor_x,
                    y: area.y + 1,
                });
            }
        }
    }
}
