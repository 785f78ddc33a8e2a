use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::application::{AttachmentForm, FormField};

const FIELD_HEIGHT: u16 = 3;
const HINT: &str = "Enter: upload | ←/→: priority | Esc: back to list";

pub fn render(frame: &mut Frame, area: Rect, form: &AttachmentForm, focused: bool) {
    let outer_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let outer = Block::default()
        .title("Upload attachment")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(outer_style);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FormField::ALL.iter().enumerate() {
        let active = focused && form.focused() == *field;
        let style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = if field.is_text() {
            form.value(*field).to_string()
        } else {
            format!("< {} >", form.value(*field))
        };

        let block = Block::default()
            .title(field.label())
            .borders(Borders::ALL)
            .border_style(style);
        frame.render_widget(Paragraph::new(text.clone()).block(block), chunks[i]);

        if active && field.is_text() {
            let cursor_x = chunks[i].x + 1 + text.chars().count() as u16;
            if cursor_x < chunks[i].x + chunks[i].width.saturating_sub(1) {
                frame.set_cursor_position(ratatui::layout::Position {
                    x: cursor_x,
                    y: chunks[i].y + 1,
                });
            }
        }
    }

    frame.render_widget(
        Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray)),
        chunks[FormField::ALL.len()],
    );
}
