use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
};

use crate::domain::AttachmentSummary;

pub const HEADERS: [&str; 3] = ["File", "Priority", "Uploaded"];

/// Cell text for one attachment: name, priority (`-` when absent), upload time.
pub fn row_cells(attachment: &AttachmentSummary) -> [String; 3] {
    [
        attachment.file_name.clone(),
        attachment.priority_display().to_string(),
        attachment.uploaded_at.clone(),
    ]
}

fn priority_color(priority: &str) -> Color {
    match priority {
        "high" => Color::Red,
        "medium" => Color::Yellow,
        "low" => Color::Green,
        _ => Color::DarkGray,
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    attachments: &[AttachmentSummary],
    state: &mut TableState,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = attachments.iter().map(|attachment| {
        let [name, priority, uploaded] = row_cells(attachment);
        let color = priority_color(&priority);
        Row::new(vec![
            Cell::from(name),
            Cell::from(priority).style(Style::default().fg(color)),
            Cell::from(uploaded).style(Style::default().fg(Color::Gray)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, state);
}
