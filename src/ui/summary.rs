//! Last-submission summary table

use crate::app::App;
use crate::state::Field;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Draw the summary panel: a table of the last accepted submission, or an
/// empty state before the first one
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Last Submission ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(submission) = &app.state.last_submission else {
        draw_empty_state(frame, area, block);
        return;
    };

    let header = Row::new([Cell::from("Field"), Cell::from("Value")])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = Field::ALL.into_iter().map(|field| {
        let value = submission.get(field);
        let height = value.lines().count().max(1) as u16;
        Row::new([
            Cell::from(format!("{}*", field.label())),
            Cell::from(Text::from(value.to_string())),
        ])
        .height(height)
    });

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
        .header(header)
        .block(block);

    frame.render_widget(table, area);
}

/// Empty state shown before the first accepted submission
fn draw_empty_state(frame: &mut Frame, area: Rect, block: Block) {
    let text = "Nothing submitted yet.\n\nAccepted values will appear here.";
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
