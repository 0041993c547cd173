//! Contact form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_error_line, draw_field};
use crate::app::App;
use crate::state::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form: four labeled fields, each with an error line
/// directly below it, and the Submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First name
            Constraint::Length(1), // error
            Constraint::Length(3), // Last name
            Constraint::Length(1), // error
            Constraint::Length(3), // Email
            Constraint::Length(1), // error
            Constraint::Min(5),    // Message
            Constraint::Length(1), // error
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .margin(1)
        .split(area);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let error = app.state.errors.get(field);
        draw_field(
            frame,
            chunks[i * 2],
            field.label(),
            app.state.form.get(field),
            app.state.active_field() == Some(field),
            field.is_multiline(),
            error.is_some(),
        );
        draw_error_line(frame, chunks[i * 2 + 1], error);
    }

    render_button(frame, chunks[8], "Submit", app.state.is_submit_focused());
}
