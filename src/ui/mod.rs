//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;
mod summary;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Form on the left, last-submission summary on the right
    let (form_area, summary_area) = layout::create_layout(area);

    form::draw(frame, form_area, app);
    summary::draw(frame, summary_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
