//! Application state and the form's state transitions

use super::errors::FieldErrors;
use super::form::{Field, FormValues};
use crate::validation::validate;

/// Index of the Submit button in the focus cycle (after the four fields)
pub const SUBMIT_INDEX: usize = Field::ALL.len();

/// Number of focusable slots: four fields plus the Submit button
pub const FOCUS_SLOTS: usize = SUBMIT_INDEX + 1;

/// All state driving the contact form
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current values of the four text fields
    pub form: FormValues,
    /// Validation messages from the last rejected submission, minus any
    /// cleared eagerly by later edits
    pub errors: FieldErrors,
    /// Snapshot of the last accepted submission, if any
    pub last_submission: Option<FormValues>,
    /// Focus position: 0..4 are the fields, 4 is the Submit button
    pub focus_index: usize,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// The focused field, or `None` when the Submit button is focused
    pub fn active_field(&self) -> Option<Field> {
        Field::ALL.get(self.focus_index).copied()
    }

    /// True when focus is on the Submit button
    pub fn is_submit_focused(&self) -> bool {
        self.focus_index == SUBMIT_INDEX
    }

    /// Move focus to the next slot (wraps around)
    pub fn next_focus(&mut self) {
        self.focus_index = (self.focus_index + 1) % FOCUS_SLOTS;
    }

    /// Move focus to the previous slot (wraps around)
    pub fn prev_focus(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = FOCUS_SLOTS - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    /// Append a character to the focused field.
    ///
    /// Any edit to a field clears that field's error without re-validating;
    /// the field is assumed fixed until the next submission attempt.
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            self.form.get_mut(field).push(c);
            self.errors.clear(field);
        }
    }

    /// Insert a newline into the focused field (message only)
    pub fn input_newline(&mut self) {
        if let Some(field) = self.active_field() {
            if field.is_multiline() {
                self.form.get_mut(field).push('\n');
                self.errors.clear(field);
            }
        }
    }

    /// Remove the last character from the focused field.
    ///
    /// A backspace on an already-empty field changes nothing, so it does
    /// not count as an edit and leaves any error in place.
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            if self.form.get_mut(field).pop().is_some() {
                self.errors.clear(field);
            }
        }
    }

    /// Attempt to submit the form. Returns true when the submission was
    /// accepted.
    ///
    /// On rejection the validation result replaces the error state and the
    /// form values are left untouched. On acceptance the values are
    /// promoted to `last_submission`, the form and errors are reset, and
    /// focus returns to the first field.
    pub fn submit(&mut self) -> bool {
        let errors = validate(&self.form);
        if !errors.is_empty() {
            self.errors = errors;
            self.status_message = None;
            return false;
        }

        tracing::info!(
            first_name = %self.form.first_name,
            last_name = %self.form.last_name,
            email = %self.form.email,
            message = %self.form.message,
            "submission accepted"
        );

        self.last_submission = Some(self.form.clone());
        self.form.reset();
        self.errors = FieldErrors::default();
        self.focus_index = 0;
        self.status_message = Some("Message sent".to_string());
        true
    }
}
