//! Per-field validation error state

use super::form::Field;

/// Sparse mapping of field to validation message.
///
/// A slot is `Some` exactly while that field fails its rule as of the last
/// validation pass, minus any slots cleared eagerly by later edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    /// Get the error message for a field, if any
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Record an error message for a field
    pub fn set(&mut self, field: Field, message: &'static str) {
        *self.slot(field) = Some(message);
    }

    /// Remove a field's error, if present
    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    /// True when no field has an error
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_none())
    }

    /// Number of fields currently in error
    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|&&f| self.get(f).is_some()).count()
    }
}
