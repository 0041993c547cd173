//! Form fields and their values

/// The four contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Display label for the field
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Whether the field accepts multi-line input
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

/// Current values of the four text fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    /// Get the value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Get a mutable reference to a field's value
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Reset every field to the empty string
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_all_empty() {
        let values = FormValues::default();
        for field in Field::ALL {
            assert_eq!(values.get(field), "");
        }
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut values = FormValues::default();
        values.get_mut(Field::Email).push_str("ada@example.com");
        assert_eq!(values.email, "ada@example.com");
        assert_eq!(values.get(Field::Email), "ada@example.com");
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut values = FormValues {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        values.reset();
        assert_eq!(values, FormValues::default());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::FirstName.label(), "First Name");
        assert_eq!(Field::LastName.label(), "Last Name");
        assert_eq!(Field::Email.label(), "Email");
        assert_eq!(Field::Message.label(), "Message");
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(Field::Message.is_multiline());
        assert!(!Field::FirstName.is_multiline());
        assert!(!Field::LastName.is_multiline());
        assert!(!Field::Email.is_multiline());
    }
}
