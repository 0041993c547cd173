//! Pure validation of form values

use crate::state::{Field, FieldErrors, FormValues};

/// Validate the form, returning one fixed message per failing field.
///
/// Rules are field-local; there are no cross-field rules. Values are not
/// trimmed, so whitespace-only input counts as non-empty and passes the
/// "required" checks.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if values.first_name.is_empty() {
        errors.set(Field::FirstName, "First name is required");
    }
    if values.last_name.is_empty() {
        errors.set(Field::LastName, "Last name is required");
    }
    if values.email.is_empty() {
        errors.set(Field::Email, "Email is required");
    } else if !contains_email(&values.email) {
        errors.set(Field::Email, "Email address is invalid");
    }
    if values.message.is_empty() {
        errors.set(Field::Message, "Message is required");
    }

    errors
}

/// True when any substring of `input` matches `\S+@\S+\.\S+`.
///
/// A deliberately permissive syntactic check, not RFC validation: some
/// non-space character before an `@`, then a contiguous non-space run
/// containing a `.` with at least one character on each side of it.
fn contains_email(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' {
            continue;
        }
        // `\S+` before the `@`: one non-space character suffices
        if i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        // `\S+\.\S+` after the `@` must fit inside the contiguous
        // non-space run that follows it
        let run_end = chars[i + 1..]
            .iter()
            .position(|ch| ch.is_whitespace())
            .map_or(chars.len(), |n| i + 1 + n);
        let run = &chars[i + 1..run_end];
        if run.len() >= 3 && run[1..run.len() - 1].contains(&'.') {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_values() -> FormValues {
        FormValues {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    mod validate_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_valid_returns_no_errors() {
            let errors = validate(&valid_values());
            assert!(errors.is_empty());
        }

        #[test]
        fn test_all_empty_flags_every_field() {
            let errors = validate(&FormValues::default());
            assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
            assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
            assert_eq!(errors.get(Field::Email), Some("Email is required"));
            assert_eq!(errors.get(Field::Message), Some("Message is required"));
            assert_eq!(errors.len(), 4);
        }

        #[test]
        fn test_single_empty_field_flags_exactly_that_field() {
            let mut values = valid_values();
            values.last_name.clear();
            let errors = validate(&values);
            assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_invalid_email_is_the_only_error() {
            let mut values = valid_values();
            values.email = "not-an-email".to_string();
            let errors = validate(&values);
            assert_eq!(errors.get(Field::Email), Some("Email address is invalid"));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_empty_email_reports_required_not_invalid() {
            let mut values = valid_values();
            values.email.clear();
            let errors = validate(&values);
            assert_eq!(errors.get(Field::Email), Some("Email is required"));
        }

        #[test]
        fn test_whitespace_only_passes_required() {
            // Values are not trimmed: spaces count as content
            let values = FormValues {
                first_name: "   ".to_string(),
                last_name: " ".to_string(),
                email: "ada@example.com".to_string(),
                message: "\t".to_string(),
            };
            let errors = validate(&values);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_whitespace_only_email_is_invalid_not_required() {
            let mut values = valid_values();
            values.email = "   ".to_string();
            let errors = validate(&values);
            assert_eq!(errors.get(Field::Email), Some("Email address is invalid"));
        }
    }

    mod email_pattern {
        use super::*;

        #[test]
        fn test_plain_address_matches() {
            assert!(contains_email("ada@example.com"));
            assert!(contains_email("a@b.c"));
        }

        #[test]
        fn test_no_at_sign_fails() {
            assert!(!contains_email("not-an-email"));
        }

        #[test]
        fn test_missing_dot_after_at_fails() {
            assert!(!contains_email("ada@example"));
        }

        #[test]
        fn test_dot_needs_chars_on_both_sides() {
            assert!(!contains_email("ada@.com"));
            assert!(!contains_email("ada@example."));
        }

        #[test]
        fn test_space_before_at_breaks_match() {
            assert!(!contains_email("ada @example.com"));
        }

        #[test]
        fn test_space_in_domain_breaks_match() {
            assert!(!contains_email("ada@exa mple.com"));
        }

        #[test]
        fn test_matches_anywhere_in_input() {
            // The pattern is a search, not a full-string match
            assert!(contains_email("contact me at ada@example.com please"));
            assert!(contains_email("ada@example.com "));
        }

        #[test]
        fn test_later_at_sign_can_still_match() {
            assert!(contains_email("@@ ada@example.com"));
            assert!(contains_email("a@@b.c"));
        }

        #[test]
        fn test_trailing_dot_run_matches() {
            // `\S+` may end on a dot; "b.." still contains "b." + "."
            assert!(contains_email("a@b.."));
        }
    }
}
