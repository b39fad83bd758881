//! Validation Utilities
//!
//! Helpers shared by the request validators: turning `validator` failures into
//! a single client-facing message and parsing record identifiers.

use mongodb::bson::oid::ObjectId;
use validator::ValidationErrors;

/// Message for a username that already exists in the store
pub fn username_taken_message(username: &str) -> String {
    format!(
        "expected `username` to be unique, `{}` is already taken",
        username
    )
}

/// Flatten validation errors into one message
///
/// Fields are reported in name order so the output is stable across runs.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut messages: Vec<String> = Vec::new();
    for (field, field_errors) in fields {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid value for field '{}'", field));
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }

    messages.join(", ")
}

/// Parse a client-supplied record id
pub fn parse_record_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_describe_validation_errors_sorted_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "username",
            ValidationError::new("length")
                .with_message("username must be at least 3 characters long".into()),
        );
        errors.add(
            "password",
            ValidationError::new("length")
                .with_message("password must be at least 3 characters long".into()),
        );

        let message = describe_validation_errors(&errors);
        assert_eq!(
            message,
            "password must be at least 3 characters long, username must be at least 3 characters long"
        );
    }

    #[test]
    fn test_describe_validation_errors_without_message() {
        let mut errors = ValidationErrors::new();
        errors.add("likes", ValidationError::new("range"));

        assert_eq!(
            describe_validation_errors(&errors),
            "invalid value for field 'likes'"
        );
    }

    #[test]
    fn test_username_taken_message() {
        let message = username_taken_message("root");
        assert!(message.contains("expected `username` to be unique"));
        assert!(message.contains("root"));
    }

    #[test]
    fn test_parse_record_id() {
        assert!(parse_record_id("5a422a851b54a676234d17f7").is_some());
        assert!(parse_record_id("not-an-id").is_none());
        assert!(parse_record_id("").is_none());
    }
}
