//! Validation Error Types
//!
//! One variant per field rule. Each error knows which input it belongs to
//! and the exact text the page shows for it.

/// A rejected field rule.
///
/// Returned by the functions in [`super::rules`]; only the first failing
/// rule of a submission is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The name does not contain two consecutive alphabetic characters.
    NameTooShort,
    /// The email field is empty.
    EmailMissing,
    /// The email is non-empty but does not match the address pattern.
    EmailInvalid,
    /// The message field is empty.
    MessageMissing,
}

impl FieldError {
    /// The form field this rule belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameTooShort => "name",
            FieldError::EmailMissing | FieldError::EmailInvalid => "email",
            FieldError::MessageMissing => "message",
        }
    }

    /// The user-facing rejection text.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::NameTooShort => "Name can not less than 2 char",
            FieldError::EmailMissing => "Please enter your email address",
            FieldError::EmailInvalid => "Please enter valid email address",
            FieldError::MessageMissing => "Please enter a message",
        }
    }
}
