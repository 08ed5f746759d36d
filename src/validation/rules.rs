use regex::Regex;

use super::types::FieldError;
use crate::contact::types::ContactMessage;

/// Two consecutive letters, anywhere in the value.
const NAME_PATTERN: &str = r"[A-Za-z][A-Za-z]";
/// RFC-light address shape; the final label is 2-6 word characters.
/// The whole pattern is optional, so it accepts the empty string.
const EMAIL_PATTERN: &str = r"^([\w.-]+@([\w-]+\.)+[\w-]{2,6})?$";

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let re = Regex::new(NAME_PATTERN).unwrap();
    if re.is_match(name) {
        Ok(())
    } else {
        Err(FieldError::NameTooShort)
    }
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    // The pattern matches "", so presence has to be checked first.
    if email.is_empty() {
        return Err(FieldError::EmailMissing);
    }

    let re = Regex::new(EMAIL_PATTERN).unwrap();
    if re.is_match(email) {
        Ok(())
    } else {
        Err(FieldError::EmailInvalid)
    }
}

pub fn validate_message(message: &str) -> Result<(), FieldError> {
    if message.is_empty() {
        return Err(FieldError::MessageMissing);
    }
    Ok(())
}

/// Runs all field rules in order. The first failing rule is returned and
/// the remaining rules are not evaluated.
pub fn validate_contact(msg: &ContactMessage) -> Result<(), FieldError> {
    validate_name(&msg.name)?;
    validate_email(&msg.email)?;
    validate_message(&msg.message)?;
    Ok(())
}
