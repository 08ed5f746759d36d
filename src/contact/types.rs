//! Contact Data Types
//!
//! Defines the contact record and the submit-endpoint response DTO.

use serde::{Deserialize, Serialize};

/// A single contact-form submission.
///
/// Constructed fresh per submission attempt and discarded once the relay
/// completes. Serializes to exactly `{"name":…,"email":…,"message":…}`,
/// which is also the body posted upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response returned to the page after a submission attempt.
///
/// On a validation failure `field` names the offending input and `error`
/// carries the text to show inline. On a delivery failure only `error` is
/// set. The page resets the form if and only if `success` is true.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub field: Option<String>,
    pub error: Option<String>,
}
