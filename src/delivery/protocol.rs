//! Delivery Protocol
//!
//! The upstream endpoint and the outcome type of a completed delivery.

use serde_json::Value;

/// Default upstream endpoint accepting relayed contact messages.
///
/// Overridable at startup via `CONTACT_UPSTREAM`.
pub const DEFAULT_UPSTREAM: &str =
    "https://uvgh6tpjf6.execute-api.eu-west-1.amazonaws.com/dev/contact";

/// Outcome of an accepted delivery.
///
/// Only produced when the upstream answered with a 2xx status and did not
/// explicitly report `success: false` in its body.
#[derive(Debug)]
pub struct DeliveryReceipt {
    /// HTTP status returned by the upstream.
    pub status: u16,
    /// The upstream reply body, when it was readable JSON.
    /// Upstream replies are not guaranteed to be JSON at all.
    pub body: Option<Value>,
}
