//! Delivery Module
//!
//! The outbound leg of the service: relays each accepted contact message as
//! a single JSON POST to the upstream contact API, with no retry, and turns
//! the upstream reply into a success or an error.
//!
//! ## Submodules
//! - **`client`**: the reqwest-backed `DeliveryClient`.
//! - **`protocol`**: the upstream endpoint and the delivery receipt.

pub mod client;
pub mod protocol;

#[cfg(test)]
mod tests;
