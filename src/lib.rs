//! Contact Relay Library
//!
//! This library crate defines the core modules of the contact relay service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`contact`**: The user-facing surface. Defines the `ContactMessage` record
//!   and the HTTP handler that accepts submissions from the contact page.
//! - **`validation`**: The field rules (name, email, message), applied in a fixed
//!   order with the first failing rule reported back to the user.
//! - **`delivery`**: The outbound leg. Relays each accepted record as a single
//!   JSON POST to the upstream contact API and interprets the reply.

pub mod contact;
pub mod delivery;
pub mod validation;
