//! Validation Module
//!
//! Field rules for contact submissions.
//!
//! ## Overview
//! Every submission passes through the same four checks in a fixed order:
//! name, email presence, email pattern, message presence. Evaluation stops
//! at the first failing rule, which carries the field it belongs to and the
//! text shown to the user.
//!
//! ## Submodules
//! - **`rules`**: the rule implementations and their patterns.
//! - **`types`**: the `FieldError` enum returned by the rules.

pub mod rules;
pub mod types;
