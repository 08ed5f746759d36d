//! Contact Module
//!
//! The user-facing surface of the service.
//!
//! ## Overview
//! A submission arrives from the contact page as a `ContactMessage`, is
//! checked against the field rules in [`crate::validation`] and, if
//! accepted, handed to [`crate::delivery`] for the single outbound POST.
//! The handler answers with a `success` flag the page script acts on:
//! reset the form, or show the returned error text inline.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod types;
