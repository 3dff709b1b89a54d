//! Core services for Portico
//!
//! This crate provides the application services that sit between the
//! screens and storage. Today that is the stored session: establishing it
//! after a successful sign-in, checking it at startup and clearing it on
//! sign-out.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;

pub use auth::{AuthError, SessionMarker, SessionService, SESSION_TOKEN_KEY};
