//! Form state management for Portico
//!
//! This crate owns the state behind every data-entry screen: declarative
//! field specs, per-field interaction state, submit-time validation and the
//! asynchronous runner that hands validated values to a screen's action.
//!
//! # Modules
//!
//! - [`field`] - Field declarations and per-field state transitions
//! - [`validation`] - Failure reasons, validation results and payloads
//! - [`form`] - Form state and synchronous submit orchestration
//! - [`submit`] - Cancellable asynchronous success actions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod form;
pub mod submit;
pub mod validation;

pub use field::{FieldSpec, FieldState, FormPolicy, LeadingIcon, VisualState};
pub use form::{Form, FormError, FormState, SubmitOutcome};
pub use submit::{ActionError, ActionOutcome, FormRunner, SharedForm, SubmitAction};
pub use validation::{FailureReason, FieldValidation, SubmitPayload, ValidationResult};
