//! Form state and submit orchestration
//!
//! A [`Form`] pairs the [`FieldSpec`]s declared by a screen with their live
//! [`FieldState`]s. Field events are forwarded by name; [`Form::submit`]
//! validates every field in declaration order and either marks the failed
//! fields or yields a [`SubmitPayload`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{FieldSpec, FieldState, FormPolicy};
use crate::validation::{validate_value, SubmitPayload, ValidationResult};

/// Form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// No field with this name
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Two specs share a name
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// Visibility toggle on a non-secure field
    #[error("Field is not secure: {0}")]
    NotSecure(String),

    /// A submission is already running
    #[error("A submission is already in flight")]
    SubmitInFlight,
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Live state of every field plus the in-flight flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    fields: Vec<(String, FieldState)>,
    /// True between submit initiation and completion
    pub submitting: bool,
}

impl FormState {
    fn new(specs: &[FieldSpec]) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|spec| (spec.name.clone(), FieldState::new(spec)))
                .collect(),
            submitting: false,
        }
    }

    /// State of a field
    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Field states in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Whether any field currently shows an error
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|(_, s)| s.has_error())
    }
}

/// Result of a synchronous submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; failed fields now show errors
    Invalid(ValidationResult),
    /// Every field passed
    Valid(SubmitPayload),
}

impl SubmitOutcome {
    /// The payload, if the submit was valid
    pub fn payload(&self) -> Option<&SubmitPayload> {
        match self {
            SubmitOutcome::Valid(payload) => Some(payload),
            SubmitOutcome::Invalid(_) => None,
        }
    }

    /// Whether the submit was valid
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid(_))
    }
}

/// A named set of fields bound to their validation rules
#[derive(Debug, Clone)]
pub struct Form {
    specs: Vec<FieldSpec>,
    state: FormState,
    policy: FormPolicy,
}

impl Form {
    /// Mount a form; every field starts empty and idle
    pub fn new(specs: Vec<FieldSpec>, policy: FormPolicy) -> Result<Self> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|s| s.name == spec.name) {
                return Err(FormError::DuplicateField(spec.name.clone()));
            }
        }

        Ok(Self {
            state: FormState::new(&specs),
            specs,
            policy,
        })
    }

    /// Field declarations
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Current state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Error-clearing policy
    pub fn policy(&self) -> FormPolicy {
        self.policy
    }

    /// State of one field
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.state.get(name)
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.specs
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Forward typed text to a field
    pub fn change_text(&mut self, name: &str, text: impl Into<String>) -> Result<()> {
        let i = self.index_of(name)?;
        self.state.fields[i].1.change_text(text, &self.policy);
        Ok(())
    }

    /// Forward a focus event to a field
    pub fn focus(&mut self, name: &str) -> Result<()> {
        let i = self.index_of(name)?;
        self.state.fields[i].1.focus(&self.policy);
        Ok(())
    }

    /// Forward a blur event to a field
    pub fn blur(&mut self, name: &str) -> Result<()> {
        let i = self.index_of(name)?;
        self.state.fields[i].1.blur();
        Ok(())
    }

    /// Flip text obscuring on a secure field, returning the new hidden flag
    pub fn toggle_visibility(&mut self, name: &str) -> Result<bool> {
        let i = self.index_of(name)?;
        let (spec, (_, state)) = (&self.specs[i], &mut self.state.fields[i]);
        if !state.toggle_visibility(spec) {
            return Err(FormError::NotSecure(name.to_string()));
        }
        Ok(state.text_hidden)
    }

    /// Evaluate every field's rules without touching state
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        for (spec, (_, state)) in self.specs.iter().zip(&self.state.fields) {
            result.push(spec.name.clone(), validate_value(spec, &state.value));
        }
        result
    }

    /// Validate and either mark failed fields or build the payload
    ///
    /// Fields that pass keep whatever visual state they had; only focus and
    /// text changes move a field out of `Error`.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.state.submitting {
            return Err(FormError::SubmitInFlight);
        }

        let result = self.validate();
        if !result.is_success() {
            for (spec, (_, state)) in self.specs.iter().zip(self.state.fields.iter_mut()) {
                if let Some(reason) = result.failure_for(&spec.name) {
                    state.mark_failed(spec.failure_message(reason));
                }
            }
            tracing::debug!(
                failed = ?result.failures().map(|(name, _)| name).collect::<Vec<_>>(),
                "Submit rejected"
            );
            return Ok(SubmitOutcome::Invalid(result));
        }

        let payload = self
            .state
            .fields
            .iter()
            .map(|(name, state)| (name.clone(), state.value.clone()))
            .collect();
        Ok(SubmitOutcome::Valid(payload))
    }

    pub(crate) fn begin_submit(&mut self) {
        self.state.submitting = true;
    }

    pub(crate) fn finish_submit(&mut self) {
        self.state.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::VisualState;
    use crate::validation::FailureReason;

    fn login_form() -> Form {
        Form::new(
            vec![
                FieldSpec::new("username", "Username").required(),
                FieldSpec::password("password", "Password").with_max_length(100),
            ],
            FormPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Form::new(
            vec![FieldSpec::new("a", "A"), FieldSpec::new("a", "Again")],
            FormPolicy::default(),
        );
        assert_eq!(result.unwrap_err(), FormError::DuplicateField("a".to_string()));
    }

    #[test]
    fn test_unknown_field() {
        let mut form = login_form();
        assert_eq!(
            form.change_text("email", "x"),
            Err(FormError::UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_missing_username_scenario() {
        let mut form = login_form();
        form.change_text("password", "abc").unwrap();

        let outcome = form.submit().unwrap();
        let SubmitOutcome::Invalid(result) = outcome else {
            panic!("expected invalid outcome");
        };

        assert_eq!(result.failure_for("username"), Some(FailureReason::Missing));
        assert_eq!(result.failure_for("password"), None);

        let username = form.field("username").unwrap();
        assert_eq!(username.visual_state, VisualState::Error);
        assert_eq!(username.error_message.as_deref(), Some("Username is required"));
        assert_eq!(form.field("password").unwrap().visual_state, VisualState::Idle);
    }

    #[test]
    fn test_valid_scenario_yields_payload() {
        let mut form = login_form();
        form.change_text("username", "alice").unwrap();
        form.change_text("password", "secret").unwrap();

        let outcome = form.submit().unwrap();
        let payload = outcome.payload().unwrap();
        assert_eq!(payload.get("username"), Some("alice"));
        assert_eq!(payload.get("password"), Some("secret"));
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn test_too_long_password() {
        let mut form = login_form();
        form.change_text("username", "alice").unwrap();
        form.change_text("password", "x".repeat(101)).unwrap();

        let outcome = form.submit().unwrap();
        let SubmitOutcome::Invalid(result) = outcome else {
            panic!("expected invalid outcome");
        };
        assert_eq!(result.failure_for("password"), Some(FailureReason::TooLong));
        assert_eq!(
            form.field("password").unwrap().error_message.as_deref(),
            Some("Password must be at most 100 characters")
        );

        form.change_text("password", "x".repeat(100)).unwrap();
        assert!(form.submit().unwrap().is_valid());
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut form = login_form();
        form.change_text("username", "alice").unwrap();
        form.change_text("password", "secret").unwrap();

        let first = form.submit().unwrap();
        let second = form.submit().unwrap();
        assert_eq!(first, second);
        assert!(first.is_valid());
    }

    #[test]
    fn test_submit_refused_while_in_flight() {
        let mut form = login_form();
        form.begin_submit();
        assert_eq!(form.submit(), Err(FormError::SubmitInFlight));

        form.finish_submit();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_toggle_visibility_on_plain_field() {
        let mut form = login_form();
        assert_eq!(
            form.toggle_visibility("username"),
            Err(FormError::NotSecure("username".to_string()))
        );
        assert_eq!(form.toggle_visibility("password"), Ok(false));
        assert_eq!(form.toggle_visibility("password"), Ok(true));
    }

    #[test]
    fn test_error_recovery_by_editing() {
        let mut form = login_form();
        form.submit().unwrap();
        assert!(form.state().has_errors());

        form.focus("username").unwrap();
        assert_eq!(form.field("username").unwrap().visual_state, VisualState::Focused);
        form.change_text("username", "alice").unwrap();
        form.blur("username").unwrap();

        assert!(!form.state().has_errors());
        assert!(form.submit().unwrap().is_valid());
    }
}
