//! Field declarations and per-field interaction state
//!
//! A [`FieldSpec`] is the immutable declaration of one input on a screen.
//! A [`FieldState`] is its live counterpart, driven by user events
//! (text change, focus, blur, visibility toggle) and by submit-time
//! validation failures.
//!
//! The three-way [`VisualState`] is the only thing a renderer needs to pick
//! the field's outline color; nothing outside these transitions writes it.

use serde::{Deserialize, Serialize};

use crate::validation::FailureReason;

/// Glyph shown at the start of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadingIcon {
    /// Person silhouette
    #[default]
    User,
    /// Envelope
    Mail,
    /// Padlock
    Lock,
    /// Key
    Key,
}

impl LeadingIcon {
    /// Icon set name for this glyph
    pub fn icon_name(&self) -> &'static str {
        match self {
            LeadingIcon::User => "user",
            LeadingIcon::Mail => "envelope",
            LeadingIcon::Lock => "lock",
            LeadingIcon::Key => "key",
        }
    }
}

/// Interaction state driving a field's outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    /// Not focused, no error
    #[default]
    Idle,
    /// Focused, no error shown
    Focused,
    /// A submit rejected this field
    Error,
}

/// Error-clearing behavior shared by all fields of one form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPolicy {
    /// Focusing a field in error clears the error
    pub clear_error_on_focus: bool,
    /// Changing a field in error to empty text clears the error
    pub clear_error_on_empty: bool,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            clear_error_on_focus: true,
            clear_error_on_empty: true,
        }
    }
}

impl FormPolicy {
    /// Policy that never clears errors implicitly
    pub fn sticky() -> Self {
        Self {
            clear_error_on_focus: false,
            clear_error_on_empty: false,
        }
    }

    /// Set whether focus clears errors
    pub fn with_clear_on_focus(mut self, enabled: bool) -> Self {
        self.clear_error_on_focus = enabled;
        self
    }

    /// Set whether emptying a field clears errors
    pub fn with_clear_on_empty(mut self, enabled: bool) -> Self {
        self.clear_error_on_empty = enabled;
        self
    }
}

/// Static declaration of one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within its form
    pub name: String,
    /// Human-readable label, used in messages
    pub label: String,
    /// Placeholder text
    pub placeholder: String,
    /// Whether typed text is obscured
    #[serde(default)]
    pub secure: bool,
    /// Whether an empty value fails validation
    #[serde(default)]
    pub requires_value: bool,
    /// Maximum length in grapheme clusters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Leading glyph
    #[serde(default)]
    pub leading_icon: LeadingIcon,
    /// Whether a trailing toggle reveals obscured text
    #[serde(default)]
    pub show_visibility_toggle: bool,
}

impl FieldSpec {
    /// Declare a plain text field; the placeholder defaults to the label
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: name.into(),
            placeholder: label.clone(),
            label,
            secure: false,
            requires_value: false,
            max_length: None,
            leading_icon: LeadingIcon::default(),
            show_visibility_toggle: false,
        }
    }

    /// Declare a secure field with a visibility toggle and a lock glyph
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            secure: true,
            show_visibility_toggle: true,
            leading_icon: LeadingIcon::Lock,
            ..Self::new(name, label)
        }
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.requires_value = true;
        self
    }

    /// Limit the value length
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the leading glyph
    pub fn with_icon(mut self, icon: LeadingIcon) -> Self {
        self.leading_icon = icon;
        self
    }

    /// Human-readable message for a failure on this field
    pub fn failure_message(&self, reason: FailureReason) -> String {
        match reason {
            FailureReason::Missing => format!("{} is required", self.label),
            FailureReason::TooLong => match self.max_length {
                Some(max) => format!("{} must be at most {} characters", self.label, max),
                None => format!("{} is too long", self.label),
            },
        }
    }
}

/// Live state of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// Current text; never absent
    pub value: String,
    /// Outline state
    pub visual_state: VisualState,
    /// Inline error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Whether typed text is currently obscured
    pub text_hidden: bool,
}

impl FieldState {
    /// Fresh state for a newly mounted field
    pub fn new(spec: &FieldSpec) -> Self {
        Self {
            value: String::new(),
            visual_state: VisualState::Idle,
            error_message: None,
            text_hidden: spec.secure,
        }
    }

    /// Whether an error is currently shown
    pub fn has_error(&self) -> bool {
        self.visual_state == VisualState::Error
    }

    /// Replace the value with newly typed text
    pub fn change_text(&mut self, text: impl Into<String>, policy: &FormPolicy) {
        self.value = text.into();
        if policy.clear_error_on_empty && self.value.is_empty() && self.has_error() {
            self.clear_error();
            self.visual_state = VisualState::Idle;
        }
    }

    /// The field gained focus
    pub fn focus(&mut self, policy: &FormPolicy) {
        if self.has_error() {
            if !policy.clear_error_on_focus {
                return;
            }
            self.clear_error();
        }
        self.visual_state = VisualState::Focused;
    }

    /// The field lost focus; an error outlives blur
    pub fn blur(&mut self) {
        if !self.has_error() {
            self.visual_state = VisualState::Idle;
        }
    }

    /// Flip text obscuring; returns false for non-secure fields
    pub fn toggle_visibility(&mut self, spec: &FieldSpec) -> bool {
        if !spec.secure {
            return false;
        }
        self.text_hidden = !self.text_hidden;
        true
    }

    /// Show a validation failure on this field
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.visual_state = VisualState::Error;
        self.error_message = Some(message.into());
    }

    fn clear_error(&mut self) {
        self.error_message = None;
    }
}
