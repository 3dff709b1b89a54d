//! UI component library for Portico
//!
//! Components are Rust structs with serializable properties that a
//! rendering frontend draws. Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Theme-aware styling through the theme system
//! - Event handler identifiers the frontend reports back
//!
//! # Available Components
//!
//! - [`Icon`] - Named glyph from the icon set
//! - [`Button`] - Interactive button with a loading state
//! - [`TextField`] - View model of one form field
//! - [`FormView`] - A titled form with its fields and submit button
//! - [`TabBar`] - Main-section tab bar
//! - [`Toast`] / [`ToastQueue`] - Transient notices

use std::sync::Arc;

use app_state::{FieldSpec, FieldState, Form, VisualState};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::navigation::NavigationTab;
use crate::theme::{Color, Theme};
use crate::tokens::{border, radius, sizing};

// =============================================================================
// Common Types
// =============================================================================

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

// =============================================================================
// Icon Component
// =============================================================================

/// Icon size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    /// Small (16px)
    Sm,
    /// Medium (20px)
    #[default]
    Md,
    /// Large (24px)
    Lg,
    /// Tab bar (28px)
    Tab,
}

impl IconSize {
    /// Get the pixel size
    pub fn pixels(&self) -> f32 {
        match self {
            IconSize::Sm => sizing::icon::SM,
            IconSize::Md => sizing::icon::MD,
            IconSize::Lg => sizing::icon::LG,
            IconSize::Tab => sizing::icon::TAB,
        }
    }
}

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: String,
    /// Icon size
    #[serde(default)]
    pub size: IconSize,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Accessible label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::Md,
            color: None,
            label: None,
        }
    }

    /// Set icon size
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Set icon color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set accessible label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the pixel size
    pub fn pixel_size(&self) -> f32 {
        self.size.pixels()
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid background button
    #[default]
    Solid,
    /// Outlined button with border
    Outline,
    /// Text-only link button
    Ghost,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Accessible label and visible text
    pub label: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether the button shows a spinner instead of its label
    #[serde(default)]
    pub loading: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            loading: false,
            on_press: None,
        }
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state; a loading button does not accept presses
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Whether a press would be delivered
    pub fn is_pressable(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let inactive = !self.is_pressable();
        let (background, text_color, border_color) = match self.variant {
            ButtonVariant::Solid if inactive => (
                theme.palette.primary.primary_200.clone(),
                theme.palette.white.clone(),
                None,
            ),
            ButtonVariant::Solid => (
                theme.palette.primary.primary_500.clone(),
                theme.palette.white.clone(),
                None,
            ),
            ButtonVariant::Outline => (
                "transparent".to_string(),
                theme.palette.primary.primary_600.clone(),
                Some(theme.palette.primary.primary_500.clone()),
            ),
            ButtonVariant::Ghost => (
                "transparent".to_string(),
                theme.colors.default.link.clone(),
                None,
            ),
        };

        ButtonStyles {
            background,
            text_color,
            border_width: if border_color.is_some() { border::THIN } else { 0.0 },
            border_color,
            height: match self.variant {
                ButtonVariant::Ghost => sizing::button::SM_HEIGHT,
                _ => sizing::button::LG_HEIGHT,
            },
            border_radius: radius::MD,
            opacity: if inactive { 0.7 } else { 1.0 },
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Text color
    pub text_color: Color,
    /// Border color
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Height
    pub height: f32,
    /// Border radius
    pub border_radius: f32,
    /// Opacity
    pub opacity: f32,
}

// =============================================================================
// Text Field Component
// =============================================================================

/// Icon shown while text is obscured; pressing it reveals the text
pub const REVEAL_ICON: &str = "eye";
/// Icon shown while text is visible; pressing it obscures the text
pub const CONCEAL_ICON: &str = "eye-off";

/// View model of one form field
///
/// Built from a field's declaration and its live state. The outline color
/// is never chosen here; [`TextField::computed_styles`] asks the theme for
/// the color matching [`TextField::visual_state`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    /// Field name
    pub name: String,
    /// Current text
    pub value: String,
    /// Placeholder text
    pub placeholder: String,
    /// Whether the entry obscures typed text
    pub secure_entry: bool,
    /// Leading glyph
    pub leading_icon: Icon,
    /// Trailing visibility toggle, when the field has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<Icon>,
    /// Interaction state
    pub visual_state: VisualState,
    /// Inline error shown under the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Maximum length hint for the input widget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl TextField {
    /// Build the view model for one field
    pub fn new(spec: &FieldSpec, state: &FieldState) -> Self {
        let trailing_icon = (spec.secure && spec.show_visibility_toggle).then(|| {
            let (name, label) = if state.text_hidden {
                (REVEAL_ICON, "Show password")
            } else {
                (CONCEAL_ICON, "Hide password")
            };
            Icon::new(name).with_label(label)
        });

        Self {
            name: spec.name.clone(),
            value: state.value.clone(),
            placeholder: spec.placeholder.clone(),
            secure_entry: spec.secure && state.text_hidden,
            leading_icon: Icon::new(spec.leading_icon.icon_name()),
            trailing_icon,
            visual_state: state.visual_state,
            error_message: state.error_message.clone(),
            max_length: spec.max_length,
        }
    }

    /// Handler id for text changes
    pub fn on_change_text(&self) -> EventHandler {
        format!("{}:change", self.name)
    }

    /// Handler id for focus
    pub fn on_focus(&self) -> EventHandler {
        format!("{}:focus", self.name)
    }

    /// Handler id for blur
    pub fn on_blur(&self) -> EventHandler {
        format!("{}:blur", self.name)
    }

    /// Handler id for the visibility toggle, when present
    pub fn on_toggle_visibility(&self) -> Option<EventHandler> {
        self.trailing_icon
            .as_ref()
            .map(|_| format!("{}:toggle-visibility", self.name))
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &Theme) -> TextFieldStyles {
        let border_color = theme.field_border_color(self.visual_state).clone();
        let border_width = match self.visual_state {
            VisualState::Idle => border::THIN,
            VisualState::Focused | VisualState::Error => border::MEDIUM,
        };

        TextFieldStyles {
            icon_color: match self.visual_state {
                VisualState::Idle => theme.colors.default.icon.clone(),
                _ => border_color.clone(),
            },
            border_color,
            border_width,
            background: theme.colors.default.background.clone(),
            text_color: theme.colors.default.text.clone(),
            placeholder_color: theme.colors.default.placeholder.clone(),
            error_text_color: theme.colors.field.alert.clone(),
            height: sizing::input::HEIGHT,
            padding_horizontal: sizing::input::PADDING_X,
            icon_gap: sizing::input::ICON_GAP,
            border_radius: radius::MD,
        }
    }
}

/// Computed text field styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFieldStyles {
    /// Outline color
    pub border_color: Color,
    /// Outline width
    pub border_width: f32,
    /// Glyph color
    pub icon_color: Color,
    /// Background color
    pub background: Color,
    /// Text color
    pub text_color: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Inline error color
    pub error_text_color: Color,
    /// Height
    pub height: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Gap between glyphs and text
    pub icon_gap: f32,
    /// Border radius
    pub border_radius: f32,
}

// =============================================================================
// Form View
// =============================================================================

/// Handler id reported when the submit button is pressed
pub const SUBMIT_HANDLER: &str = "form:submit";
/// Text between the form and its alternative sign-in buttons
pub const ALTERNATIVES_DIVIDER: &str = "- OR Continue with -";

/// A titled form ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    /// Screen title
    pub title: String,
    /// Fields in declaration order
    pub fields: Vec<TextField>,
    /// Submit button; loading while a submission is in flight
    pub submit: Button,
    /// Secondary links, each pressing to a route name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Button>,
    /// Divider shown above the alternatives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider: Option<String>,
    /// Other ways to sign in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Button>,
}

impl FormView {
    /// Build the view of a form's current state
    pub fn new(title: impl Into<String>, submit_label: impl Into<String>, form: &Form) -> Self {
        let fields = form
            .specs()
            .iter()
            .filter_map(|spec| form.field(&spec.name).map(|state| TextField::new(spec, state)))
            .collect();

        Self {
            title: title.into(),
            fields,
            submit: Button::new(submit_label)
                .loading(form.is_submitting())
                .on_press(SUBMIT_HANDLER),
            links: Vec::new(),
            divider: None,
            alternatives: Vec::new(),
        }
    }

    /// Add an alternative sign-in button under the divider
    pub fn with_alternative(mut self, label: impl Into<String>, handler: impl Into<String>) -> Self {
        self.divider
            .get_or_insert_with(|| ALTERNATIVES_DIVIDER.to_string());
        self.alternatives.push(
            Button::new(label)
                .with_variant(ButtonVariant::Outline)
                .on_press(handler),
        );
        self
    }

    /// Add a secondary link to a route
    pub fn with_link(mut self, label: impl Into<String>, route_name: impl Into<String>) -> Self {
        self.links.push(
            Button::new(label)
                .with_variant(ButtonVariant::Ghost)
                .on_press(route_name),
        );
        self
    }

    /// View model of a field by name
    pub fn field(&self, name: &str) -> Option<&TextField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// =============================================================================
// Tab Bar Component
// =============================================================================

/// Tab bar item representing a navigation tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarItem {
    /// The tab
    pub tab: NavigationTab,
    /// Icon name for inactive state (outline variant)
    pub icon: String,
    /// Icon name for active state
    pub icon_active: String,
    /// Label text; empty for the centre button
    pub label: String,
    /// Whether this tab is currently active
    pub is_active: bool,
    /// Raised centre action instead of a tab
    pub is_center: bool,
}

impl TabBarItem {
    /// Create the item for a tab
    pub fn new(tab: NavigationTab) -> Self {
        let is_center = tab.is_center_action();
        Self {
            tab,
            icon: format!("{}-outline", tab.icon()),
            icon_active: tab.icon().to_string(),
            label: if is_center {
                String::new()
            } else {
                tab.label().to_string()
            },
            is_active: false,
            is_center,
        }
    }

    /// Handler id reported when the item is pressed
    pub fn on_press(&self) -> EventHandler {
        format!("tab:{}", self.tab.label().to_lowercase())
    }

    /// Get the current icon based on active state
    pub fn current_icon(&self) -> &str {
        if self.is_active {
            &self.icon_active
        } else {
            &self.icon
        }
    }
}

/// Main-section tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBar {
    /// Tab items
    pub items: Vec<TabBarItem>,
    /// Whether to show labels
    pub show_labels: bool,
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBar {
    /// Create a tab bar with every tab, Home active
    pub fn new() -> Self {
        Self {
            items: NavigationTab::all().into_iter().map(TabBarItem::new).collect(),
            show_labels: true,
        }
        .set_active(NavigationTab::Home)
    }

    /// Set the active tab; the centre button never becomes active
    pub fn set_active(mut self, tab: NavigationTab) -> Self {
        if tab.is_center_action() {
            return self;
        }
        for item in &mut self.items {
            item.is_active = item.tab == tab;
        }
        self
    }

    /// Set whether to show labels
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Get the currently active tab
    pub fn active_tab(&self) -> Option<NavigationTab> {
        self.items.iter().find(|i| i.is_active).map(|i| i.tab)
    }

    /// Compute styles for a tab item
    pub fn item_styles(&self, item: &TabBarItem, theme: &Theme) -> TabItemStyles {
        TabItemStyles {
            icon_size: IconSize::Tab.pixels(),
            center_button: item.is_center.then(|| CenterButtonStyles {
                size: sizing::tab_bar::CENTER_BUTTON,
                lift: sizing::tab_bar::CENTER_LIFT,
                background: theme.palette.white.clone(),
                shadow_color: theme.palette.primary.primary_500.clone(),
            }),
            icon_color: if item.is_active {
                theme.palette.primary.primary_500.clone()
            } else {
                theme.colors.default.icon.clone()
            },
            label_color: if item.is_active {
                theme.colors.default.text.clone()
            } else {
                theme.colors.default.text_light.clone()
            },
        }
    }
}

/// Computed styles for a tab item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItemStyles {
    /// Icon size in pixels
    pub icon_size: f32,
    /// Circle behind the centre button
    pub center_button: Option<CenterButtonStyles>,
    /// Icon color
    pub icon_color: Color,
    /// Label color
    pub label_color: Color,
}

/// Raised circular container of the centre tab button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterButtonStyles {
    /// Diameter in pixels
    pub size: f32,
    /// Offset above the bar in pixels
    pub lift: f32,
    /// Fill color
    pub background: Color,
    /// Drop shadow color
    pub shadow_color: Color,
}

// =============================================================================
// Toast Components
// =============================================================================

/// Default toast duration in milliseconds
pub const DEFAULT_TOAST_DURATION: u32 = 3000;

/// Toast variant/type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    /// Default style
    #[default]
    Default,
    /// Success notification
    Success,
    /// Error notification
    Error,
    /// Informational notification
    Info,
}

impl ToastType {
    /// Get icon name for this toast type
    pub fn icon(&self) -> &'static str {
        match self {
            ToastType::Default | ToastType::Success => "circle-check",
            ToastType::Error | ToastType::Info => "circle-info",
        }
    }
}

/// Individual toast notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique identifier
    pub id: String,
    /// Toast type/variant
    pub toast_type: ToastType,
    /// Message text
    pub message: String,
    /// Duration in milliseconds (None for persistent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Timestamp when created (ms since the Unix epoch)
    pub created_at: u64,
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl Toast {
    /// Create a new toast with default settings
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            toast_type: ToastType::Default,
            message: message.into(),
            duration: Some(DEFAULT_TOAST_DURATION),
            created_at: now_millis(),
        }
    }

    /// Create a success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_type(ToastType::Success)
    }

    /// Create an error toast
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_type(ToastType::Error)
    }

    /// Create an info toast
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_type(ToastType::Info)
    }

    /// Set toast type
    pub fn with_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = toast_type;
        self
    }

    /// Make persistent (no auto-dismiss)
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ToastStyles {
        let (background, border, text_color) = match self.toast_type {
            ToastType::Default | ToastType::Info => (
                theme.palette.contrast.contrast_50.clone(),
                theme.palette.contrast.contrast_100.clone(),
                theme.colors.default.text.clone(),
            ),
            ToastType::Success => (
                theme.palette.primary.primary_50.clone(),
                theme.palette.primary.primary_200.clone(),
                theme.palette.primary.primary_600.clone(),
            ),
            ToastType::Error => (
                theme.palette.negative.negative_50.clone(),
                theme.palette.negative.negative_500.clone(),
                theme.palette.negative.negative_700.clone(),
            ),
        };

        ToastStyles {
            background,
            border,
            text_color,
            border_radius: radius::MD,
        }
    }
}

/// Computed toast styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border: Color,
    /// Text color
    pub text_color: Color,
    /// Border radius
    pub border_radius: f32,
}

/// Queue of active toasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastQueue {
    /// Active toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Maximum number of visible toasts
    pub max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            toasts: Vec::new(),
            max_visible: 3,
        }
    }
}

/// Toast queue shared between screens and the renderer
pub type SharedToastQueue = Arc<Mutex<ToastQueue>>;

impl ToastQueue {
    /// Create a new toast queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue behind a shared lock
    pub fn shared() -> SharedToastQueue {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Set max visible toasts
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }

    /// Add a toast
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(kind = ?toast.toast_type, "Toast queued");
        self.toasts.push(toast);
    }

    /// Remove a toast by ID
    pub fn dismiss(&mut self, id: &str) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(pos))
    }

    /// Clear all toasts
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Get visible toasts (respecting max_visible)
    pub fn visible(&self) -> &[Toast] {
        let len = self.toasts.len();
        &self.toasts[len.saturating_sub(self.max_visible)..]
    }

    /// Most recent toast
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Get number of toasts
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Drop toasts whose duration has elapsed at `current_time`
    pub fn process_auto_dismiss(&mut self, current_time: u64) -> Vec<Toast> {
        let mut dismissed = Vec::new();
        self.toasts.retain(|toast| match toast.duration {
            Some(duration) if current_time >= toast.created_at + duration as u64 => {
                dismissed.push(toast.clone());
                false
            }
            _ => true,
        });
        dismissed
    }
}

// =============================================================================
// Tests
// =============================================================================
