//! User interface for Portico
//!
//! This crate provides the UI layer: navigation, theming, design tokens,
//! presentational components and the application screens.
//!
//! # Modules
//!
//! - [`theme`] - Theme provider, color palettes and the field outline lookup
//! - [`tokens`] - Design tokens (spacing, sizing, radius, border)
//! - [`components`] - UI component library
//! - [`screens`] - Form screens, entry screen and the tabbed home shell
//! - [`navigation`] - Routes, navigation stack and the `Navigator` seam
//!
//! # Example
//!
//! ```rust
//! use app_state::VisualState;
//! use app_ui::screens::ScreenForm;
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//!
//! let fields = ScreenForm::Login.fields();
//! assert_eq!(fields[0].name, "username");
//! assert_ne!(
//!     theme.field_border_color(VisualState::Focused),
//!     theme.field_border_color(VisualState::Error),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{
    dark_theme, get_theme, light_theme, FieldColors, Palette, Theme, ThemeColors, ThemeName,
    ThemeState,
};

pub use tokens::{border, radius, sizing, spacing};

pub use components::{
    Button, ButtonStyles, ButtonVariant, CenterButtonStyles, FormView, Icon, IconSize,
    SharedToastQueue, TabBar, TabBarItem, TextField, TextFieldStyles, Toast, ToastQueue,
    ToastType,
};

pub use navigation::{
    NavigationHandle, NavigationStack, NavigationState, NavigationTab, Navigator, Route,
    StackEntry,
};

pub use screens::{
    EntryScreen, FormScreen, HomeShell, NoticeAction, ScreenContext, ScreenForm, SessionAction,
    SignInProvider,
};
