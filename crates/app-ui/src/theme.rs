//! Design system and theme provider for Portico
//!
//! Two themes are supported:
//! - Light: white surfaces, indigo accents
//! - Dark: slate surfaces, lighter indigo accents
//!
//! Field outlines are not picked by components. They come from a single
//! lookup, [`Theme::field_border_color`], keyed by the field's
//! [`VisualState`].
//!
//! # Usage
//!
//! ```rust
//! use app_state::VisualState;
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Light);
//! let idle = theme.field_border_color(VisualState::Idle);
//! let error = theme.field_border_color(VisualState::Error);
//! assert_ne!(idle, error);
//! ```

use app_state::VisualState;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

// =============================================================================
// Palette
// =============================================================================

/// Neutral scale (backgrounds, borders, muted text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastPalette {
    /// Surface
    pub contrast_0: Color,
    /// Subtle surface
    pub contrast_50: Color,
    /// Hairline borders
    pub contrast_100: Color,
    /// Resting field outline
    pub contrast_200: Color,
    /// Placeholder text
    pub contrast_400: Color,
    /// Icons
    pub contrast_500: Color,
    /// Secondary text
    pub contrast_700: Color,
    /// Primary text
    pub contrast_900: Color,
}

/// Brand accent scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryPalette {
    pub primary_50: Color,
    pub primary_200: Color,
    pub primary_500: Color,
    pub primary_600: Color,
}

/// Error scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativePalette {
    pub negative_50: Color,
    pub negative_500: Color,
    pub negative_700: Color,
}

/// Complete color palette for a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// White color
    pub white: Color,
    /// Black color
    pub black: Color,
    /// Contrast/neutral colors
    #[serde(flatten)]
    pub contrast: ContrastPalette,
    /// Primary brand colors
    #[serde(flatten)]
    pub primary: PrimaryPalette,
    /// Negative/error colors
    #[serde(flatten)]
    pub negative: NegativePalette,
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic colors for specific UI purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub text: Color,
    /// Secondary/muted text color
    pub text_light: Color,
    /// Placeholder text color
    pub placeholder: Color,
    /// Link color
    pub link: Color,
    /// Icon color
    pub icon: Color,
}

/// Field outline colors, one per visual state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldColors {
    /// Idle outline
    pub neutral: Color,
    /// Focused outline
    pub emphasis: Color,
    /// Errored outline and message
    pub alert: Color,
}

/// All semantic color sets for a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Default colors (for general UI)
    pub default: SemanticColors,
    /// Field outlines
    pub field: FieldColors,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color palette
    pub palette: Palette,
    /// Semantic theme colors
    pub colors: ThemeColors,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }

    /// Outline color for a field in the given state
    pub fn field_border_color(&self, state: VisualState) -> &Color {
        match state {
            VisualState::Idle => &self.colors.field.neutral,
            VisualState::Focused => &self.colors.field.emphasis,
            VisualState::Error => &self.colors.field.alert,
        }
    }
}

fn build_theme(name: ThemeName, palette: Palette) -> Theme {
    let colors = ThemeColors {
        default: SemanticColors {
            background: palette.contrast.contrast_0.clone(),
            text: palette.contrast.contrast_900.clone(),
            text_light: palette.contrast.contrast_700.clone(),
            placeholder: palette.contrast.contrast_400.clone(),
            link: palette.primary.primary_500.clone(),
            icon: palette.contrast.contrast_500.clone(),
        },
        field: FieldColors {
            neutral: palette.contrast.contrast_200.clone(),
            emphasis: palette.primary.primary_500.clone(),
            alert: palette.negative.negative_500.clone(),
        },
    };

    Theme { name, palette, colors }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    build_theme(
        ThemeName::Light,
        Palette {
            white: "#FFFFFF".to_string(),
            black: "#000000".to_string(),
            contrast: ContrastPalette {
                contrast_0: "#FFFFFF".to_string(),
                contrast_50: "#F4F5F7".to_string(),
                contrast_100: "#E6E8EC".to_string(),
                contrast_200: "#D0D4DB".to_string(),
                contrast_400: "#9AA1AD".to_string(),
                contrast_500: "#6E7683".to_string(),
                contrast_700: "#3F4550".to_string(),
                contrast_900: "#14171C".to_string(),
            },
            primary: PrimaryPalette {
                primary_50: "#EEF0FF".to_string(),
                primary_200: "#C3C8FF".to_string(),
                primary_500: "#4F5BD5".to_string(),
                primary_600: "#3E48B8".to_string(),
            },
            negative: NegativePalette {
                negative_50: "#FFF0F0".to_string(),
                negative_500: "#E5484D".to_string(),
                negative_700: "#B4232A".to_string(),
            },
        },
    )
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    build_theme(
        ThemeName::Dark,
        Palette {
            white: "#FFFFFF".to_string(),
            black: "#000000".to_string(),
            contrast: ContrastPalette {
                contrast_0: "#0F1218".to_string(),
                contrast_50: "#171B23".to_string(),
                contrast_100: "#222834".to_string(),
                contrast_200: "#2F3644".to_string(),
                contrast_400: "#5B6476".to_string(),
                contrast_500: "#7C8596".to_string(),
                contrast_700: "#B4BBC8".to_string(),
                contrast_900: "#F1F3F6".to_string(),
            },
            primary: PrimaryPalette {
                primary_50: "#1B1E3A".to_string(),
                primary_200: "#343C86".to_string(),
                primary_500: "#7C86F2".to_string(),
                primary_600: "#9AA2F6".to_string(),
            },
            negative: NegativePalette {
                negative_50: "#2A1214".to_string(),
                negative_500: "#F2666B".to_string(),
                negative_700: "#F79A9D".to_string(),
            },
        },
    )
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Theme provider state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default = "light_theme")]
    pub theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
        }
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: ThemeName) {
        self.theme_name = theme_name;
        self.theme = get_theme(theme_name);
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}
